use serde::Serialize;

use crate::{
    core::{AnalyzerError, YfClient, client::RetryConfig, net},
    gateway::{
        model::{PriceSession, RawNewsRecord},
        wire,
    },
};

#[derive(Serialize)]
struct ServiceConfig<'a> {
    #[serde(rename = "snippetCount")]
    snippet_count: u32,
    s: &'a [&'a str],
}

#[derive(Serialize)]
struct NewsPayload<'a> {
    #[serde(rename = "serviceConfig")]
    service_config: ServiceConfig<'a>,
}

pub(super) async fn fetch_price_history(
    client: &YfClient,
    symbol: &str,
    sessions: usize,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<PriceSession>, AnalyzerError> {
    let mut url = client.base_chart().join(symbol)?;
    url.query_pairs_mut()
        .append_pair("range", "5d")
        .append_pair("interval", "1d")
        .append_pair("includePrePost", "false");

    let resp = client
        .send_with_retry(client.http().get(url), retry_override)
        .await?;
    let body = net::get_text(resp, "history_chart", symbol).await?;
    decode_chart(&body, sessions)
}

fn decode_chart(body: &str, sessions: usize) -> Result<Vec<PriceSession>, AnalyzerError> {
    let parsed: wire::ChartEnvelope = serde_json::from_str(body)?;

    let chart = parsed
        .chart
        .ok_or_else(|| AnalyzerError::Data("missing chart".into()))?;

    if let Some(err) = chart.error {
        return Err(AnalyzerError::Data(format!(
            "yahoo error: {} - {}",
            err.code, err.description
        )));
    }

    let r0 = chart
        .result
        .and_then(|mut r| r.pop())
        .ok_or_else(|| AnalyzerError::Data("empty result".into()))?;

    let ts = r0.timestamp.unwrap_or_default();
    let quote = r0
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| AnalyzerError::Data("missing quote".into()))?;

    // Points with a null open or close (e.g. a session still forming) are skipped.
    let mut out: Vec<PriceSession> = quote
        .open
        .iter()
        .zip(quote.close.iter())
        .enumerate()
        .filter_map(|(i, (o, c))| {
            Some(PriceSession {
                ts: ts.get(i).copied(),
                open: (*o)?,
                close: (*c)?,
            })
        })
        .collect();

    let skip = out.len().saturating_sub(sessions);
    out.drain(..skip);
    Ok(out)
}

pub(super) async fn fetch_news(
    client: &YfClient,
    symbol: &str,
    count: u32,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<RawNewsRecord>, AnalyzerError> {
    let mut url = client.base_news().join("xhr/ncp")?;
    url.query_pairs_mut()
        .append_pair("queryRef", "latestNews")
        .append_pair("serviceKey", "ncp_fin");

    let payload = NewsPayload {
        service_config: ServiceConfig {
            snippet_count: count,
            s: &[symbol],
        },
    };

    let req = client.http().post(url).json(&payload);
    let resp = client.send_with_retry(req, retry_override).await?;
    let body = net::get_text(resp, "news_latestNews", symbol).await?;
    let envelope: wire::NewsEnvelope = serde_json::from_str(&body)?;

    let items = envelope
        .data
        .and_then(|d| d.ticker_stream)
        .and_then(|ts| ts.stream)
        .unwrap_or_default();

    Ok(items
        .into_iter()
        // Sponsored slots are not news.
        .filter(|item| item.get("ad").is_none_or(serde_json::Value::is_null))
        .map(RawNewsRecord)
        .collect())
}
