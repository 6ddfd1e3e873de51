use httpmock::{
    Method::{GET, POST},
    MockServer,
};
use serde_json::json;
use stocknews_rs::{AnalyzerError, RetryConfig, SourceGateway, YahooGateway, YfClient};
use url::Url;

use crate::common::{chart_body, full_story, news_envelope, video_item};

fn client_for(server: &MockServer) -> YfClient {
    YfClient::builder()
        .base_chart(Url::parse(&format!("{}/v8/finance/chart/", server.base_url())).unwrap())
        .base_news(Url::parse(&format!("{}/", server.base_url())).unwrap())
        .retry_config(RetryConfig::disabled())
        .build()
        .unwrap()
}

#[tokio::test]
async fn news_posts_service_config_and_returns_raw_items_in_order() {
    let server = MockServer::start();
    let sym = "TSLA";

    let expected_payload = json!({
        "serviceConfig": {
            "snippetCount": 7,
            "s": [sym]
        }
    });

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/xhr/ncp")
            .query_param("queryRef", "latestNews")
            .query_param("serviceKey", "ncp_fin")
            .json_body(expected_payload);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(news_envelope(vec![full_story(), video_item()]));
    });

    let gw = YahooGateway::new(&client_for(&server));
    let items = gw.news(sym, 7).await.unwrap();

    mock.assert();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].as_value()["id"], "a1");
    assert_eq!(items[1].as_value()["id"], "a3");
}

#[tokio::test]
async fn news_drops_ad_slots() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/xhr/ncp");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(news_envelope(vec![
                json!({ "id": "ad-1", "ad": { "creative": "x" }, "content": null }),
                full_story(),
                json!({ "id": "plain", "ad": null, "content": { "contentType": "STORY" } }),
            ]));
    });

    let gw = YahooGateway::new(&client_for(&server));
    let items = gw.news("TSLA", 10).await.unwrap();

    let ids: Vec<_> = items.iter().map(|i| i.as_value()["id"].clone()).collect();
    assert_eq!(ids, vec![json!("a1"), json!("plain")]);
}

#[tokio::test]
async fn news_without_stream_is_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/xhr/ncp");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "data": { "tickerStream": null } }));
    });

    let gw = YahooGateway::new(&client_for(&server));
    assert!(gw.news("ZZZZ", 10).await.unwrap().is_empty());
}

#[tokio::test]
async fn news_http_failure_is_a_status_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/xhr/ncp");
        then.status(500);
    });

    let gw = YahooGateway::new(&client_for(&server));
    let err = gw.news("TSLA", 10).await.unwrap_err();
    assert!(matches!(err, AnalyzerError::Status { status: 500, .. }), "{err:?}");
}

#[tokio::test]
async fn price_history_keeps_last_sessions_oldest_first() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/TSLA")
            .query_param("range", "5d")
            .query_param("interval", "1d");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(chart_body(
                &[Some(80.0), Some(85.0), Some(90.0), Some(100.0)],
                &[Some(84.0), Some(89.0), Some(100.0), Some(110.0)],
            ));
    });

    let gw = YahooGateway::new(&client_for(&server));
    let sessions = gw.price_history("TSLA", 2).await.unwrap();

    mock.assert();
    assert_eq!(sessions.len(), 2);
    assert_eq!((sessions[0].open, sessions[0].close), (90.0, 100.0));
    assert_eq!((sessions[1].open, sessions[1].close), (100.0, 110.0));
    assert!(sessions[0].ts.unwrap() < sessions[1].ts.unwrap());
}

#[tokio::test]
async fn price_history_skips_null_points() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/TSLA");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(chart_body(
                &[Some(90.0), Some(100.0), None],
                &[Some(100.0), Some(110.0), Some(111.0)],
            ));
    });

    let gw = YahooGateway::new(&client_for(&server));
    let sessions = gw.price_history("TSLA", 2).await.unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[1].close, 110.0);
}

#[tokio::test]
async fn price_history_surfaces_chart_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/NOPE");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "chart": {
                    "result": null,
                    "error": { "code": "Not Found", "description": "No data found, symbol may be delisted" }
                }
            }));
    });

    let gw = YahooGateway::new(&client_for(&server));
    let err = gw.price_history("NOPE", 2).await.unwrap_err();
    assert!(matches!(err, AnalyzerError::Data(ref m) if m.contains("Not Found")), "{err:?}");
}
