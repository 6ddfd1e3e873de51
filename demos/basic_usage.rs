use std::time::Duration;

use stocknews_rs::{Analyzer, AnalyzerConfig, YfClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ticker = std::env::args().nth(1).unwrap_or_else(|| "TSLA".to_string());

    // 1. Configuration comes from GEMINI_API_KEY (+ optional STOCKNEWS_MODEL / STOCKNEWS_TIMEZONE).
    let cfg = AnalyzerConfig::from_env()?
        .request_timeout(Duration::from_secs(20))
        .classify_concurrency(4);

    // 2. A Yahoo client with a 10-second timeout.
    let client = YfClient::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    let analyzer = Analyzer::new(&client, &cfg)?;
    let result = analyzer.run(&ticker, 10).await?;

    // 3. Price summary.
    let p = &result.price;
    let session = p
        .session_ts
        .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
        .map(|dt| format!(" (session of {})", dt.format("%Y-%m-%d")))
        .unwrap_or_default();
    println!("--- {}{session} ---", p.ticker);
    match (p.open, p.close, p.intraday_change_pct) {
        (Some(open), Some(close), change) => {
            println!("Open: ${open:.2}  Close: ${close:.2}");
            if let Some(c) = change {
                println!("Intraday: {c:+.2}%");
            }
        }
        _ => println!("Price data unavailable"),
    }
    if let (Some(prev), Some(change)) = (p.previous_close, p.previous_close_change_pct) {
        println!("Previous close: ${prev:.2} ({change:+.2}%)");
    }
    println!();

    // 4. Articles in source order.
    println!("Found {} news articles", result.articles.len());
    for a in &result.articles {
        println!("[{}] {}", a.sentiment, a.title);
        println!("  Published: {}", a.published_at);
        if a.has_link() {
            println!("  {}", a.link);
        }
    }

    if let Some(overall) = result.overall_sentiment() {
        println!();
        println!("Overall sentiment: {overall}");
    }

    Ok(())
}
