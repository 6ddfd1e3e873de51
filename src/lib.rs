//! stocknews-rs: news sentiment and price-change summary for a stock ticker.
//!
//! One [`Analyzer::run`] call fetches recent Yahoo Finance news and a short daily price
//! history, normalizes each news record into an [`Article`] (every field defaulted when the
//! source omits it), keeps only stories, classifies each story's sentiment with a Gemini
//! model, and returns them together with a [`PriceSnapshot`].
//!
//! Enable the `tracing` feature to get spans around pipeline runs and warnings on degraded
//! paths (price fetch failures, classification failures, retries).

pub mod analyzer;
pub mod core;
pub mod gateway;
pub mod news;
pub mod price;
pub mod sentiment;

pub use analyzer::{Analyzer, PipelineResult};
pub use crate::core::{AnalyzerConfig, AnalyzerError, Backoff, RetryConfig, YfClient, YfClientBuilder};
pub use gateway::{PriceSession, RawNewsRecord, SourceGateway, YahooGateway};
pub use news::Article;
pub use price::PriceSnapshot;
pub use sentiment::{GeminiClient, Sentiment, SentimentClassifier, TextGenerator};

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (default `stocknews_rs=debug`).
///
/// Safe to call more than once; later calls are no-ops.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing_for_tests() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("stocknews_rs=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
