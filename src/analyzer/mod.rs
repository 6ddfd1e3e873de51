//! The analyzer pipeline: fetch, normalize, filter, classify, aggregate.

mod model;

pub use model::{PipelineResult, TIE_BREAK_ORDER};

use std::sync::Arc;

use chrono_tz::Tz;
use futures::{StreamExt, stream};

use crate::core::{AnalyzerConfig, AnalyzerError, YfClient};
use crate::gateway::{SourceGateway, YahooGateway};
use crate::news::{self, Article};
use crate::price;
use crate::sentiment::{GeminiClient, Sentiment, SentimentClassifier, TextGenerator};

/// Number of daily sessions requested for price analytics.
pub const PRICE_SESSIONS: usize = 2;

/// Runs the news-and-sentiment pipeline for one ticker at a time.
///
/// Holds no per-run state: `run` may be called repeatedly, or concurrently for different
/// tickers, and each call produces an independent [`PipelineResult`].
///
/// # Example
///
/// ```no_run
/// # use stocknews_rs::{Analyzer, AnalyzerConfig, YfClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let cfg = AnalyzerConfig::from_env()?;
/// let analyzer = Analyzer::new(&YfClient::default(), &cfg)?;
///
/// let result = analyzer.run("TSLA", 10).await?;
/// for article in &result.articles {
///     println!("[{}] {} ({})", article.sentiment, article.title, article.published_at);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Analyzer {
    gateway: Arc<dyn SourceGateway>,
    classifier: SentimentClassifier,
    timezone: Tz,
    classify_concurrency: usize,
}

impl Analyzer {
    /// Builds an analyzer over Yahoo Finance and Gemini.
    ///
    /// # Errors
    ///
    /// Returns an error if the Gemini HTTP client cannot be built.
    pub fn new(client: &YfClient, cfg: &AnalyzerConfig) -> Result<Self, AnalyzerError> {
        let gateway = YahooGateway::new(client);
        let generator = GeminiClient::from_config(cfg)?;
        Ok(Self::with_services(Arc::new(gateway), Arc::new(generator), cfg))
    }

    /// Builds an analyzer over arbitrary source and generation services.
    ///
    /// Only the time zone and concurrency settings of `cfg` are used.
    pub fn with_services(
        gateway: Arc<dyn SourceGateway>,
        generator: Arc<dyn TextGenerator>,
        cfg: &AnalyzerConfig,
    ) -> Self {
        Self {
            gateway,
            classifier: SentimentClassifier::new(generator),
            timezone: cfg.timezone,
            classify_concurrency: cfg.classify_concurrency.max(1),
        }
    }

    /// Fetches, normalizes and classifies news for `ticker` and summarizes its price.
    ///
    /// `count` is passed to the news source as a hint; fewer articles may come back, and
    /// only stories are kept. A failed price fetch yields a snapshot without prices. A
    /// failed classification keeps the article with [`Sentiment::Unknown`].
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::InvalidTicker`] for a blank ticker and
    /// [`AnalyzerError::SourceUnavailable`] if the news fetch fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(concurrency = self.classify_concurrency)))]
    pub async fn run(&self, ticker: &str, count: u32) -> Result<PipelineResult, AnalyzerError> {
        let ticker = normalize_ticker(ticker)?;

        let (prices, raw) = futures::join!(
            self.gateway.price_history(&ticker, PRICE_SESSIONS),
            self.gateway.news(&ticker, count),
        );

        let price = match prices {
            Ok(sessions) => price::snapshot(&ticker, &sessions),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(ticker = %ticker, error = %_e, "price history unavailable");
                price::PriceSnapshot::empty(&ticker)
            }
        };

        let raw = raw.map_err(|e| e.source_unavailable(&ticker))?;

        let stories: Vec<Article> = raw
            .iter()
            .map(|r| news::normalize(r, self.timezone))
            .filter(Article::is_story)
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(raw = raw.len(), stories = stories.len(), "normalized news");

        let articles = self.classify_all(stories).await;

        Ok(PipelineResult {
            ticker,
            articles,
            price,
        })
    }

    // `buffered` yields in input order regardless of completion order.
    async fn classify_all(&self, stories: Vec<Article>) -> Vec<Article> {
        stream::iter(stories)
            .map(|article| self.classify_one(article))
            .buffered(self.classify_concurrency)
            .collect()
            .await
    }

    async fn classify_one(&self, article: Article) -> Article {
        let sentiment = match self.classifier.classify(&article.classification_text()).await {
            Ok(s) => s,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(title = %article.title, error = %_e, "classification failed");
                Sentiment::Unknown
            }
        };
        article.with_sentiment(sentiment)
    }
}

/// Trims and upper-cases a ticker symbol.
///
/// # Errors
///
/// Returns [`AnalyzerError::InvalidTicker`] if nothing is left after trimming.
pub fn normalize_ticker(ticker: &str) -> Result<String, AnalyzerError> {
    let t = ticker.trim();
    if t.is_empty() {
        return Err(AnalyzerError::InvalidTicker(ticker.to_string()));
    }
    Ok(t.to_ascii_uppercase())
}
