//! Raw source gateway: price history and untyped news records for a ticker.

mod api;
mod model;
mod wire;

pub use model::{PriceSession, RawNewsRecord};

use std::{future::Future, pin::Pin};

use crate::core::{AnalyzerError, YfClient, client::RetryConfig};

/// Boxed, sendable future returned by the service traits in this crate.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Upstream market-data and news provider.
///
/// This allows the pipeline to run against Yahoo in production and against in-memory
/// fixtures in tests. It is implemented by [`YahooGateway`].
pub trait SourceGateway: Send + Sync {
    /// Fetches up to `sessions` most recent daily sessions, oldest first.
    fn price_history<'a>(
        &'a self,
        ticker: &'a str,
        sessions: usize,
    ) -> BoxFuture<'a, Result<Vec<PriceSession>, AnalyzerError>>;

    /// Fetches raw news records in source order. `count` is a hint, not a guarantee.
    fn news<'a>(
        &'a self,
        ticker: &'a str,
        count: u32,
    ) -> BoxFuture<'a, Result<Vec<RawNewsRecord>, AnalyzerError>>;
}

/// [`SourceGateway`] backed by the Yahoo Finance chart and news endpoints.
#[derive(Debug, Clone)]
pub struct YahooGateway {
    client: YfClient,
    retry_override: Option<RetryConfig>,
}

impl YahooGateway {
    /// Creates a gateway over `client`.
    pub fn new(client: &YfClient) -> Self {
        Self {
            client: client.clone(),
            retry_override: None,
        }
    }

    /// Overrides the client's retry policy for calls made through this gateway.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }
}

impl SourceGateway for YahooGateway {
    fn price_history<'a>(
        &'a self,
        ticker: &'a str,
        sessions: usize,
    ) -> BoxFuture<'a, Result<Vec<PriceSession>, AnalyzerError>> {
        Box::pin(api::fetch_price_history(
            &self.client,
            ticker,
            sessions,
            self.retry_override.as_ref(),
        ))
    }

    fn news<'a>(
        &'a self,
        ticker: &'a str,
        count: u32,
    ) -> BoxFuture<'a, Result<Vec<RawNewsRecord>, AnalyzerError>> {
        Box::pin(api::fetch_news(
            &self.client,
            ticker,
            count,
            self.retry_override.as_ref(),
        ))
    }
}
