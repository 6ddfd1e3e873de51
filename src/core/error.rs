use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body could not be decoded as JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from an API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The ticker symbol was empty after trimming.
    #[error("invalid ticker symbol: {0:?}")]
    InvalidTicker(String),

    /// The analyzer configuration is incomplete or contains an invalid value.
    #[error("configuration error: {0}")]
    Config(String),

    /// The news source could not be reached or returned nothing usable for the ticker.
    #[error("news source unavailable for {ticker}: {source}")]
    SourceUnavailable {
        /// The ticker the pipeline was run for.
        ticker: String,
        /// The underlying failure.
        #[source]
        source: Box<AnalyzerError>,
    },

    /// The text-generation service failed to classify a piece of text.
    #[error("classification failed: {0}")]
    Classification(String),
}

impl AnalyzerError {
    /// Wraps `self` as a pipeline-level `SourceUnavailable` failure for `ticker`.
    pub(crate) fn source_unavailable(self, ticker: &str) -> Self {
        Self::SourceUnavailable {
            ticker: ticker.to_string(),
            source: Box::new(self),
        }
    }
}
