use std::time::Duration;

use chrono_tz::Tz;
use url::Url;

use crate::core::AnalyzerError;
use crate::core::client::RetryConfig;
use crate::core::client::constants::{DEFAULT_GEMINI_ENDPOINT, DEFAULT_GEMINI_MODEL, DEFAULT_TIMEZONE};

/// Environment variable holding the Gemini API key.
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
/// Environment variable overriding the Gemini model id.
pub const ENV_MODEL: &str = "STOCKNEWS_MODEL";
/// Environment variable overriding the display time zone (IANA name).
pub const ENV_TIMEZONE: &str = "STOCKNEWS_TIMEZONE";

/// Everything the analyzer needs besides the ticker: service endpoint, credentials,
/// model id and presentation time zone.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub(crate) endpoint: Url,
    pub(crate) model: String,
    pub(crate) api_key: String,
    pub(crate) timezone: Tz,
    pub(crate) classify_concurrency: usize,
    pub(crate) timeout: Option<Duration>,
    pub(crate) retry: RetryConfig,
}

impl AnalyzerConfig {
    /// Starts a configuration with the given Gemini API key and defaults for everything else.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Config`] if `api_key` is blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self, AnalyzerError> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(AnalyzerError::Config("API key is required".into()));
        }
        Ok(Self {
            endpoint: Url::parse(DEFAULT_GEMINI_ENDPOINT)?,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_key,
            timezone: DEFAULT_TIMEZONE,
            classify_concurrency: 1,
            timeout: None,
            retry: RetryConfig::default(),
        })
    }

    /// Reads `GEMINI_API_KEY` (required), `STOCKNEWS_MODEL` and `STOCKNEWS_TIMEZONE`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Config`] if the key is missing or the time zone is not a
    /// known IANA name.
    pub fn from_env() -> Result<Self, AnalyzerError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`from_env`](Self::from_env).
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AnalyzerError> {
        let key = lookup(ENV_API_KEY)
            .ok_or_else(|| AnalyzerError::Config(format!("{ENV_API_KEY} is not set")))?;
        let mut cfg = Self::new(key)?;
        if let Some(model) = lookup(ENV_MODEL).filter(|m| !m.trim().is_empty()) {
            cfg = cfg.model(model.trim());
        }
        if let Some(tz) = lookup(ENV_TIMEZONE) {
            cfg = cfg.timezone(parse_timezone(&tz)?);
        }
        Ok(cfg)
    }

    /// Overrides the Gemini API base (e.g. `https://generativelanguage.googleapis.com/v1beta/`).
    #[must_use]
    pub fn endpoint(mut self, url: Url) -> Self {
        self.endpoint = url;
        self
    }

    /// Overrides the model id used for classification.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the zone article timestamps are rendered in.
    #[must_use]
    pub const fn timezone(mut self, tz: Tz) -> Self {
        self.timezone = tz;
        self
    }

    /// Maximum number of classification calls in flight at once. `0` is treated as `1`.
    #[must_use]
    pub fn classify_concurrency(mut self, n: usize) -> Self {
        self.classify_concurrency = n.max(1);
        self
    }

    /// Overall timeout applied to every outbound HTTP request.
    #[must_use]
    pub const fn request_timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Retry policy shared by the news source and the classifier.
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = cfg;
        self
    }

    /// The model id classification requests are sent to.
    pub fn model_id(&self) -> &str {
        &self.model
    }

    /// The zone article timestamps are rendered in.
    pub fn target_timezone(&self) -> Tz {
        self.timezone
    }
}

/// Parses an IANA zone name such as `America/Denver`.
///
/// # Errors
///
/// Returns [`AnalyzerError::Config`] for unknown names.
pub fn parse_timezone(name: &str) -> Result<Tz, AnalyzerError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| AnalyzerError::Config(format!("unknown time zone: {name}")))
}
