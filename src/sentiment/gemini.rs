use reqwest::Client;
use url::Url;

use crate::core::{AnalyzerConfig, AnalyzerError, RetryConfig, client::send_with_retry, net};
use crate::gateway::BoxFuture;
use crate::sentiment::{TextGenerator, wire};

/// [`TextGenerator`] backed by the Gemini `generateContent` REST call.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    endpoint: Url,
    model: String,
    api_key: String,
    retry: RetryConfig,
}

impl GeminiClient {
    /// Builds a client from the endpoint, model, key, timeout and retry policy in `cfg`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(cfg: &AnalyzerConfig) -> Result<Self, AnalyzerError> {
        let mut httpb = Client::builder();
        if let Some(t) = cfg.timeout {
            httpb = httpb.timeout(t);
        }
        Ok(Self {
            http: httpb.build()?,
            endpoint: cfg.endpoint.clone(),
            model: cfg.model.clone(),
            api_key: cfg.api_key.clone(),
            retry: cfg.retry.clone(),
        })
    }

    fn generate_url(&self) -> Result<Url, AnalyzerError> {
        Ok(self
            .endpoint
            .join(&format!("models/{}:generateContent", self.model))?)
    }

    async fn generate_text(&self, prompt: &str) -> Result<String, AnalyzerError> {
        let url = self.generate_url()?;
        let req = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&wire::GenerateRequest::text(prompt));

        let resp = send_with_retry(req, &self.retry).await?;
        let body = net::get_text(resp, "gemini_generate", &self.model).await?;
        let parsed: wire::GenerateResponse = serde_json::from_str(&body)?;

        let parts = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .ok_or_else(|| AnalyzerError::Data("no candidate in generateContent response".into()))?;

        Ok(parts.into_iter().filter_map(|p| p.text).collect())
    }
}

impl TextGenerator for GeminiClient {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, AnalyzerError>> {
        Box::pin(self.generate_text(prompt))
    }
}
