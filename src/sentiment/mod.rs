//! Sentiment classification through an external text-generation service.

mod gemini;
mod model;
mod wire;

pub use gemini::GeminiClient;
pub use model::Sentiment;

use std::sync::Arc;

use crate::core::AnalyzerError;
use crate::gateway::BoxFuture;

/// One text-in/text-out call to a language model.
pub trait TextGenerator: Send + Sync {
    /// Sends `prompt` and returns the model's raw reply text.
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, AnalyzerError>>;
}

const INSTRUCTION: &str = "Analyze the sentiment of the following news article and classify it \
as POSITIVE, NEGATIVE, or NEUTRAL. No explanation needed, only one word output: either \
POSITIVE, NEGATIVE, or NEUTRAL!";

/// Builds the classification prompt for already-labelled article text.
#[must_use]
pub fn build_prompt(text: &str) -> String {
    format!("{INSTRUCTION}\n\n{text}")
}

/// Classifies text into one of [`Sentiment::CANONICAL`], or [`Sentiment::Unknown`] when the
/// model answers with anything else.
#[derive(Clone)]
pub struct SentimentClassifier {
    generator: Arc<dyn TextGenerator>,
}

impl SentimentClassifier {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Issues one generation request for `text` and parses the reply.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Classification`] if the service call fails. Unexpected
    /// reply text is not an error; it maps to [`Sentiment::Unknown`].
    pub async fn classify(&self, text: &str) -> Result<Sentiment, AnalyzerError> {
        let prompt = build_prompt(text);
        let reply = self
            .generator
            .generate(&prompt)
            .await
            .map_err(|e| AnalyzerError::Classification(e.to_string()))?;

        let label = Sentiment::from_label(&reply);
        #[cfg(feature = "tracing")]
        {
            if label == Sentiment::Unknown {
                tracing::debug!(reply = %reply.trim(), "classifier reply is not a canonical label");
            }
        }
        Ok(label)
    }
}
