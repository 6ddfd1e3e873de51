use std::fmt;

use serde::Serialize;

/// Sentiment label attached to an article.
///
/// `Unknown` is never requested from the classifier; it marks output that did not match
/// a canonical label, or a classification call that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Unknown,
}

impl Sentiment {
    /// The three labels the classifier may produce.
    pub const CANONICAL: [Self; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    /// Maps free-form classifier output to a label.
    ///
    /// Only an exact match after trimming and case-folding counts; `"Positive."` or
    /// `"mostly positive"` are `Unknown`.
    #[must_use]
    pub fn from_label(text: &str) -> Self {
        match text.trim().to_ascii_uppercase().as_str() {
            "POSITIVE" => Self::Positive,
            "NEGATIVE" => Self::Negative,
            "NEUTRAL" => Self::Neutral,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
