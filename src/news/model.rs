use serde::Serialize;

use crate::sentiment::Sentiment;

pub const NO_TITLE: &str = "No title available";
pub const NO_SUMMARY: &str = "No summary available";
pub const NO_LINK: &str = "No link available";
pub const NO_CONTENT_TYPE: &str = "No content type available";
pub const NO_DATE: &str = "No date available";
pub const DATE_FORMAT_ERROR: &str = "Date format error";

/// The only content type the pipeline keeps.
pub const STORY: &str = "STORY";

/// One normalized news item about a ticker.
///
/// Every text field is always populated, falling back to the sentinels above when the
/// source omitted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Classification result; [`Sentiment::Unknown`] until classified.
    pub sentiment: Sentiment,
    /// `YYYY-MM-DD hh:mm:ss AM/PM` in the configured zone, or [`NO_DATE`] / [`DATE_FORMAT_ERROR`].
    pub published_at: String,
    pub title: String,
    pub link: String,
    pub content_type: String,
    pub summary: String,
    pub thumbnail_url: Option<String>,
}

impl Article {
    /// Whether this item is a news story (as opposed to a video, press release, etc.).
    #[must_use]
    pub fn is_story(&self) -> bool {
        self.content_type == STORY
    }

    /// Whether `link` holds a real URL rather than the [`NO_LINK`] sentinel.
    #[must_use]
    pub fn has_link(&self) -> bool {
        self.link != NO_LINK && !self.link.is_empty()
    }

    /// Text sent to the classifier: title and summary with field labels.
    #[must_use]
    pub fn classification_text(&self) -> String {
        format!("Title: {}\nSummary: {}", self.title, self.summary)
    }

    /// Returns the article with its classification result set.
    #[must_use]
    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = sentiment;
        self
    }
}
