use std::collections::BTreeMap;

use serde::Serialize;

use crate::news::Article;
use crate::price::PriceSnapshot;
use crate::sentiment::Sentiment;

/// Order used to break ties when computing [`PipelineResult::overall_sentiment`].
pub const TIE_BREAK_ORDER: [Sentiment; 4] = [
    Sentiment::Positive,
    Sentiment::Negative,
    Sentiment::Neutral,
    Sentiment::Unknown,
];

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineResult {
    /// The normalized ticker the run was made for.
    pub ticker: String,
    /// Classified stories in source order.
    pub articles: Vec<Article>,
    pub price: PriceSnapshot,
}

impl PipelineResult {
    /// Number of articles per label. Labels with no articles are absent.
    #[must_use]
    pub fn sentiment_counts(&self) -> BTreeMap<Sentiment, usize> {
        let mut counts = BTreeMap::new();
        for a in &self.articles {
            *counts.entry(a.sentiment).or_insert(0) += 1;
        }
        counts
    }

    /// Most frequent label among the articles, `None` when there are none.
    ///
    /// Ties go to the label that comes first in [`TIE_BREAK_ORDER`].
    #[must_use]
    pub fn overall_sentiment(&self) -> Option<Sentiment> {
        let counts = self.sentiment_counts();
        let mut best: Option<(Sentiment, usize)> = None;
        for label in TIE_BREAK_ORDER {
            let n = counts.get(&label).copied().unwrap_or(0);
            if n > 0 && best.is_none_or(|(_, top)| n > top) {
                best = Some((label, n));
            }
        }
        best.map(|(label, _)| label)
    }
}
