use std::sync::Arc;

use stocknews_rs::sentiment::build_prompt;
use stocknews_rs::{AnalyzerError, Sentiment, SentimentClassifier};

use crate::common::FakeGenerator;

#[tokio::test]
async fn prompt_constrains_output_and_carries_the_text() {
    let generator = Arc::new(FakeGenerator::always("NEUTRAL"));
    let classifier = SentimentClassifier::new(generator.clone());

    let text = "Title: Fed holds rates\nSummary: No change this month.";
    let label = classifier.classify(text).await.unwrap();
    assert_eq!(label, Sentiment::Neutral);

    let prompts = generator.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0], build_prompt(text));
    assert!(prompts[0].contains("POSITIVE, NEGATIVE, or NEUTRAL"));
    assert!(prompts[0].contains("No explanation"));
    assert!(prompts[0].ends_with(text));
}

#[tokio::test]
async fn chatty_reply_is_unknown_not_guessed() {
    let classifier = SentimentClassifier::new(Arc::new(FakeGenerator::always(
        "I would say this is positive.",
    )));
    assert_eq!(classifier.classify("x").await.unwrap(), Sentiment::Unknown);
}

#[tokio::test]
async fn service_error_surfaces_as_classification_failure() {
    let classifier = SentimentClassifier::new(Arc::new(FakeGenerator::new(|_| {
        Err(AnalyzerError::Data("boom".into()))
    })));
    let err = classifier.classify("x").await.unwrap_err();
    assert!(matches!(err, AnalyzerError::Classification(_)), "{err:?}");
}
