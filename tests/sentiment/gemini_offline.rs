use httpmock::{Method::POST, MockServer};
use serde_json::json;
use stocknews_rs::sentiment::build_prompt;
use stocknews_rs::{AnalyzerError, GeminiClient, TextGenerator};

use crate::common::{gemini_config, mock_gemini};

#[tokio::test]
async fn generate_posts_prompt_and_returns_reply_text() {
    let server = MockServer::start();
    let mock = mock_gemini(&server, "Title: A\nSummary: B", " POSITIVE\n");

    let client = GeminiClient::from_config(&gemini_config(&server)).unwrap();
    let reply = client
        .generate(&build_prompt("Title: A\nSummary: B"))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(reply, " POSITIVE\n");
}

#[tokio::test]
async fn model_id_comes_from_config() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1beta/models/gemini-1.5-pro:generateContent");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "candidates": [{ "content": { "parts": [{ "text": "NEG" }, { "text": "ATIVE" }] } }]
            }));
    });

    let cfg = gemini_config(&server).model("gemini-1.5-pro");
    let client = GeminiClient::from_config(&cfg).unwrap();
    let reply = client.generate("hello").await.unwrap();

    mock.assert();
    assert_eq!(reply, "NEGATIVE");
}

#[tokio::test]
async fn http_error_status_is_reported() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1beta/models/gemini-2.0-flash-lite:generateContent");
        then.status(403).body("{\"error\":{\"message\":\"API key not valid\"}}");
    });

    let client = GeminiClient::from_config(&gemini_config(&server)).unwrap();
    let err = client.generate("hello").await.unwrap_err();

    mock.assert();
    assert!(
        matches!(err, AnalyzerError::Status { status: 403, .. }),
        "{err:?}"
    );
}

#[tokio::test]
async fn reply_without_candidates_is_a_data_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/v1beta/models/gemini-2.0-flash-lite:generateContent");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "promptFeedback": { "blockReason": "SAFETY" } }));
    });

    let client = GeminiClient::from_config(&gemini_config(&server)).unwrap();
    let err = client.generate("hello").await.unwrap_err();
    assert!(matches!(err, AnalyzerError::Data(_)), "{err:?}");
}

#[tokio::test]
async fn retryable_status_is_retried_per_policy() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1beta/models/gemini-2.0-flash-lite:generateContent");
        then.status(503);
    });

    let retry = stocknews_rs::RetryConfig {
        max_retries: 2,
        backoff: stocknews_rs::Backoff::Fixed(std::time::Duration::from_millis(1)),
        ..Default::default()
    };
    let cfg = gemini_config(&server).retry_config(retry);
    let client = GeminiClient::from_config(&cfg).unwrap();
    let err = client.generate("hello").await.unwrap_err();

    mock.assert_calls(3);
    assert!(matches!(err, AnalyzerError::Status { status: 503, .. }), "{err:?}");
}
