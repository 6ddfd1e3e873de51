use crate::core::AnalyzerError;

/// Read a successful response body as text.
///
/// Non-2xx responses become [`AnalyzerError::Status`] carrying the final URL.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _symbol: &str,
) -> Result<String, AnalyzerError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(AnalyzerError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        });
    }

    let text = resp.text().await?;

    #[cfg(feature = "tracing")]
    tracing::debug!(endpoint = _endpoint, symbol = _symbol, bytes = text.len(), "response body read");

    Ok(text)
}
