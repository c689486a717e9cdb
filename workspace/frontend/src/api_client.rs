pub mod predict;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::AbortSignal;

use crate::settings;

/// Shown when a transport failure carries no usable description of its own.
pub const CONNECT_FALLBACK: &str =
    "Failed to connect to the prediction service. Please try again.";

/// Shown when the service rejects a request without an error body.
pub const GATEWAY_FALLBACK: &str = "Failed to get prediction";

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Substitute the fixed fallback when a transport error has no description.
fn detail_or_fallback(detail: String) -> String {
    if detail.trim().is_empty() {
        CONNECT_FALLBACK.to_string()
    } else {
        detail
    }
}

/// Common POST handler for the prediction service.
///
/// One awaited attempt, no retry and no client-side timeout. A non-2xx
/// response fails with the response body read as text (the service reports
/// errors as free-form text; an empty or unreadable body substitutes the
/// generic fallback). A transport-level failure, including an abort through
/// `signal`, fails with the error's description or the fixed connect
/// fallback.
pub async fn post<T, B>(endpoint: &str, body: &B, signal: Option<&AbortSignal>) -> Result<T, String>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .abort_signal(signal)
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = detail_or_fallback(e.to_string());
            log::error!("POST {} - request failed: {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        log::warn!("POST {} - Non-OK response: {}", endpoint, response.status());
        let detail = match response.text().await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => GATEWAY_FALLBACK.to_string(),
            Err(e) => {
                log::error!("POST {} - failed to read error body: {}", endpoint, e);
                GATEWAY_FALLBACK.to_string()
            }
        };
        log::error!("POST {} - API error: {}", endpoint, detail);
        return Err(detail);
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    response.json().await.map_err(|e| {
        let error_msg = detail_or_fallback(e.to_string());
        log::error!("POST {} - failed to parse response: {}", endpoint, error_msg);
        error_msg
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_detail_is_kept_when_present() {
        assert_eq!(
            detail_or_fallback("connection refused".to_string()),
            "connection refused"
        );
    }

    #[test]
    fn blank_transport_detail_falls_back() {
        assert_eq!(detail_or_fallback(String::new()), CONNECT_FALLBACK);
        assert_eq!(detail_or_fallback("   ".to_string()), CONNECT_FALLBACK);
    }
}
