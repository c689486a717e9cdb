use common::{PredictionRequest, PredictionResponse};
use web_sys::AbortSignal;

use crate::api_client;

/// Request a potability prediction for one set of measurements.
///
/// `signal`, when given, aborts the in-flight request; an aborted call
/// resolves through the failure path like any other transport error.
pub async fn predict(
    request: &PredictionRequest,
    signal: Option<&AbortSignal>,
) -> Result<PredictionResponse, String> {
    log::debug!("Requesting potability prediction");
    let result: Result<PredictionResponse, String> =
        api_client::post("/predict", request, signal).await;
    match &result {
        Ok(response) => log::info!("Prediction received: {}", response.message),
        Err(e) => log::error!("Prediction request failed: {}", e),
    }
    result
}
