use gloo::net::http::Request;
use spin_wheel_core::api::{ApiErrorBody, GeneratePrizesRequest, GeneratePrizesResponse};
use spin_wheel_core::constants::{GENERATE_FAILED_ERROR, GENERATE_PRIZES_ENDPOINT, NETWORK_ERROR};

use crate::config::get_api_base_url;

/// Asks the server for a themed prize list. The error is a message ready to
/// show to the user.
pub async fn generate_prizes(theme: &str, count: usize) -> Result<Vec<String>, String> {
    let request = GeneratePrizesRequest::new(theme, count);

    let response = Request::post(&format!("{}{}", get_api_base_url(), GENERATE_PRIZES_ENDPOINT))
        .header("Content-Type", "application/json")
        .json(&request)
        .map_err(|e| {
            log::error!("Failed to encode generate request: {}", e);
            GENERATE_FAILED_ERROR.to_string()
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("Generate request failed: {}", e);
            NETWORK_ERROR.to_string()
        })?;

    if response.ok() {
        let body = response.json::<GeneratePrizesResponse>().await.map_err(|e| {
            log::error!("Failed to parse generated prizes: {}", e);
            GENERATE_FAILED_ERROR.to_string()
        })?;
        return Ok(body.prizes);
    }

    log::warn!("Generate request returned status {}", response.status());
    match response.json::<ApiErrorBody>().await {
        Ok(body) => Err(body.error),
        Err(_) => Err(GENERATE_FAILED_ERROR.to_string()),
    }
}
