use gloo_net::http::{RequestBuilder, Response};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::api::decode_list;
use shared::dto::common::ErrorResponse;
use shared::error::ApiError;

/// Sends a request without a body and checks the status.
pub async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response).await
}

/// Sends `body` as JSON and checks the status.
pub async fn send_json<B: Serialize>(request: RequestBuilder, body: &B) -> Result<Response, ApiError> {
    let request = request
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response).await
}

/// Turns a non-2xx response into `ApiError::Status`, using the JSON error
/// body when there is one.
pub async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    Err(status_error(response).await)
}

pub async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .map(|body| body.error)
        .unwrap_or_else(|_| {
            if text.is_empty() {
                response.status_text()
            } else {
                text
            }
        });
    warn!("Request to {} failed with {}: {}", response.url(), status, message);
    ApiError::Status { status, message }
}

/// Reads a collection body leniently: anything but an array is empty.
pub async fn read_list<T: DeserializeOwned>(response: Response) -> Result<Vec<T>, ApiError> {
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let items = decode_list(&body);
    debug!("Decoded {} items from {}", items.len(), response.url());
    Ok(items)
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
