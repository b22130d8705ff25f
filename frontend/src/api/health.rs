use gloo_net::http::Request;
use log::debug;
use shared::error::ApiError;

use crate::api::api_url;
use crate::api::utils::send;

pub const BACKEND_DOWN: &str = "Backend not running";

pub async fn health() -> Result<String, ApiError> {
    debug!("Checking backend health");
    let response = send(Request::get(&api_url("/api/health"))).await?;
    response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
