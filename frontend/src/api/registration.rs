use gloo_net::http::Request;
use log::{debug, info};
use shared::dto::registration::{DuplicateResponse, JoinRequest, RegisterOutcome, RegistrationRequest};
use shared::error::ApiError;
use shared::urls::with_force;

use crate::api::api_url;
use crate::api::utils::{send_json, status_error};

const CONFLICT: u16 = 409;

/// Posts a registration. A 409 carrying a duplicate count is an outcome, not
/// an error.
pub async fn register(request: &RegistrationRequest, force: bool) -> Result<RegisterOutcome, ApiError> {
    debug!("Submitting registration (force: {})", force);
    let url = api_url(&with_force("/api/register", force));
    let response = Request::post(&url)
        .json(request)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(RegisterOutcome::Created);
    }
    if response.status() == CONFLICT {
        if let Ok(body) = response.json::<DuplicateResponse>().await {
            info!("Backend reported {} matching registrations", body.count);
            return Ok(RegisterOutcome::Duplicate { count: body.count });
        }
    }
    Err(status_error(response).await)
}

pub async fn join(request: &JoinRequest) -> Result<(), ApiError> {
    debug!("Submitting join request");
    send_json(Request::post(&api_url("/api/join")), request).await?;
    Ok(())
}
