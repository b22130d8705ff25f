use gloo_net::http::Request;
use log::{debug, warn};
use shared::error::ApiError;
use shared::models::stats::ClubStats;

use crate::api::api_url;
use crate::api::utils::send;
use crate::api::utils::send_json;

/// `Ok(None)` when the backend answers with an empty body or `null`.
pub async fn get_stats() -> Result<Option<ClubStats>, ApiError> {
    debug!("Fetching club stats");
    let response = send(Request::get(&api_url("/api/stats"))).await?;
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    if body.trim().is_empty() {
        return Ok(None);
    }
    match serde_json::from_str::<Option<ClubStats>>(&body) {
        Ok(stats) => Ok(stats),
        Err(e) => {
            warn!("Unreadable stats body: {}", e);
            Err(e.into())
        }
    }
}

pub async fn update_stats(stats: &ClubStats) -> Result<(), ApiError> {
    debug!("Saving club stats");
    send_json(Request::post(&api_url("/api/stats")), stats).await?;
    Ok(())
}
