use gloo_net::http::Request;
use log::debug;
use shared::error::ApiError;
use shared::models::fixture::{Match, MatchPayload};

use crate::api::api_url;
use crate::api::utils::{read_json, read_list, send, send_json};

pub async fn list_matches() -> Result<Vec<Match>, ApiError> {
    debug!("Fetching matches");
    let response = send(Request::get(&api_url("/api/matches"))).await?;
    read_list(response).await
}

pub async fn create_match(payload: &MatchPayload) -> Result<Match, ApiError> {
    debug!("Creating match against {}", payload.opponent);
    let response = send_json(Request::post(&api_url("/api/matches")), payload).await?;
    read_json(response).await
}

pub async fn update_match(id: i64, payload: &MatchPayload) -> Result<Match, ApiError> {
    debug!("Updating match {}", id);
    let url = api_url(&format!("/api/matches/{}", id));
    let response = send_json(Request::put(&url), payload).await?;
    read_json(response).await
}

pub async fn delete_match(id: i64) -> Result<(), ApiError> {
    debug!("Deleting match {}", id);
    send(Request::delete(&api_url(&format!("/api/matches/{}", id)))).await?;
    Ok(())
}
