use gloo_net::http::Request;
use log::debug;
use shared::error::ApiError;
use shared::models::player::Player;

use crate::api::api_url;
use crate::api::utils::{read_list, send};

pub async fn list_players() -> Result<Vec<Player>, ApiError> {
    debug!("Fetching players");
    let response = send(Request::get(&api_url("/api/players"))).await?;
    read_list(response).await
}

pub async fn approve_player(id: i64) -> Result<(), ApiError> {
    debug!("Approving player {}", id);
    send(Request::put(&api_url(&format!("/api/players/{}/approve", id)))).await?;
    Ok(())
}

pub async fn delete_player(id: i64) -> Result<(), ApiError> {
    debug!("Deleting player {}", id);
    send(Request::delete(&api_url(&format!("/api/players/{}", id)))).await?;
    Ok(())
}
