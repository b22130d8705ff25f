use gloo_net::http::Request;
use log::debug;
use shared::error::ApiError;
use shared::models::achievement::{Achievement, NewAchievement};

use crate::api::api_url;
use crate::api::utils::{read_list, send, send_json};

pub async fn list_achievements() -> Result<Vec<Achievement>, ApiError> {
    debug!("Fetching achievements");
    let response = send(Request::get(&api_url("/api/achievements"))).await?;
    read_list(response).await
}

pub async fn create_achievement(achievement: &NewAchievement) -> Result<(), ApiError> {
    debug!("Creating achievement {}", achievement.title);
    send_json(Request::post(&api_url("/api/achievements")), achievement).await?;
    Ok(())
}

pub async fn delete_achievement(id: i64) -> Result<(), ApiError> {
    debug!("Deleting achievement {}", id);
    send(Request::delete(&api_url(&format!("/api/achievements/{}", id)))).await?;
    Ok(())
}
