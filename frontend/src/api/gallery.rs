use gloo_net::http::Request;
use log::debug;
use shared::error::ApiError;
use shared::models::gallery::GalleryItem;

use crate::api::api_url;
use crate::api::utils::{read_list, send};

pub async fn list_gallery() -> Result<Vec<GalleryItem>, ApiError> {
    debug!("Fetching gallery");
    let response = send(Request::get(&api_url("/api/gallery"))).await?;
    read_list(response).await
}

pub async fn delete_gallery_item(id: i64) -> Result<(), ApiError> {
    debug!("Deleting gallery item {}", id);
    send(Request::delete(&api_url(&format!("/api/gallery/{}", id)))).await?;
    Ok(())
}
