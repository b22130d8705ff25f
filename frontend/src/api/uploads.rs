//! Multipart endpoints. They carry browser `File`s, so they live here rather
//! than on `ClubApi`.

use gloo_net::http::{Request, RequestBuilder};
use log::debug;
use shared::error::ApiError;
use web_sys::{File, FormData};

use crate::api::api_url;
use crate::api::utils::ensure_ok;

fn form_data(fields: &[(&str, String)], file: Option<&File>, file_field: &str) -> Result<FormData, ApiError> {
    let to_err = |e: wasm_bindgen::JsValue| ApiError::Encode(format!("{:?}", e));
    let form = FormData::new().map_err(to_err)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(to_err)?;
    }
    if let Some(file) = file {
        form.append_with_blob_and_filename(file_field, file, &file.name())
            .map_err(to_err)?;
    }
    Ok(form)
}

async fn send_form(request: RequestBuilder, form: FormData) -> Result<(), ApiError> {
    let response = request
        .body(form)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response).await?;
    Ok(())
}

/// Creates a player, or updates one when `id` is given.
pub async fn save_player(id: Option<i64>, fields: &[(&str, String)], image: Option<&File>) -> Result<(), ApiError> {
    let form = form_data(fields, image, "image")?;
    let request = match id {
        Some(id) => {
            debug!("Updating player {}", id);
            Request::put(&api_url(&format!("/api/players/{}", id)))
        }
        None => {
            debug!("Creating player");
            Request::post(&api_url("/api/players"))
        }
    };
    send_form(request, form).await
}

pub async fn upload_gallery_image(fields: &[(&str, String)], file: &File) -> Result<(), ApiError> {
    debug!("Uploading gallery image {}", file.name());
    let form = form_data(fields, Some(file), "image")?;
    send_form(Request::post(&api_url("/api/gallery")), form).await
}
