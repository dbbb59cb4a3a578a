//! API client for the minting service

use gloo_net::http::Request;
use web_sys::FormData;

use crate::types::{ApiResponse, Pet};

const API_BASE: &str = "/api";

/// Submit a pet to the minting service.
///
/// The pet travels as multipart form data so the selected image rides along
/// with the text slots. Slots that were never set are simply absent; the
/// service decides what to do with an incomplete pet.
pub async fn mint_token(pet: &Pet) -> Result<(), String> {
    let url = format!("{}/pets/mint", API_BASE);

    let form = FormData::new().map_err(|_| "Failed to build form data".to_string())?;
    if let Some(name) = &pet.name {
        form.append_with_str("name", name)
            .map_err(|_| "Failed to build form data".to_string())?;
    }
    if let Some(breed) = &pet.breed {
        form.append_with_str("breed", breed)
            .map_err(|_| "Failed to build form data".to_string())?;
    }
    if let Some(age) = &pet.age {
        form.append_with_str("age", age)
            .map_err(|_| "Failed to build form data".to_string())?;
    }
    if let Some(file) = &pet.file {
        form.append_with_blob_and_filename("image", file, &file.name())
            .map_err(|_| "Failed to build form data".to_string())?;
    }

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let api_response: ApiResponse<()> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if api_response.success {
        Ok(())
    } else {
        Err(api_response.error.unwrap_or_else(|| "Unknown error".to_string()))
    }
}
