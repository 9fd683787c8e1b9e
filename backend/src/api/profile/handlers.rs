//! Handler functions for the profile API.
//!
//! These functions unpack requests, call `services::ProfileService` and format
//! its results as JSON or as a vCard attachment.

use adapters::{NewProfile, Profile};
use axum::{
    extract::{Path, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::json::Json;
use crate::api::AppState;
use crate::errors::ApiError;

pub const VCARD_CONTENT_TYPE: &str = "text/vcard; charset=utf-8";

#[derive(Serialize, Deserialize, Debug)]
pub struct CreatedProfile {
    pub profile_id: String,
}

pub async fn create_profile(
    State(state): State<AppState>,
    Json(profile): Json<NewProfile>,
) -> Result<Json<CreatedProfile>, ApiError> {
    let profile_id = state.profiles.create_profile(profile).await?;
    Ok(Json(CreatedProfile { profile_id }))
}

pub async fn get_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let profile = state.profiles.get_profile(&profile_id).await?;
    Ok(Json(profile))
}

pub async fn get_vcard(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
) -> Result<Response, ApiError> {
    let card = state.profiles.generate_vcard(&profile_id).await?;
    let disposition = content_disposition(&card.filename, &profile_id);

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(VCARD_CONTENT_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        card.body,
    )
        .into_response())
}

/// `attachment; filename=<filename>` with the filename passed through as-is.
///
/// Header values cannot carry control characters, so a name containing one
/// falls back to the profile id, and then to a bare `attachment`.
fn content_disposition(filename: &str, profile_id: &str) -> HeaderValue {
    if let Ok(value) = HeaderValue::from_bytes(format!("attachment; filename={filename}").as_bytes()) {
        return value;
    }

    warn!("profile {profile_id:?} name is not a valid header value, using id as filename");
    HeaderValue::from_bytes(format!("attachment; filename={profile_id}.vcf").as_bytes())
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}
