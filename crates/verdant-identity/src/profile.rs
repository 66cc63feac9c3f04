//! Profile row requests and parsing

use serde::{Deserialize, Serialize};
use verdant_network::{HttpRequest, HttpResponse};

use crate::config::BackendConfig;
use crate::session::success_body;

/// A row in the backend's `profiles` table, keyed by user id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User id (primary key, matches the auth user id)
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Set by the caller on every upsert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Build the profile lookup request for a user id.
pub fn profile_get_request(
    config: &BackendConfig,
    access_token: &str,
    user_id: &str,
) -> HttpRequest {
    let url = format!(
        "{}?id=eq.{}&select=*",
        config.rest_url("profiles"),
        user_id
    );
    HttpRequest::get(url)
        .with_header("apikey", config.anon_key.clone())
        .with_bearer_token(access_token)
}

/// Build the profile upsert request.
///
/// Uses merge-duplicates resolution so the same call creates or updates the
/// row; `updated_at` must already be stamped by the caller.
pub fn profile_upsert_request(
    config: &BackendConfig,
    access_token: &str,
    profile: &UserProfile,
) -> HttpRequest {
    HttpRequest::post(config.rest_url("profiles"))
        .with_header("apikey", config.anon_key.clone())
        .with_header("Prefer", "resolution=merge-duplicates")
        .with_bearer_token(access_token)
        .with_json_body(serde_json::to_vec(profile).unwrap_or_default())
}

/// Parse a profile lookup response.
///
/// The REST endpoint returns an array; a missing row, empty body, or
/// malformed payload is `None`. The app works without a profile, it just
/// shows defaults.
pub fn parse_profile(response: &HttpResponse) -> Option<UserProfile> {
    let body = success_body(response).ok()?;
    let mut rows: Vec<UserProfile> = serde_json::from_slice(body).ok()?;
    if rows.is_empty() {
        None
    } else {
        Some(rows.swap_remove(0))
    }
}
