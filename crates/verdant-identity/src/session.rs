//! Auth session requests and parsing

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use verdant_network::{HttpRequest, HttpResponse};

use crate::config::BackendConfig;
use crate::error::IdentityError;

/// The authenticated user inside a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Backend user id
    pub id: String,
    /// Email the account was registered with
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form metadata captured at sign-up (username, full name, country)
    #[serde(default)]
    pub user_metadata: Value,
}

/// An authenticated backend session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for subsequent requests
    pub access_token: String,
    /// Token used to mint a fresh access token
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// The session's user
    pub user: AuthUser,
}

/// Build the sign-up request. Display fields travel as sign-up metadata so
/// the backend trigger can seed the profile row.
pub fn sign_up_request(
    config: &BackendConfig,
    email: &str,
    password: &str,
    username: &str,
    full_name: &str,
    country: &str,
) -> HttpRequest {
    let payload = json!({
        "email": email,
        "password": password,
        "data": {
            "username": username,
            "full_name": full_name,
            "country": country
        }
    });

    HttpRequest::post(config.auth_url("signup"))
        .with_header("apikey", config.anon_key.clone())
        .with_json_body(serde_json::to_vec(&payload).unwrap_or_default())
}

/// Build the password login request.
pub fn login_request(config: &BackendConfig, email: &str, password: &str) -> HttpRequest {
    let payload = json!({ "email": email, "password": password });

    HttpRequest::post(config.auth_url("token?grant_type=password"))
        .with_header("apikey", config.anon_key.clone())
        .with_json_body(serde_json::to_vec(&payload).unwrap_or_default())
}

/// Build the password-reset request.
pub fn reset_request(config: &BackendConfig, email: &str) -> HttpRequest {
    let payload = json!({ "email": email });

    HttpRequest::post(config.auth_url("recover"))
        .with_header("apikey", config.anon_key.clone())
        .with_json_body(serde_json::to_vec(&payload).unwrap_or_default())
}

/// Build the session-lookup request for a stored access token.
pub fn session_request(config: &BackendConfig, access_token: &str) -> HttpRequest {
    HttpRequest::get(config.auth_url("user"))
        .with_header("apikey", config.anon_key.clone())
        .with_bearer_token(access_token)
}

/// Parse a token-bearing auth response (login, sign-up with auto-confirm).
pub fn parse_session(response: &HttpResponse) -> Result<Session, IdentityError> {
    let body = success_body(response)?;
    serde_json::from_slice(body).map_err(|e| IdentityError::Malformed(e.to_string()))
}

/// Parse a session-lookup response into the session's user.
pub fn parse_user(response: &HttpResponse) -> Result<AuthUser, IdentityError> {
    let body = success_body(response)?;
    serde_json::from_slice(body).map_err(|e| IdentityError::Malformed(e.to_string()))
}

/// Classify a response, extracting the backend's message on rejection.
pub(crate) fn success_body(response: &HttpResponse) -> Result<&[u8], IdentityError> {
    match &response.result {
        Ok(success) if (200..300).contains(&success.status) => Ok(&success.body),
        Ok(failure) => Err(IdentityError::Rejected {
            status: failure.status,
            message: rejection_message(&failure.body),
        }),
        Err(e) => Err(IdentityError::Network(e.clone())),
    }
}

/// Pull a human-readable message out of an error body. The backend uses a
/// handful of field names depending on which subsystem rejected.
fn rejection_message(body: &[u8]) -> String {
    let value: Value = match serde_json::from_slice(body) {
        Ok(v) => v,
        Err(_) => return "request failed".to_string(),
    };
    for key in ["error_description", "msg", "message", "error"] {
        if let Some(message) = value.get(key).and_then(Value::as_str) {
            return message.to_string();
        }
    }
    "request failed".to_string()
}
