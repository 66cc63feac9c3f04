//! HTTP types for Verdant
//!
//! This crate provides the request/response vocabulary shared by every
//! service client (vision analysis, image generation, chat assistant, and
//! the auth/profile backend).
//!
//! # Architecture
//!
//! The clients in `verdant-scan` and `verdant-identity` only *describe*
//! traffic: they build [`HttpRequest`] values and parse [`HttpResponse`]
//! bodies. Actual execution lives in the platform layer (`verdant-web`),
//! which drives the browser `fetch` API and hands the result back. That
//! keeps every codec testable without a network.

use serde::{Deserialize, Serialize};

// =============================================================================
// HTTP Method
// =============================================================================

/// HTTP request method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    /// HTTP GET
    Get,
    /// HTTP POST
    Post,
    /// HTTP PUT
    Put,
    /// HTTP PATCH
    Patch,
    /// HTTP DELETE
    Delete,
}

impl HttpMethod {
    /// Convert to the string form the fetch API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

// =============================================================================
// HTTP Request
// =============================================================================

/// HTTP request to be executed by the platform layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HttpRequest {
    /// HTTP method (GET, POST, etc.)
    pub method: HttpMethod,
    /// Target URL
    pub url: String,
    /// Request headers as key-value pairs
    pub headers: Vec<(String, String)>,
    /// Request body (optional)
    pub body: Option<Vec<u8>>,
    /// Request timeout in milliseconds
    pub timeout_ms: u32,
    /// Request ID for correlating the async response
    #[serde(default)]
    pub request_id: u32,
}

impl HttpRequest {
    /// Create a new GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
            timeout_ms: 30_000,
            request_id: 0,
        }
    }

    /// Create a new POST request.
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            headers: Vec::new(),
            body: None,
            timeout_ms: 30_000,
            request_id: 0,
        }
    }

    /// Set JSON body and Content-Type header.
    pub fn with_json_body(mut self, body: Vec<u8>) -> Self {
        self.headers
            .push(("Content-Type".into(), "application/json".into()));
        self.body = Some(body);
        self
    }

    /// Add a header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Set timeout in milliseconds.
    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set authorization bearer token.
    pub fn with_bearer_token(self, token: impl Into<String>) -> Self {
        self.with_header("Authorization", format!("Bearer {}", token.into()))
    }
}

// =============================================================================
// HTTP Response
// =============================================================================

/// HTTP response handed back by the platform layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HttpResponse {
    /// Request ID this response corresponds to
    #[serde(default)]
    pub request_id: u32,
    /// Result of the HTTP request
    pub result: Result<HttpSuccess, NetworkError>,
}

impl HttpResponse {
    /// Create a successful response.
    pub fn ok(status: u16, body: Vec<u8>) -> Self {
        Self {
            request_id: 0,
            result: Ok(HttpSuccess {
                status,
                headers: Vec::new(),
                body,
            }),
        }
    }

    /// Create an error response.
    pub fn err(error: NetworkError) -> Self {
        Self {
            request_id: 0,
            result: Err(error),
        }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        match &self.result {
            Ok(success) => (200..300).contains(&success.status),
            Err(_) => false,
        }
    }

    /// Get the body of a successful (2xx) response, if any.
    pub fn success_body(&self) -> Option<&[u8]> {
        match &self.result {
            Ok(success) if (200..300).contains(&success.status) => Some(&success.body),
            _ => None,
        }
    }
}

/// Successful HTTP response data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HttpSuccess {
    /// HTTP status code (200, 404, etc.)
    pub status: u16,
    /// Response headers
    pub headers: Vec<(String, String)>,
    /// Response body
    pub body: Vec<u8>,
}

// =============================================================================
// Network Error
// =============================================================================

/// Errors that can occur while executing a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum NetworkError {
    /// Failed to reach the service at all.
    #[error("failed to connect")]
    ConnectionFailed,

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// The URL could not be parsed by the fetch layer.
    #[error("invalid URL")]
    InvalidUrl,

    /// The request was aborted before completion.
    #[error("request aborted")]
    Aborted,

    /// Other error with description.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_request_builder() {
        let req = HttpRequest::get("https://api.example.com/data")
            .with_header("Accept", "application/json")
            .with_bearer_token("test-token")
            .with_timeout(5000);

        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "https://api.example.com/data");
        assert_eq!(req.timeout_ms, 5000);
        assert_eq!(req.headers.len(), 2);
        assert_eq!(req.headers[1].1, "Bearer test-token");
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let req = HttpRequest::post("https://api.example.com").with_json_body(b"{}".to_vec());

        assert_eq!(req.body.as_deref(), Some(b"{}".as_slice()));
        assert!(req
            .headers
            .iter()
            .any(|(k, v)| k == "Content-Type" && v == "application/json"));
    }

    #[test]
    fn test_http_response_success_classification() {
        let resp = HttpResponse::ok(200, b"hello".to_vec());
        assert!(resp.is_success());
        assert_eq!(resp.success_body(), Some(b"hello".as_slice()));

        let resp = HttpResponse::ok(404, b"missing".to_vec());
        assert!(!resp.is_success());
        assert!(resp.success_body().is_none());

        let resp = HttpResponse::err(NetworkError::Timeout);
        assert!(!resp.is_success());
    }

    #[test]
    fn test_network_error_messages() {
        assert_eq!(NetworkError::Timeout.to_string(), "request timed out");
        assert_eq!(
            NetworkError::Other("tls handshake failed".into()).to_string(),
            "tls handshake failed"
        );
    }

    #[test]
    fn test_response_serde_round_trip() {
        let resp = HttpResponse::ok(201, b"created".to_vec());
        let json = serde_json::to_string(&resp).unwrap();
        let restored: HttpResponse = serde_json::from_str(&json).unwrap();
        assert!(restored.is_success());
    }
}
