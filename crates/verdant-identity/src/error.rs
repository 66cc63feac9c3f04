//! Error types for the identity client

use verdant_network::NetworkError;

/// Errors that can occur talking to the auth/profile backend.
///
/// These never crash the app: the shell converts them into guest mode or an
/// inline message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// The backend rejected the request (4xx/5xx) with a message.
    #[error("backend rejected request ({status}): {message}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Human-readable message extracted from the error body
        message: String,
    },

    /// The response body could not be understood.
    #[error("malformed backend response: {0}")]
    Malformed(String),

    /// The request never completed.
    #[error("network error: {0}")]
    Network(#[from] NetworkError),
}
