//! Auth and profile backend client for Verdant
//!
//! Request builders and tolerant parsers for the third-party
//! authentication/database backend, plus the client-side reconciliation of
//! a remote session and profile row into the display account:
//!
//! - [`session`]: sign-up, password login, reset, session lookup
//! - [`profile`]: profile row get/upsert keyed by user id
//! - [`account`]: session + profile → [`Account`] merge
//!
//! Security of the auth flow itself is the backend's property; this crate
//! only describes the traffic and never stores credentials.

pub mod account;
pub mod error;
pub mod profile;
pub mod session;

mod config;

pub use account::Account;
pub use config::BackendConfig;
pub use error::IdentityError;
pub use profile::UserProfile;
pub use session::{AuthUser, Session};
