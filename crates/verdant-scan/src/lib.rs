//! Plant analysis domain for Verdant
//!
//! Request builders and tolerant response parsers for the external model
//! services, plus the locally persisted scan log:
//!
//! - [`analysis`]: photo → [`PlantDetails`] classification
//! - [`artwork`]: plant name → stylized render
//! - [`chat`]: the floating assistant's conversation turns
//! - [`scanlog`]: versioned scan-history snapshot
//!
//! Every parser degrades instead of failing: malformed or partial service
//! output becomes the fallback record (`confidence = 0`) or an absent
//! image, never an error surfaced to the user.

pub mod analysis;
pub mod artwork;
pub mod chat;
pub mod config;
pub mod details;
pub mod scanlog;

pub use chat::{ChatMessage, ChatRole};
pub use config::ServiceConfig;
pub use details::PlantDetails;
pub use scanlog::{ScanLog, ScanRecord};
