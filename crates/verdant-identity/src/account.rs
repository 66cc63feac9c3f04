//! Session/profile reconciliation

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::profile::UserProfile;
use crate::session::Session;

/// The account the UI renders, merged from the auth session and the
/// profile row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub is_guest: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Account {
    /// The trial account used when no session exists.
    pub fn guest() -> Self {
        Self {
            id: "guest".into(),
            is_guest: true,
            email: None,
            username: None,
            full_name: None,
            country: None,
            avatar_url: None,
        }
    }
}

/// Merge a session and its profile row into the display account.
///
/// Profile fields win over sign-up metadata (the profile is where edits
/// land), metadata fills the gaps for accounts whose profile row has not
/// been created yet, and no session at all means guest mode.
pub fn reconcile(session: Option<&Session>, profile: Option<&UserProfile>) -> Account {
    let session = match session {
        Some(session) => session,
        None => return Account::guest(),
    };

    let meta = &session.user.user_metadata;
    let meta_str = |key: &str| {
        meta.get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    let field = |from_profile: Option<&String>, from_meta: &str| {
        from_profile.cloned().or_else(|| meta_str(from_meta))
    };

    Account {
        id: session.user.id.clone(),
        is_guest: false,
        email: session.user.email.clone(),
        username: field(profile.and_then(|p| p.username.as_ref()), "username"),
        full_name: field(profile.and_then(|p| p.full_name.as_ref()), "full_name"),
        country: field(profile.and_then(|p| p.country.as_ref()), "country"),
        avatar_url: field(profile.and_then(|p| p.avatar_url.as_ref()), "avatar_url"),
    }
}
