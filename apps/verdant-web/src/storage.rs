//! localStorage persistence for the shell

use verdant_scan::ScanLog;

use crate::logging;

/// Key the scan-history snapshot is stored under
const SCAN_LOG_KEY: &str = "verdant.scan_log";
/// Key the auth access token is stored under
const SESSION_KEY: &str = "verdant.session_token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read a stored string value
fn get_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

/// Write a stored string value; quota/access errors are logged, not raised
fn set_item(key: &str, value: &str) {
    match local_storage() {
        Some(storage) => {
            if storage.set_item(key, value).is_err() {
                logging::warn(&format!("failed to persist {}", key));
            }
        }
        None => logging::warn("localStorage unavailable"),
    }
}

/// Remove a stored value
fn remove_item(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Load the scan history, degrading to an empty log when absent or
/// unreadable.
pub fn load_scan_log() -> ScanLog {
    ScanLog::load(get_item(SCAN_LOG_KEY).as_deref())
}

/// Rewrite the scan history snapshot in full.
pub fn save_scan_log(log: &ScanLog) {
    set_item(SCAN_LOG_KEY, &log.to_json());
}

/// Load the remembered access token, if any.
pub fn load_session_token() -> Option<String> {
    get_item(SESSION_KEY)
}

/// Remember the access token for session restore.
pub fn save_session_token(token: &str) {
    set_item(SESSION_KEY, token);
}

/// Forget the access token on sign-out.
pub fn clear_session_token() {
    remove_item(SESSION_KEY);
}
