//! Application shell exported to the hosting page

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use verdant_identity::{account, profile, session, Account, BackendConfig, Session, UserProfile};
use verdant_overlay::OverlayEngine;
use verdant_scan::{
    analysis, artwork, chat, ChatMessage, PlantDetails, ScanLog, ScanRecord, ServiceConfig,
};

use crate::pointer::PointerCapture;
use crate::{fetch, logging, storage};

/// The greeting shown before any conversation happens.
const CHAT_GREETING: &str = "Verdant assistant online. How may I assist?";

/// Browser-facing application shell.
///
/// Owns the overlay engine, the scan history, the chat transcript, and the
/// current session; exposes the async service flows as promises. Service
/// failures resolve to the codecs' fallback values; only auth rejections
/// reject the promise, carrying the backend's message.
#[wasm_bindgen]
pub struct AppShell {
    engine: Rc<RefCell<OverlayEngine>>,
    capture: Rc<RefCell<Option<PointerCapture>>>,
    retired: Rc<RefCell<Option<PointerCapture>>>,
    scan_log: Rc<RefCell<ScanLog>>,
    chat_log: Rc<RefCell<Vec<ChatMessage>>>,
    session: Rc<RefCell<Option<Session>>>,
    account: Rc<RefCell<Account>>,
    service: ServiceConfig,
    backend: BackendConfig,
}

#[wasm_bindgen]
impl AppShell {
    /// Create the shell. The scan history is read from storage once, here.
    #[wasm_bindgen(constructor)]
    pub fn new(api_key: String, backend_url: String, backend_key: String) -> Self {
        let scan_log = storage::load_scan_log();
        logging::log(&format!("loaded {} stored scans", scan_log.len()));

        Self {
            engine: Rc::new(RefCell::new(OverlayEngine::new())),
            capture: Rc::new(RefCell::new(None)),
            retired: Rc::new(RefCell::new(None)),
            scan_log: Rc::new(RefCell::new(scan_log)),
            chat_log: Rc::new(RefCell::new(vec![ChatMessage::model("init", CHAT_GREETING)])),
            session: Rc::new(RefCell::new(None)),
            account: Rc::new(RefCell::new(Account::guest())),
            service: ServiceConfig::new(api_key),
            backend: BackendConfig::new(backend_url, backend_key),
        }
    }

    // =========================================================================
    // Overlay widget
    // =========================================================================

    /// Initialize the widget layout from viewport dimensions
    pub fn init(&self, width: f32, height: f32) {
        self.engine.borrow_mut().init(width, height);
    }

    /// Update the viewport dimensions
    pub fn resize(&self, width: f32, height: f32) {
        self.engine.borrow_mut().resize(width, height);
    }

    /// Route a pointer-down into the widget. When an interaction starts,
    /// window-level move/up listeners are attached for its duration.
    pub fn pointer_down(&self, x: f32, y: f32) -> bool {
        let handled = self.engine.borrow_mut().handle_pointer_down(x, y).is_handled();

        if self.engine.borrow().input.is_active() && self.capture.borrow().is_none() {
            // Free the closure parked by the previous interaction
            self.retired.borrow_mut().take();

            match PointerCapture::attach(
                self.engine.clone(),
                self.capture.clone(),
                self.retired.clone(),
            ) {
                Ok(capture) => *self.capture.borrow_mut() = Some(capture),
                Err(_) => {
                    // Without listeners the interaction can never finish
                    self.engine.borrow_mut().handle_pointer_cancel();
                    logging::warn("pointer capture unavailable");
                }
            }
        }
        handled
    }

    /// Abort any active interaction and release its listeners
    pub fn cancel_interaction(&self) {
        self.engine.borrow_mut().handle_pointer_cancel();
        if let Some(capture) = self.capture.borrow_mut().take() {
            capture.detach();
            *self.retired.borrow_mut() = Some(capture);
        }
    }

    /// CSS cursor for the widget region under the pointer
    pub fn cursor_at(&self, x: f32, y: f32) -> String {
        let engine = self.engine.borrow();
        let presented = engine.screen_rect();
        engine
            .surface
            .region_in(presented, verdant_overlay::Vec2::new(x, y))
            .map(|r| r.cursor())
            .unwrap_or("default")
            .to_string()
    }

    /// Zoom the frame in by one step
    pub fn zoom_in(&self) {
        self.engine.borrow_mut().zoom(verdant_overlay::ZoomDirection::In);
    }

    /// Zoom the frame out by one step
    pub fn zoom_out(&self) {
        self.engine.borrow_mut().zoom(verdant_overlay::ZoomDirection::Out);
    }

    /// Toggle the full-screen presentation
    pub fn toggle_fullscreen(&self) {
        self.engine.borrow_mut().toggle_fullscreen();
    }

    /// Toggle between collapsed icon and expanded frame
    pub fn toggle_expanded(&self) {
        self.engine.borrow_mut().toggle_expanded();
    }

    /// Presented widget state as JSON for rendering
    pub fn surface_json(&self) -> String {
        let engine = self.engine.borrow();
        let presented = engine.screen_rect();
        let surface = &engine.surface;
        serde_json::to_string(&serde_json::json!({
            "expanded": surface.expanded,
            "fullscreen": surface.fullscreen,
            "interacting": engine.input.is_active(),
            "icon": { "x": surface.icon_pos.x, "y": surface.icon_pos.y },
            "frame": {
                "x": presented.x,
                "y": presented.y,
                "w": presented.width,
                "h": presented.height
            },
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }

    // =========================================================================
    // Scans
    // =========================================================================

    /// Analyze a captured photo and record the scan.
    ///
    /// Resolves to the new scan record as JSON. Service failures resolve to
    /// a record with the fallback details (`confidence = 0`).
    pub fn analyze_scan(&self, image: String) -> js_sys::Promise {
        let service = self.service.clone();
        let log = self.scan_log.clone();

        future_to_promise(async move {
            let request = analysis::analysis_request(&service, &image);
            let response = fetch::execute(&request).await;
            let details = match response.success_body() {
                Some(body) => analysis::parse_analysis(body),
                None => PlantDetails::fallback(),
            };

            let record = ScanRecord::new(js_sys::Date::now(), image, details);
            let json = serde_json::to_string(&record).unwrap_or_else(|_| "{}".to_string());

            let mut log = log.borrow_mut();
            log.insert(record);
            storage::save_scan_log(&log);

            Ok(JsValue::from_str(&json))
        })
    }

    /// Generate the stylized render for a recorded scan.
    ///
    /// Resolves to the image data URL, or null when generation produced
    /// nothing (including when the record was deleted mid-flight).
    pub fn generate_artwork(&self, scan_id: String) -> js_sys::Promise {
        let service = self.service.clone();
        let log = self.scan_log.clone();

        future_to_promise(async move {
            let plant_name = log.borrow().get(&scan_id).map(|r| r.details.name.clone());
            let plant_name = match plant_name {
                Some(name) => name,
                None => return Ok(JsValue::NULL),
            };

            let request = artwork::artwork_request(&service, &plant_name);
            let response = fetch::execute(&request).await;
            let image = response.success_body().and_then(artwork::parse_artwork);

            match image {
                Some(url) => {
                    if log.borrow_mut().attach_artwork(&scan_id, url.clone()) {
                        storage::save_scan_log(&log.borrow());
                        Ok(JsValue::from_str(&url))
                    } else {
                        Ok(JsValue::NULL)
                    }
                }
                None => Ok(JsValue::NULL),
            }
        })
    }

    /// All recorded scans, newest first, as JSON
    pub fn scans_json(&self) -> String {
        serde_json::to_string(&self.scan_log.borrow().records)
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Delete a scan record permanently
    pub fn delete_scan(&self, scan_id: String) -> bool {
        let removed = self.scan_log.borrow_mut().remove(&scan_id);
        if removed {
            storage::save_scan_log(&self.scan_log.borrow());
        }
        removed
    }

    // =========================================================================
    // Assistant chat
    // =========================================================================

    /// Send a message to the assistant.
    ///
    /// Resolves to the reply text; a failed round-trip resolves to the
    /// connection-interrupted message, and both turns land in the
    /// transcript either way.
    pub fn send_chat(&self, message: String) -> js_sys::Promise {
        let service = self.service.clone();
        let chat_log = self.chat_log.clone();

        future_to_promise(async move {
            let request = {
                let history = chat_log.borrow();
                chat::chat_request(&service, &history, &message)
            };
            chat_log
                .borrow_mut()
                .push(ChatMessage::user(turn_id(), message));

            let response = fetch::execute(&request).await;
            let reply = match response.success_body() {
                Some(body) => chat::parse_chat(body),
                None => chat::CONNECTION_INTERRUPTED.to_string(),
            };

            chat_log
                .borrow_mut()
                .push(ChatMessage::model(turn_id(), reply.clone()));
            Ok(JsValue::from_str(&reply))
        })
    }

    /// The full chat transcript as JSON
    pub fn chat_json(&self) -> String {
        serde_json::to_string(&*self.chat_log.borrow()).unwrap_or_else(|_| "[]".to_string())
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// Log in with email and password. Resolves to the account JSON;
    /// rejects with the backend's message on bad credentials.
    pub fn login(&self, email: String, password: String) -> js_sys::Promise {
        let backend = self.backend.clone();
        let session_slot = self.session.clone();
        let account_slot = self.account.clone();

        future_to_promise(async move {
            let response =
                fetch::execute(&session::login_request(&backend, &email, &password)).await;
            let auth = session::parse_session(&response).map_err(reject)?;
            storage::save_session_token(&auth.access_token);

            let merged = fetch_account(&backend, &auth).await;
            *session_slot.borrow_mut() = Some(auth);
            *account_slot.borrow_mut() = merged.clone();
            account_json_value(&merged)
        })
    }

    /// Register a new account. Resolves to the account JSON when the
    /// backend returns a live session, or null when email confirmation is
    /// still pending; rejects with the backend's message otherwise.
    pub fn sign_up(
        &self,
        email: String,
        password: String,
        username: String,
        full_name: String,
        country: String,
    ) -> js_sys::Promise {
        let backend = self.backend.clone();
        let session_slot = self.session.clone();
        let account_slot = self.account.clone();

        future_to_promise(async move {
            let request = session::sign_up_request(
                &backend, &email, &password, &username, &full_name, &country,
            );
            let response = fetch::execute(&request).await;

            match session::parse_session(&response) {
                Ok(auth) => {
                    storage::save_session_token(&auth.access_token);
                    let merged = fetch_account(&backend, &auth).await;
                    *session_slot.borrow_mut() = Some(auth);
                    *account_slot.borrow_mut() = merged.clone();
                    account_json_value(&merged)
                }
                // Confirmation e-mail flow: the sign-up landed but no
                // session was minted yet
                Err(_) if response.is_success() => Ok(JsValue::NULL),
                Err(e) => Err(reject(e)),
            }
        })
    }

    /// Request a password-reset e-mail. Resolves to whether the backend
    /// accepted the request.
    pub fn reset_password(&self, email: String) -> js_sys::Promise {
        let backend = self.backend.clone();
        future_to_promise(async move {
            let response = fetch::execute(&session::reset_request(&backend, &email)).await;
            Ok(JsValue::from_bool(response.is_success()))
        })
    }

    /// Restore the session remembered in storage, if any. Always resolves
    /// to an account JSON - guest when there is nothing to restore.
    pub fn restore_session(&self) -> js_sys::Promise {
        let backend = self.backend.clone();
        let session_slot = self.session.clone();
        let account_slot = self.account.clone();

        future_to_promise(async move {
            let token = match storage::load_session_token() {
                Some(token) => token,
                None => return account_json_value(&Account::guest()),
            };

            let response = fetch::execute(&session::session_request(&backend, &token)).await;
            let user = match session::parse_user(&response) {
                Ok(user) => user,
                Err(_) => {
                    // Stale or revoked token: forget it and fall back
                    storage::clear_session_token();
                    return account_json_value(&Account::guest());
                }
            };

            let auth = Session {
                access_token: token,
                refresh_token: None,
                user,
            };
            let merged = fetch_account(&backend, &auth).await;
            *session_slot.borrow_mut() = Some(auth);
            *account_slot.borrow_mut() = merged.clone();
            account_json_value(&merged)
        })
    }

    /// Upsert the signed-in user's profile row. Resolves to the refreshed
    /// account JSON; rejects when signed out or refused by the backend.
    pub fn update_profile(
        &self,
        username: String,
        full_name: String,
        country: String,
        avatar_url: String,
    ) -> js_sys::Promise {
        let backend = self.backend.clone();
        let session_slot = self.session.clone();
        let account_slot = self.account.clone();

        future_to_promise(async move {
            let auth = match &*session_slot.borrow() {
                Some(auth) => auth.clone(),
                None => return Err(JsValue::from_str("not signed in")),
            };

            let row = UserProfile {
                id: auth.user.id.clone(),
                username: non_empty(username),
                full_name: non_empty(full_name),
                country: non_empty(country),
                avatar_url: non_empty(avatar_url),
                updated_at: Some(String::from(js_sys::Date::new_0().to_iso_string())),
            };

            let request = profile::profile_upsert_request(&backend, &auth.access_token, &row);
            let response = fetch::execute(&request).await;
            if !response.is_success() {
                return Err(JsValue::from_str("profile update refused"));
            }

            let merged = fetch_account(&backend, &auth).await;
            *account_slot.borrow_mut() = merged.clone();
            account_json_value(&merged)
        })
    }

    /// Sign out: forget the token and return to guest mode
    pub fn sign_out(&self) {
        storage::clear_session_token();
        *self.session.borrow_mut() = None;
        *self.account.borrow_mut() = Account::guest();
    }

    /// The current account as JSON
    pub fn account_json(&self) -> String {
        serde_json::to_string(&*self.account.borrow()).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Fetch the profile row and merge it with the session.
async fn fetch_account(backend: &BackendConfig, auth: &Session) -> Account {
    let request = profile::profile_get_request(backend, &auth.access_token, &auth.user.id);
    let response = fetch::execute(&request).await;
    let row = profile::parse_profile(&response);
    account::reconcile(Some(auth), row.as_ref())
}

/// Serialize an account into a resolved promise value.
fn account_json_value(account: &Account) -> Result<JsValue, JsValue> {
    Ok(JsValue::from_str(
        &serde_json::to_string(account).unwrap_or_else(|_| "{}".to_string()),
    ))
}

/// Convert an identity error into a promise rejection.
fn reject(error: verdant_identity::IdentityError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Millisecond-clock id for chat turns.
fn turn_id() -> String {
    format!("{}", js_sys::Date::now())
}

/// Treat empty form fields as unset so upserts do not blank stored values.
fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
