//! Assistant conversation codec

use serde::{Deserialize, Serialize};
use serde_json::json;
use verdant_network::HttpRequest;

use crate::analysis::candidate_text;
use crate::config::{ServiceConfig, ASSISTANT_CONTEXT};

/// Fallback reply when the service cannot be reached or returns nothing.
pub const CONNECTION_INTERRUPTED: &str =
    "Connection interrupted. I am having trouble processing that request.";

/// Author of a chat turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The person typing into the widget
    User,
    /// The assistant service
    Model,
}

impl ChatRole {
    /// Wire name of this role
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

/// One turn of the assistant conversation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Client-side message id
    pub id: String,
    /// Who authored the turn
    pub role: ChatRole,
    /// Message text
    pub text: String,
}

impl ChatMessage {
    /// Create a user turn
    pub fn user(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: ChatRole::User,
            text: text.into(),
        }
    }

    /// Create a model turn
    pub fn model(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// Build the chat request: prior turns plus the new user message, with the
/// assistant context attached as the system instruction.
pub fn chat_request(config: &ServiceConfig, history: &[ChatMessage], message: &str) -> HttpRequest {
    let mut contents: Vec<serde_json::Value> = history
        .iter()
        .map(|m| {
            json!({
                "role": m.role.as_str(),
                "parts": [{ "text": m.text }]
            })
        })
        .collect();
    contents.push(json!({
        "role": "user",
        "parts": [{ "text": message }]
    }));

    let payload = json!({
        "systemInstruction": {
            "parts": [{ "text": ASSISTANT_CONTEXT }]
        },
        "contents": contents
    });

    HttpRequest::post(config.generate_url(&config.text_model))
        .with_json_body(serde_json::to_vec(&payload).unwrap_or_default())
        .with_timeout(45_000)
}

/// Parse the assistant's reply text from a response body.
///
/// An empty or malformed body yields the interruption fallback so the chat
/// surface always has something to render.
pub fn parse_chat(body: &[u8]) -> String {
    candidate_text(body).unwrap_or_else(|| CONNECTION_INTERRUPTED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_request_carries_history_in_order() {
        let config = ServiceConfig::new("key");
        let history = vec![
            ChatMessage::model("init", "Verdant assistant online."),
            ChatMessage::user("1", "How do I scan?"),
            ChatMessage::model("2", "Tap the camera button."),
        ];

        let req = chat_request(&config, &history, "Thanks!");
        let body: Value = serde_json::from_slice(req.body.as_deref().unwrap()).unwrap();
        let contents = body["contents"].as_array().unwrap();

        assert_eq!(contents.len(), 4);
        assert_eq!(contents[0]["role"], "model");
        assert_eq!(contents[1]["role"], "user");
        assert_eq!(contents[3]["role"], "user");
        assert_eq!(contents[3]["parts"][0]["text"], "Thanks!");
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            ASSISTANT_CONTEXT
        );
    }

    #[test]
    fn test_parse_extracts_reply() {
        let body = serde_json::to_vec(&serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Water it weekly." }] }
            }]
        }))
        .unwrap();

        assert_eq!(parse_chat(&body), "Water it weekly.");
    }

    #[test]
    fn test_parse_empty_reply_falls_back() {
        assert_eq!(parse_chat(b"{}"), CONNECTION_INTERRUPTED);
        assert_eq!(parse_chat(b"garbage"), CONNECTION_INTERRUPTED);
    }
}
