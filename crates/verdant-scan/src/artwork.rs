//! Stylized render request/response codec

use serde_json::{json, Value};
use verdant_network::HttpRequest;

use crate::config::{artwork_prompt, ServiceConfig};

/// Build the image-generation request for a recognized plant.
pub fn artwork_request(config: &ServiceConfig, plant_name: &str) -> HttpRequest {
    let payload = json!({
        "contents": [{
            "parts": [{ "text": artwork_prompt(plant_name) }]
        }],
        "generationConfig": {
            "imageConfig": { "aspectRatio": "1:1" }
        }
    });

    HttpRequest::post(config.generate_url(&config.image_model))
        .with_json_body(serde_json::to_vec(&payload).unwrap_or_default())
        .with_timeout(90_000)
}

/// Parse an image-generation response body into a displayable data URL.
///
/// Walks the first candidate's parts for inline image data. Absence of an
/// image part, or a malformed body, is `None`; the stylized view is an
/// optional enhancement, never an error.
pub fn parse_artwork(body: &[u8]) -> Option<String> {
    let envelope: Value = serde_json::from_slice(body).ok()?;
    let parts = envelope
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    parts.iter().find_map(|part| {
        let inline = part.get("inlineData")?;
        let data = inline.get("data")?.as_str()?;
        let mime = inline
            .get("mimeType")
            .and_then(Value::as_str)
            .unwrap_or("image/png");
        Some(format!("data:{};base64,{}", mime, data))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_targets_image_model() {
        let config = ServiceConfig::new("key");
        let req = artwork_request(&config, "Monstera");

        assert!(req.url.contains("gemini-2.5-flash-image"));
        let body: Value = serde_json::from_slice(req.body.as_deref().unwrap()).unwrap();
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("Monstera"));
    }

    #[test]
    fn test_parse_finds_inline_image_after_text_part() {
        let body = serde_json::to_vec(&json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Here is your render" },
                        { "inlineData": { "mimeType": "image/png", "data": "QUJD" } }
                    ]
                }
            }]
        }))
        .unwrap();

        assert_eq!(
            parse_artwork(&body).as_deref(),
            Some("data:image/png;base64,QUJD")
        );
    }

    #[test]
    fn test_parse_defaults_mime_type() {
        let body = serde_json::to_vec(&json!({
            "candidates": [{
                "content": { "parts": [{ "inlineData": { "data": "QUJD" } }] }
            }]
        }))
        .unwrap();

        assert_eq!(
            parse_artwork(&body).as_deref(),
            Some("data:image/png;base64,QUJD")
        );
    }

    #[test]
    fn test_parse_without_image_is_none() {
        let body = serde_json::to_vec(&json!({
            "candidates": [{
                "content": { "parts": [{ "text": "no image today" }] }
            }]
        }))
        .unwrap();

        assert!(parse_artwork(&body).is_none());
    }

    #[test]
    fn test_parse_malformed_body_is_none() {
        assert!(parse_artwork(b"not json").is_none());
        assert!(parse_artwork(b"{}").is_none());
    }
}
