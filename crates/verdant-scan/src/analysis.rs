//! Vision analysis request/response codec

use serde_json::{json, Value};
use verdant_network::HttpRequest;

use crate::config::{ServiceConfig, ANALYSIS_PROMPT};
use crate::details::PlantDetails;

/// Build the generateContent request for a photo.
///
/// Accepts raw base64 or a full `data:image/...;base64,` URL; the prefix is
/// stripped before upload.
pub fn analysis_request(config: &ServiceConfig, base64_image: &str) -> HttpRequest {
    let clean = strip_data_url(base64_image);

    let payload = json!({
        "contents": [{
            "parts": [
                {
                    "inlineData": {
                        "mimeType": "image/jpeg",
                        "data": clean
                    }
                },
                { "text": ANALYSIS_PROMPT }
            ]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "name": { "type": "STRING" },
                    "scientificName": { "type": "STRING" },
                    "careInstructions": { "type": "STRING" },
                    "confidence": { "type": "NUMBER" }
                },
                "required": ["name", "scientificName", "careInstructions", "confidence"]
            }
        }
    });

    HttpRequest::post(config.generate_url(&config.text_model))
        .with_json_body(serde_json::to_vec(&payload).unwrap_or_default())
        .with_timeout(60_000)
}

/// Parse an analysis response body into plant details.
///
/// Tolerates markdown code fences around the JSON, malformed or partial
/// payloads, and wrong-typed fields; every failure path yields the
/// fallback record with `confidence = 0`.
pub fn parse_analysis(body: &[u8]) -> PlantDetails {
    let text = match candidate_text(body) {
        Some(text) => text,
        None => return PlantDetails::fallback(),
    };

    let cleaned = strip_code_fences(&text);
    match serde_json::from_str::<Value>(cleaned) {
        Ok(value) => PlantDetails::sanitize(&value),
        Err(_) => PlantDetails::fallback(),
    }
}

/// Extract the first candidate's text from a generateContent envelope.
pub(crate) fn candidate_text(body: &[u8]) -> Option<String> {
    let envelope: Value = serde_json::from_slice(body).ok()?;
    let parts = envelope
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();
    (!text.is_empty()).then_some(text)
}

/// Strip a leading `data:...;base64,` prefix, if present.
fn strip_data_url(image: &str) -> &str {
    match image.split_once(',') {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => image,
    }
}

/// Strip ```json fences the model sometimes wraps its output in.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    inner.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope_with_text(text: &str) -> Vec<u8> {
        serde_json::to_vec(&json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }] }
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_request_strips_data_url_prefix() {
        let config = ServiceConfig::new("key");
        let req = analysis_request(&config, "data:image/jpeg;base64,QUJD");

        let body: Value = serde_json::from_slice(req.body.as_deref().unwrap()).unwrap();
        let data = &body["contents"][0]["parts"][0]["inlineData"]["data"];
        assert_eq!(data, "QUJD");
    }

    #[test]
    fn test_request_passes_raw_base64_through() {
        let config = ServiceConfig::new("key");
        let req = analysis_request(&config, "QUJD");

        let body: Value = serde_json::from_slice(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["inlineData"]["data"], "QUJD");
        assert_eq!(body["contents"][0]["parts"][1]["text"], ANALYSIS_PROMPT);
    }

    #[test]
    fn test_parse_well_formed_response() {
        let inner = r#"{"name":"Aloe Vera","scientificName":"Aloe barbadensis","careInstructions":"Bright light.","confidence":0.88}"#;
        let details = parse_analysis(&envelope_with_text(inner));

        assert_eq!(details.name, "Aloe Vera");
        assert!((details.confidence - 0.88).abs() < 1e-9);
    }

    #[test]
    fn test_parse_strips_markdown_fences() {
        let inner = "```json\n{\"name\":\"Aloe Vera\",\"confidence\":0.5}\n```";
        let details = parse_analysis(&envelope_with_text(inner));

        assert_eq!(details.name, "Aloe Vera");
        assert!(details.is_recognized());
    }

    #[test]
    fn test_parse_malformed_inner_json_falls_back() {
        let details = parse_analysis(&envelope_with_text("{not json at all"));
        assert_eq!(details, PlantDetails::fallback());
    }

    #[test]
    fn test_parse_malformed_envelope_falls_back() {
        let details = parse_analysis(b"<html>502 Bad Gateway</html>");
        assert_eq!(details, PlantDetails::fallback());
    }

    #[test]
    fn test_parse_empty_candidates_falls_back() {
        let body = serde_json::to_vec(&json!({ "candidates": [] })).unwrap();
        assert_eq!(parse_analysis(&body), PlantDetails::fallback());
    }

    #[test]
    fn test_non_plant_input_reports_zero_confidence() {
        let inner = r#"{"name":"Unknown Object","scientificName":"","careInstructions":"","confidence":0}"#;
        let details = parse_analysis(&envelope_with_text(inner));

        assert!(!details.is_recognized());
        assert_eq!(details.name, "Unknown Object");
    }
}
