//! Classified plant record

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured result of a plant classification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantDetails {
    /// Common name
    pub name: String,
    /// Scientific Latin name
    pub scientific_name: String,
    /// Care guidance text
    pub care_instructions: String,
    /// Classification confidence in [0, 1]; 0 signals a non-plant input or
    /// a failed analysis
    pub confidence: f64,
}

impl PlantDetails {
    /// Fallback record for failed or unusable analyses.
    pub fn fallback() -> Self {
        Self {
            name: "Unknown Plant".into(),
            scientific_name: "Flora Incognita".into(),
            care_instructions: "Could not analyze image. Please try again.".into(),
            confidence: 0.0,
        }
    }

    /// Whether the service recognized a plant at all.
    pub fn is_recognized(&self) -> bool {
        self.confidence > 0.0
    }

    /// Build a record from loosely-typed JSON, sanitizing every field.
    ///
    /// The model occasionally returns objects where strings are expected or
    /// drops fields entirely; each field falls back independently so one
    /// bad field cannot take the whole record down.
    pub fn sanitize(value: &Value) -> Self {
        let fallback = Self::fallback();
        Self {
            name: string_field(value, "name", &fallback.name),
            scientific_name: string_field(value, "scientificName", &fallback.scientific_name),
            care_instructions: string_field(
                value,
                "careInstructions",
                &fallback.care_instructions,
            ),
            confidence: value
                .get("confidence")
                .and_then(Value::as_f64)
                .unwrap_or(0.0)
                .clamp(0.0, 1.0),
        }
    }
}

/// Extract a string field, stringifying non-null non-string values.
fn string_field(value: &Value, key: &str, default: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::String(_)) | Some(Value::Null) | None => default.to_string(),
        // Objects/arrays/numbers are stringified rather than dropped
        Some(other) => other.to_string(),
    }
}
