//! Persisted scan history

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::details::PlantDetails;

/// One completed scan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    /// Stable record id
    pub id: String,
    /// Capture time in milliseconds since the epoch
    pub timestamp: f64,
    /// The photo that was analyzed, as a data URL
    pub original_image: String,
    /// Stylized render, attached later when generation completes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_image: Option<String>,
    /// Classification result
    pub details: PlantDetails,
}

impl ScanRecord {
    /// Create a record for a fresh scan. The timestamp comes from the
    /// platform layer; this crate has no clock of its own.
    pub fn new(timestamp: f64, original_image: impl Into<String>, details: PlantDetails) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp,
            original_image: original_image.into(),
            generated_image: None,
            details,
        }
    }
}

/// Versioned snapshot of the scan history.
///
/// Read once at startup and rewritten in full on every change. Growth is
/// unbounded; there is no eviction policy.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ScanLog {
    /// Version for migration support
    pub version: u32,
    /// Records, newest first
    pub records: Vec<ScanRecord>,
}

impl ScanLog {
    /// Current snapshot version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create an empty log at the current version
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            records: Vec::new(),
        }
    }

    /// Check if the snapshot needs migration
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Migrate the snapshot to the current version
    pub fn migrate(&mut self) {
        // Add migration logic as versions increase
        self.version = Self::CURRENT_VERSION;
    }

    /// Insert a fresh scan at the front (newest first)
    pub fn insert(&mut self, record: ScanRecord) {
        self.records.insert(0, record);
    }

    /// Get a record by id
    pub fn get(&self, id: &str) -> Option<&ScanRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Attach a generated render to a record once it arrives.
    ///
    /// Returns false if the record was deleted in the meantime.
    pub fn attach_artwork(&mut self, id: &str, image: impl Into<String>) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.generated_image = Some(image.into());
                true
            }
            None => false,
        }
    }

    /// Delete a record by id. Returns false if it did not exist.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize for storage
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Load from stored JSON, degrading to an empty log when the stored
    /// value is missing or unreadable. A stale version is migrated.
    pub fn load(json: Option<&str>) -> Self {
        let mut log = json
            .and_then(|s| serde_json::from_str::<ScanLog>(s).ok())
            .unwrap_or_else(Self::new);
        if log.needs_migration() {
            log.migrate();
        }
        log
    }
}
