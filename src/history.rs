use std::collections::VecDeque;
use std::sync::Mutex;

use serde::Serialize;

use crate::label::Label;

/// Maximum number of scans kept in memory.
pub const HISTORY_CAPACITY: usize = 10;

/// One completed classification. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanRecord {
    pub filename: String,
    /// Location of the stored upload, when it was persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filepath: Option<String>,
    pub patient_name: String,
    pub timestamp: String,
    #[serde(rename = "prediction")]
    pub label: Label,
    pub confidence: f64,
    pub report: String,
}

/// Newest-first, fixed-capacity record of recent scans.
#[derive(Debug, Default)]
pub struct ScanHistory {
    entries: Mutex<VecDeque<ScanRecord>>,
}

impl ScanHistory {
    pub fn new() -> Self {
        ScanHistory {
            entries: Mutex::new(VecDeque::with_capacity(HISTORY_CAPACITY + 1)),
        }
    }

    /// Inserts at the front and evicts the oldest entry beyond capacity,
    /// under a single lock acquisition.
    pub fn record(&self, entry: ScanRecord) {
        let mut entries = self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.push_front(entry);
        while entries.len() > HISTORY_CAPACITY {
            if let Some(evicted) = entries.pop_back() {
                log::debug!("Evicted scan {} from history", evicted.filename);
            }
        }
    }

    /// Snapshot of the current records, newest first.
    pub fn list(&self) -> Vec<ScanRecord> {
        let entries = self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
