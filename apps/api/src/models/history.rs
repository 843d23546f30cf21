use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::resume::GeneratedText;

/// One completed generation, kept for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub job_title: String,
    pub summary: GeneratedText,
    pub experience: GeneratedText,
    pub cover_letter: GeneratedText,
    pub timestamp: DateTime<Utc>,
}

/// A caller-owned log of generations, most recent first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionHistory {
    entries: Vec<GenerationRecord>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: GenerationRecord) {
        self.entries.insert(0, record);
    }

    /// Records, newest first.
    pub fn entries(&self) -> &[GenerationRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sidebar label for the record at `index` (0 = newest).
    /// Numbering counts up from the oldest record, which is "Result 1".
    pub fn label(&self, index: usize) -> Option<String> {
        let record = self.entries.get(index)?;
        Some(format!(
            "Result {}: {} ({})",
            self.entries.len() - index,
            record.job_title,
            record.timestamp.format("%I:%M:%S %p")
        ))
    }
}
