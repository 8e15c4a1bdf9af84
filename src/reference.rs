//! Disease reference loader.
//!
//! Reads the NAMASTE/ICD-11 disease mapping CSV once at startup into an
//! ordered, process-lifetime list. The list is shared via `Arc` across all
//! request handlers; it is never mutated or reloaded without a restart, so
//! concurrent reads need no synchronization.

use std::path::Path;

use csv::StringRecord;
use thiserror::Error;

use crate::models::{DiseaseEntry, DiseaseSuggestion};

/// Upper bound on autocomplete results returned per query.
pub const MAX_SUGGESTIONS: usize = 10;

const COL_ENGLISH: &str = "English Name";
const COL_AYUSH: &str = "Ayush Name";
const COL_NAMASTE: &str = "NAMASTE Code";
const COL_ICD11: &str = "ICD-11 Code";
const COL_BIOMEDICINE: &str = "Biomedicine";

#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Cannot read disease reference {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// The loaded disease reference. Entry order is exactly the row order of
/// the source file; duplicates are kept.
#[derive(Debug)]
pub struct DiseaseReference {
    entries: Vec<DiseaseEntry>,
}

impl DiseaseReference {
    /// Load the reference CSV. A missing or unreadable file is an error;
    /// startup treats that as fatal — there is no degraded mode.
    pub fn load(path: &Path) -> Result<Self, ReferenceError> {
        let wrap = |source: csv::Error| ReferenceError::Read {
            path: path.display().to_string(),
            source,
        };

        let mut reader = csv::Reader::from_path(path).map_err(wrap)?;
        let headers = reader.headers().map_err(wrap)?.clone();

        let mut entries = Vec::new();
        for record in reader.records() {
            let record = record.map_err(wrap)?;
            entries.push(entry_from_record(&headers, &record));
        }

        tracing::info!(
            count = entries.len(),
            path = %path.display(),
            "Disease reference loaded"
        );
        Ok(Self { entries })
    }

    pub fn from_entries(entries: Vec<DiseaseEntry>) -> Self {
        Self { entries }
    }

    /// All entries in load order.
    pub fn entries(&self) -> &[DiseaseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Autocomplete filter: case-insensitive substring match on the
    /// english or ayush name, scanned in load order, capped at
    /// [`MAX_SUGGESTIONS`]. An empty (or whitespace-only) query matches
    /// nothing.
    pub fn suggest(&self, query: &str) -> Vec<DiseaseSuggestion> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|e| {
                e.english_name.to_lowercase().contains(&query)
                    || e.ayush_name.to_lowercase().contains(&query)
            })
            .take(MAX_SUGGESTIONS)
            .map(DiseaseEntry::to_suggestion)
            .collect()
    }
}

fn entry_from_record(headers: &StringRecord, record: &StringRecord) -> DiseaseEntry {
    let field = |name: &str| -> String {
        headers
            .iter()
            .position(|h| h == name)
            .and_then(|i| record.get(i))
            .unwrap_or("")
            .trim()
            .to_string()
    };

    DiseaseEntry {
        english_name: field(COL_ENGLISH),
        ayush_name: field(COL_AYUSH),
        namaste: field(COL_NAMASTE),
        icd11: field(COL_ICD11),
        biomedicine: field(COL_BIOMEDICINE),
    }
}
