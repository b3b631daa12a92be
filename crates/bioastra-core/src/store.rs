//! Store: the read-only collection of [`PublicationRecord`] values.
//!
//! Query code never reaches for a global. It takes a [`RecordSource`], so the
//! filters and aggregators run unchanged against the embedded sample, a JSON
//! file, or a test fixture.

use std::borrow::Cow;
use std::collections::HashSet;
use std::path::Path;

use crate::error::{CoreError, Result};
use crate::types::PublicationRecord;

/// The 15-record sample shipped with the binary.
const SAMPLE_STUDIES: &str = include_str!("../data/studies.json");

/// Read-only access to the full record collection.
///
/// Implementations must return records in a stable order: aggregations break
/// ties by first-encountered order, so the order is observable.
pub trait RecordSource: Send + Sync {
    fn all(&self) -> Result<Cow<'_, [PublicationRecord]>>;
}

/// In-memory store built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct StaticStore {
    records: Vec<PublicationRecord>,
}

impl StaticStore {
    /// Build a store, rejecting duplicate ids.
    pub fn new(records: Vec<PublicationRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(CoreError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    /// The embedded sample collection.
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_STUDIES)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<PublicationRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let store = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.as_ref().display(),
            records = store.len(),
            "loaded record file"
        );
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordSource for StaticStore {
    fn all(&self) -> Result<Cow<'_, [PublicationRecord]>> {
        Ok(Cow::Borrowed(&self.records))
    }
}
