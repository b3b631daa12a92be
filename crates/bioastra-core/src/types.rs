//! Core types for bioastra-core.
//!
//! This module defines the record shared across every layer: the immutable
//! [`PublicationRecord`]. Field names serialise in camelCase so the JSON wire
//! shape matches what the dashboard frontend consumes.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single space-biology publication held in the record store.
///
/// Records are immutable once the store is built. Identity is `id`; the store
/// rejects duplicates at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationRecord {
    /// Unique identifier, e.g. `NASA-SB-2022-01`.
    pub id: String,
    pub title: String,
    pub r#abstract: String,
    /// Authors in display order.
    pub authors: Vec<String>,
    pub institution: String,
    /// Calendar publication date, serialised as `YYYY-MM-DD`.
    pub published_date: NaiveDate,
    /// Free-form category tag. Not an enum: any value is legal.
    pub category: String,
    /// Keywords in display order. Matching treats them as a set.
    pub keywords: Vec<String>,
    /// Citation count. Unsigned, so never negative.
    pub citations: u32,
    /// External identifier. Never validated.
    pub doi: String,
}

impl PublicationRecord {
    /// Calendar year of `published_date`.
    pub fn year(&self) -> i32 {
        self.published_date.year()
    }

    /// Number of keywords this record shares (exact match) with `other`.
    pub fn shared_keywords(&self, other: &PublicationRecord) -> usize {
        self.keywords
            .iter()
            .filter(|k| other.keywords.contains(k))
            .count()
    }
}
