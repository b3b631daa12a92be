//! Facet catalogue: the distinct values a client can filter on.
//!
//! Recomputed from the store on every call; nothing is cached.

use chrono::NaiveDate;
use serde::Serialize;

use crate::suggest::distinct;
use crate::types::PublicationRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions<'a> {
    pub categories: Vec<&'a str>,
    pub institutions: Vec<&'a str>,
    pub authors: Vec<&'a str>,
    pub date_range: DateRange,
    pub keywords: Vec<&'a str>,
}

/// Earliest and latest publication date. Both are `None` for an empty store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

pub fn filter_options(records: &[PublicationRecord]) -> FilterOptions<'_> {
    FilterOptions {
        categories: distinct(records.iter().map(|r| &r.category)).collect(),
        institutions: distinct(records.iter().map(|r| &r.institution)).collect(),
        authors: distinct(records.iter().flat_map(|r| &r.authors)).collect(),
        date_range: DateRange {
            min: records.iter().map(|r| r.published_date).min(),
            max: records.iter().map(|r| r.published_date).max(),
        },
        keywords: distinct(records.iter().flat_map(|r| &r.keywords)).collect(),
    }
}
