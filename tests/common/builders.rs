//! Test builders: ergonomic constructors for `PublicationRecord` and stores.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use bioastra_core::{PublicationRecord, StaticStore};
use chrono::NaiveDate;
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::{Sentence, Words};
use fake::faker::name::en::Name;
use fake::Fake;

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`PublicationRecord`] test fixtures.
///
/// # Example
///
/// ```rust
/// let record = RecordBuilder::new("R-1")
///     .category("Neuroscience")
///     .published("2022-06-01")
///     .authors(&["Ada Lovelace", "Alan Turing"])
///     .keywords(&["sleep"])
///     .citations(12)
///     .build();
/// ```
pub struct RecordBuilder {
    record: PublicationRecord,
}

impl RecordBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            record: PublicationRecord {
                title: format!("Study {id}"),
                r#abstract: String::new(),
                authors: vec!["Test Author".to_string()],
                institution: "Test Institute".to_string(),
                published_date: date("2022-01-01"),
                category: "Cell Biology".to_string(),
                keywords: Vec::new(),
                citations: 0,
                doi: format!("10.0000/{id}"),
                id,
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.record.title = title.into();
        self
    }

    pub fn abstract_text(mut self, text: impl Into<String>) -> Self {
        self.record.r#abstract = text.into();
        self
    }

    pub fn authors(mut self, authors: &[&str]) -> Self {
        self.record.authors = authors.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn institution(mut self, institution: impl Into<String>) -> Self {
        self.record.institution = institution.into();
        self
    }

    /// `YYYY-MM-DD`; panics otherwise.
    pub fn published(mut self, ymd: &str) -> Self {
        self.record.published_date = date(ymd);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.record.category = category.into();
        self
    }

    pub fn keywords(mut self, keywords: &[&str]) -> Self {
        self.record.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn citations(mut self, citations: u32) -> Self {
        self.record.citations = citations;
        self
    }

    pub fn build(self) -> PublicationRecord {
        self.record
    }
}

pub fn date(ymd: &str) -> NaiveDate {
    NaiveDate::parse_from_str(ymd, "%Y-%m-%d").unwrap_or_else(|e| panic!("bad test date {ymd:?}: {e}"))
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A record with just the fields most aggregations care about.
pub fn record(id: &str, category: &str, published: &str, citations: u32) -> PublicationRecord {
    RecordBuilder::new(id)
        .category(category)
        .published(published)
        .citations(citations)
        .build()
}

pub fn store_of(records: Vec<PublicationRecord>) -> StaticStore {
    StaticStore::new(records).expect("test records must have unique ids")
}

// ---------------------------------------------------------------------------
// Corpus helpers
// ---------------------------------------------------------------------------

const CATEGORIES: &[&str] = &[
    "Cell Biology",
    "Human Physiology",
    "Microbiology",
    "Radiation Biology",
    "Space Agriculture",
    "Neuroscience",
];

/// Build a corpus of `n` records with fake titles, authors and keywords.
///
/// Ids, categories, dates and citation counts are derived from the index so
/// sizes and distributions are stable; the text fields are random.
pub fn build_corpus(n: usize) -> Vec<PublicationRecord> {
    (0..n)
        .map(|i| {
            let authors: Vec<String> = (0..3).map(|_| Name().fake()).collect();
            let keywords: Vec<String> = Words(2..5).fake();
            PublicationRecord {
                id: format!("SYN-{i:06}"),
                title: Sentence(4..9).fake(),
                r#abstract: Sentence(12..30).fake(),
                authors,
                institution: CompanyName().fake(),
                published_date: NaiveDate::from_ymd_opt(2015 + (i % 9) as i32, 1 + (i % 12) as u32, 1 + (i % 28) as u32)
                    .expect("day 1..=28 is valid in every month"),
                category: CATEGORIES[i % CATEGORIES.len()].to_string(),
                keywords,
                citations: (i * 7 % 97) as u32,
                doi: format!("10.9999/syn.{i}"),
            }
        })
        .collect()
}
