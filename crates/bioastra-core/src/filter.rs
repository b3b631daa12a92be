//! Predicate filters: pure, order-preserving narrowing of a record sequence.
//!
//! Every [`Predicate`] only removes records, so a [`Filter`] is a plain
//! conjunction: the order predicates are added in never changes the result.
//! Constructors return `None` for an empty criterion, which keeps "no
//! criterion" and "no-op filter" the same thing.

use chrono::{DateTime, NaiveDate, Utc};

use crate::types::PublicationRecord;

/// One filter criterion. Text criteria are stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Any term is a substring of title, abstract, or any keyword.
    Text(Vec<String>),
    /// Case-insensitive equality with `category`.
    Category(String),
    /// `published_date >= bound`.
    PublishedFrom(NaiveDate),
    /// `published_date <= bound`.
    PublishedUntil(NaiveDate),
    /// Any author contains the needle.
    Author(String),
    /// `institution` contains the needle.
    Institution(String),
    /// Calendar year of `published_date`.
    Year(i32),
    /// Keyword set intersects the selected set.
    KeywordsAny(Vec<String>),
}

impl Predicate {
    /// Whitespace-separated terms, OR-ed together.
    pub fn text(query: &str) -> Option<Self> {
        let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        (!terms.is_empty()).then_some(Self::Text(terms))
    }

    pub fn category(category: &str) -> Option<Self> {
        non_empty(category).map(|c| Self::Category(c.to_lowercase()))
    }

    pub fn author(author: &str) -> Option<Self> {
        non_empty(author).map(|a| Self::Author(a.to_lowercase()))
    }

    pub fn institution(institution: &str) -> Option<Self> {
        non_empty(institution).map(|i| Self::Institution(i.to_lowercase()))
    }

    /// Lower date bound. Unparseable input yields `None` and the bound is
    /// dropped.
    pub fn published_from(raw: &str) -> Option<Self> {
        parse_date_bound(raw, "startDate").map(Self::PublishedFrom)
    }

    /// Upper date bound. Unparseable input yields `None` and the bound is
    /// dropped.
    pub fn published_until(raw: &str) -> Option<Self> {
        parse_date_bound(raw, "endDate").map(Self::PublishedUntil)
    }

    /// Year from a raw query value. Non-numeric input drops the filter.
    pub fn year(raw: &str) -> Option<Self> {
        let raw = non_empty(raw)?;
        match raw.trim().parse::<i32>() {
            Ok(year) => Some(Self::Year(year)),
            Err(_) => {
                tracing::debug!(raw, "ignoring non-numeric year filter");
                None
            }
        }
    }

    /// Selected keyword set. Blank entries are skipped.
    pub fn keywords_any<I, S>(keywords: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selected: Vec<String> = keywords
            .into_iter()
            .filter_map(|k| non_empty(k.as_ref()).map(|k| k.trim().to_lowercase()))
            .collect();
        (!selected.is_empty()).then_some(Self::KeywordsAny(selected))
    }

    pub fn matches(&self, record: &PublicationRecord) -> bool {
        match self {
            Self::Text(terms) => {
                let title = record.title.to_lowercase();
                let body = record.r#abstract.to_lowercase();
                let keywords: Vec<String> =
                    record.keywords.iter().map(|k| k.to_lowercase()).collect();
                terms.iter().any(|term| {
                    title.contains(term.as_str())
                        || body.contains(term.as_str())
                        || keywords.iter().any(|k| k.contains(term.as_str()))
                })
            }
            Self::Category(category) => record.category.to_lowercase() == *category,
            Self::PublishedFrom(start) => record.published_date >= *start,
            Self::PublishedUntil(end) => record.published_date <= *end,
            Self::Author(needle) => record
                .authors
                .iter()
                .any(|a| a.to_lowercase().contains(needle.as_str())),
            Self::Institution(needle) => record.institution.to_lowercase().contains(needle.as_str()),
            Self::Year(year) => record.year() == *year,
            Self::KeywordsAny(selected) => record
                .keywords
                .iter()
                .any(|k| selected.contains(&k.to_lowercase())),
        }
    }

    /// Keep the candidates this predicate accepts, in order.
    pub fn narrow<'a>(
        &self,
        mut candidates: Vec<&'a PublicationRecord>,
    ) -> Vec<&'a PublicationRecord> {
        candidates.retain(|r| self.matches(r));
        candidates
    }
}

/// A conjunction of predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    predicates: Vec<Predicate>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predicate if there is one. Chains with the `Option`-returning
    /// constructors on [`Predicate`].
    pub fn with(mut self, predicate: Option<Predicate>) -> Self {
        self.push(predicate);
        self
    }

    pub fn push(&mut self, predicate: Option<Predicate>) {
        if let Some(p) = predicate {
            self.predicates.push(p);
        }
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, record: &PublicationRecord) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }

    /// Run every predicate over `records`, preserving store order.
    pub fn apply<'a>(&self, records: &'a [PublicationRecord]) -> Vec<&'a PublicationRecord> {
        self.predicates
            .iter()
            .fold(records.iter().collect(), |candidates, p| p.narrow(candidates))
    }
}

/// Parse a date as `YYYY-MM-DD` or as an RFC 3339 timestamp. A timestamp
/// bound uses its UTC calendar date, whatever offset it was written in.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}

fn parse_date_bound(raw: &str, param: &'static str) -> Option<NaiveDate> {
    let raw = non_empty(raw)?;
    let parsed = parse_date(raw);
    if parsed.is_none() {
        tracing::debug!(param, raw, "ignoring unparseable date bound");
    }
    parsed
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.trim().is_empty()).then_some(s)
}
