//! Query façade. Filter, sort and paginate behind the search and list
//! operations.
//!
//! Numeric parameters are parsed leniently by [`Pagination::from_params`]:
//! nothing here ever fails on bad input, it falls back to defaults instead.

use std::cmp::Ordering;
use std::ops::Range;

use crate::error::{CoreError, Result};
use crate::filter::{Filter, Predicate};
use crate::types::PublicationRecord;

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// A one-based page request. `limit == 0` disables pagination: page 1 holds
/// every record and later pages are empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
}

impl Pagination {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: page.max(1),
            limit,
        }
    }

    /// Build from raw query values.
    ///
    /// A missing, non-numeric or non-positive page becomes 1. A missing,
    /// non-numeric or negative limit becomes `default_limit`; anything above
    /// `max_limit` is clamped to it.
    pub fn from_params(
        raw_page: Option<&str>,
        raw_limit: Option<&str>,
        default_limit: usize,
        max_limit: usize,
    ) -> Self {
        let page = match raw_page.and_then(parse_int) {
            Some(p) if p >= 1 => p as usize,
            Some(p) => {
                tracing::debug!(page = p, "page below 1, using 1");
                1
            }
            None => 1,
        };
        let limit = match raw_limit.and_then(parse_int) {
            Some(l) if l >= 0 => (l as usize).min(max_limit),
            _ => default_limit.min(max_limit),
        };
        Self::new(page, limit)
    }

    /// `ceil(total / limit)`, or 0/1 when pagination is disabled.
    pub fn total_pages(&self, total: usize) -> usize {
        match self.limit {
            0 => usize::from(total > 0),
            limit => total.div_ceil(limit),
        }
    }

    /// Index range of this page within `total` items, clipped to bounds.
    pub fn window(&self, total: usize) -> Range<usize> {
        if self.limit == 0 {
            return if self.page == 1 { 0..total } else { total..total };
        }
        let start = (self.page - 1).saturating_mul(self.limit).min(total);
        let end = start.saturating_add(self.limit).min(total);
        start..end
    }

    pub fn slice<'s, T>(&self, items: &'s [T]) -> &'s [T] {
        &items[self.window(items.len())]
    }
}

fn parse_int(raw: &str) -> Option<i64> {
    let parsed = raw.trim().parse::<i64>().ok();
    if parsed.is_none() && !raw.trim().is_empty() {
        tracing::debug!(raw, "ignoring non-numeric paging parameter");
    }
    parsed
}

/// One page of matching records plus totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPage<'a> {
    pub results: Vec<&'a PublicationRecord>,
    /// Matching records before pagination.
    pub total_count: usize,
    pub page: usize,
    pub total_pages: usize,
}

impl<'a> ResultPage<'a> {
    fn paginate(matches: Vec<&'a PublicationRecord>, pagination: Pagination) -> Self {
        Self {
            results: pagination.slice(&matches).to_vec(),
            total_count: matches.len(),
            page: pagination.page,
            total_pages: pagination.total_pages(matches.len()),
        }
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Criteria accepted by the search endpoint. Every field is optional; blank
/// values are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub query: Option<String>,
    pub category: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub author: Option<String>,
    pub institution: Option<String>,
}

impl SearchCriteria {
    pub fn filter(&self) -> Filter {
        Filter::new()
            .with(self.query.as_deref().and_then(Predicate::text))
            .with(self.category.as_deref().and_then(Predicate::category))
            .with(self.start_date.as_deref().and_then(Predicate::published_from))
            .with(self.end_date.as_deref().and_then(Predicate::published_until))
            .with(self.author.as_deref().and_then(Predicate::author))
            .with(self.institution.as_deref().and_then(Predicate::institution))
    }
}

/// Filter the full store and cut one page out of the matches.
pub fn search<'a>(
    records: &'a [PublicationRecord],
    criteria: &SearchCriteria,
    pagination: Pagination,
) -> ResultPage<'a> {
    let matches = criteria.filter().apply(records);
    tracing::debug!(
        total = records.len(),
        matched = matches.len(),
        page = pagination.page,
        "search"
    );
    ResultPage::paginate(matches, pagination)
}

// ---------------------------------------------------------------------------
// Study listing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    PublishedDate,
    Citations,
    Title,
}

impl SortKey {
    /// Unknown keys fall back to the publication date.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "citations" => Self::Citations,
            "title" => Self::Title,
            _ => Self::PublishedDate,
        }
    }

    fn compare(self, a: &PublicationRecord, b: &PublicationRecord) -> Ordering {
        match self {
            Self::PublishedDate => a.published_date.cmp(&b.published_date),
            Self::Citations => a.citations.cmp(&b.citations),
            Self::Title => a.title.cmp(&b.title),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// `desc` in any case is descending; every other value is ascending.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

/// Criteria accepted by the study list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudyListCriteria {
    pub category: Option<String>,
    pub year: Option<String>,
    pub author: Option<String>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl StudyListCriteria {
    pub fn filter(&self) -> Filter {
        Filter::new()
            .with(self.category.as_deref().and_then(Predicate::category))
            .with(self.year.as_deref().and_then(Predicate::year))
            .with(self.author.as_deref().and_then(Predicate::author))
    }
}

/// Filter, stable-sort, then paginate.
pub fn list_studies<'a>(
    records: &'a [PublicationRecord],
    criteria: &StudyListCriteria,
    pagination: Pagination,
) -> ResultPage<'a> {
    let mut matches = criteria.filter().apply(records);
    let key = criteria.sort_by;
    match criteria.sort_order {
        SortOrder::Asc => matches.sort_by(|a, b| key.compare(a, b)),
        SortOrder::Desc => matches.sort_by(|a, b| key.compare(b, a)),
    }
    ResultPage::paginate(matches, pagination)
}

// ---------------------------------------------------------------------------
// Lookup by id
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyDetail<'a> {
    pub study: &'a PublicationRecord,
    pub related: Vec<&'a PublicationRecord>,
}

/// Find a study and up to `related_limit` records that share its category or
/// at least one keyword, ranked by shared keywords then citations.
pub fn find_study<'a>(
    records: &'a [PublicationRecord],
    id: &str,
    related_limit: usize,
) -> Result<StudyDetail<'a>> {
    let study = records
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| CoreError::StudyNotFound(id.to_string()))?;

    let mut related: Vec<(usize, &PublicationRecord)> = records
        .iter()
        .filter(|r| r.id != study.id)
        .map(|r| (r.shared_keywords(study), r))
        .filter(|(shared, r)| *shared > 0 || r.category == study.category)
        .collect();
    related.sort_by(|(sa, a), (sb, b)| sb.cmp(sa).then(b.citations.cmp(&a.citations)));
    related.truncate(related_limit);

    Ok(StudyDetail {
        study,
        related: related.into_iter().map(|(_, r)| r).collect(),
    })
}
