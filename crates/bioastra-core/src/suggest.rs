//! Autocomplete: on-demand substring suggestions over titles, authors and
//! keywords.
//!
//! There is no prebuilt index: each call rescans the store. Fine for a small
//! static collection; a large one would want a trie or an inverted index.

use std::collections::HashSet;

use crate::types::PublicationRecord;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuggestKind {
    Title,
    Author,
    Keyword,
    #[default]
    All,
}

impl SuggestKind {
    /// Unknown kinds behave like [`SuggestKind::All`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "title" => Self::Title,
            "author" => Self::Author,
            "keyword" => Self::Keyword,
            _ => Self::All,
        }
    }
}

/// Up to `limit` suggestions containing `term`, case-insensitively.
///
/// Titles come in store order and are not deduplicated; authors and keywords
/// are distinct, in first-seen order. `All` concatenates the three lists in
/// that order before truncating.
pub fn suggest<'a>(
    records: &'a [PublicationRecord],
    term: &str,
    kind: SuggestKind,
    limit: usize,
) -> Vec<&'a str> {
    if term.is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();
    let hit = |s: &&str| s.to_lowercase().contains(&needle);

    let titles = || records.iter().map(|r| r.title.as_str()).filter(hit);
    let authors = || distinct(records.iter().flat_map(|r| &r.authors)).filter(hit);
    let keywords = || distinct(records.iter().flat_map(|r| &r.keywords)).filter(hit);

    match kind {
        SuggestKind::Title => titles().take(limit).collect(),
        SuggestKind::Author => authors().take(limit).collect(),
        SuggestKind::Keyword => keywords().take(limit).collect(),
        SuggestKind::All => titles().chain(authors()).chain(keywords()).take(limit).collect(),
    }
}

/// Distinct values in first-seen order.
pub(crate) fn distinct<'a>(values: impl IntoIterator<Item = &'a String>) -> impl Iterator<Item = &'a str> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .map(String::as_str)
        .filter(move |v| seen.insert(*v))
}
