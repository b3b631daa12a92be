//! Aggregators: summary statistics over a (possibly filtered) record sequence.
//!
//! Every function here is pure. Counting goes through [`Accumulator`], which keeps
//! keys in first-encountered order so that ranking ties resolve the same way
//! on every call. Results borrow from the input records and serialise
//! directly into the JSON shapes the charts expect.

use std::collections::{BTreeMap, HashMap};

use serde::{Serialize, Serializer};

use crate::types::PublicationRecord;

pub const TOP_CITED_LIMIT: usize = 5;
pub const TOP_INSTITUTIONS_LIMIT: usize = 5;
pub const TOP_KEYWORDS_LIMIT: usize = 10;

// ---------------------------------------------------------------------------
// Output shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount<'a> {
    pub category: &'a str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationImpact<'a> {
    pub category: &'a str,
    /// Mean citations, rounded half-up to one decimal.
    pub average_citations: f64,
    pub total_citations: u64,
    pub study_count: usize,
}

/// Projection of a record used in citation rankings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CitedStudy<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub authors: &'a [String],
    pub citations: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstitutionCount<'a> {
    pub name: &'a str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount<'a> {
    pub keyword: &'a str,
    pub count: usize,
}

/// One word-cloud entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloudWord<'a> {
    pub text: &'a str,
    pub value: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Institution,
    Author,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkNode<'a> {
    pub id: String,
    pub name: &'a str,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Sizing weight: 1 plus one per (author, study) association.
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkLink {
    pub source: String,
    pub target: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollaborationNetwork<'a> {
    pub nodes: Vec<NetworkNode<'a>>,
    pub links: Vec<NetworkLink>,
}

/// The bundle served by the stats overview endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOverview<'a> {
    pub total_studies: usize,
    pub publications_by_year: BTreeMap<i32, usize>,
    pub top_cited_studies: Vec<CitedStudy<'a>>,
    /// Category counts in first-seen order, serialised as a JSON object.
    #[serde(serialize_with = "as_map")]
    pub category_distribution: Vec<(&'a str, usize)>,
    pub top_institutions: Vec<InstitutionCount<'a>>,
    pub top_keywords: Vec<KeywordCount<'a>>,
}

// ---------------------------------------------------------------------------
// Tally
// ---------------------------------------------------------------------------

/// Per-key accumulator that remembers first-encountered key order.
#[derive(Debug, Default)]
struct Accumulator<'a, A> {
    index: HashMap<&'a str, usize>,
    entries: Vec<(&'a str, A)>,
}

/// Occurrence counter.
type Tally<'a> = Accumulator<'a, usize>;

impl<'a, A: Default> Accumulator<'a, A> {
    /// The value for `key`, inserted as `A::default()` on first sight.
    fn entry(&mut self, key: &'a str) -> &mut A {
        let i = match self.index.get(key) {
            Some(&i) => i,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((key, A::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[i].1
    }

    /// Entries in first-seen order.
    fn into_entries(self) -> Vec<(&'a str, A)> {
        self.entries
    }
}

impl<'a> Tally<'a> {
    fn add(&mut self, key: &'a str) {
        *self.entry(key) += 1;
    }

    /// Descending by count; the stable sort keeps first-seen order on ties.
    fn ranked(self) -> Vec<(&'a str, usize)> {
        let mut counts = self.into_entries();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

// ---------------------------------------------------------------------------
// Aggregators
// ---------------------------------------------------------------------------

/// Record count per publication year, ascending by year.
pub fn publications_by_year<'a>(
    records: impl IntoIterator<Item = &'a PublicationRecord>,
) -> Vec<YearCount> {
    year_counts(records)
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

/// Record count per category, descending by count.
pub fn category_distribution<'a>(
    records: impl IntoIterator<Item = &'a PublicationRecord>,
) -> Vec<CategoryCount<'a>> {
    let mut tally = Tally::default();
    for r in records {
        tally.add(&r.category);
    }
    tally
        .ranked()
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect()
}

/// Average, total and count of citations per category, descending by average.
pub fn citation_impact<'a>(
    records: impl IntoIterator<Item = &'a PublicationRecord>,
) -> Vec<CitationImpact<'a>> {
    let mut sums: Accumulator<'a, (u64, usize)> = Accumulator::default();
    for r in records {
        let (total, count) = sums.entry(&r.category);
        *total += u64::from(r.citations);
        *count += 1;
    }

    let mut rows: Vec<(u64, CitationImpact<'a>)> = sums
        .into_entries()
        .into_iter()
        .map(|(category, (total, count))| {
            let tenths = round_half_up_tenths(total, count as u64);
            let row = CitationImpact {
                category,
                average_citations: tenths as f64 / 10.0,
                total_citations: total,
                study_count: count,
            };
            (tenths, row)
        })
        .collect();
    rows.sort_by(|a, b| b.0.cmp(&a.0));
    rows.into_iter().map(|(_, row)| row).collect()
}

/// The `limit` most-cited records, descending. Ties keep input order.
pub fn top_cited<'a>(
    records: impl IntoIterator<Item = &'a PublicationRecord>,
    limit: usize,
) -> Vec<&'a PublicationRecord> {
    let mut ranked: Vec<&PublicationRecord> = records.into_iter().collect();
    ranked.sort_by(|a, b| b.citations.cmp(&a.citations));
    ranked.truncate(limit);
    ranked
}

pub fn top_institutions<'a>(
    records: impl IntoIterator<Item = &'a PublicationRecord>,
    limit: usize,
) -> Vec<InstitutionCount<'a>> {
    let mut tally = Tally::default();
    for r in records {
        tally.add(&r.institution);
    }
    tally
        .ranked()
        .into_iter()
        .take(limit)
        .map(|(name, count)| InstitutionCount { name, count })
        .collect()
}

pub fn top_keywords<'a>(
    records: impl IntoIterator<Item = &'a PublicationRecord>,
    limit: usize,
) -> Vec<KeywordCount<'a>> {
    keyword_tally(records)
        .ranked()
        .into_iter()
        .take(limit)
        .map(|(keyword, count)| KeywordCount { keyword, count })
        .collect()
}

/// Every keyword with its frequency, descending. Not truncated.
pub fn keyword_cloud<'a>(
    records: impl IntoIterator<Item = &'a PublicationRecord>,
) -> Vec<CloudWord<'a>> {
    keyword_tally(records)
        .ranked()
        .into_iter()
        .map(|(text, value)| CloudWord { text, value })
        .collect()
}

/// Author/institution graph.
///
/// Institution nodes are created first, then author nodes; a node's id
/// suffix is its position in the node list. Each (author, study) pair adds an
/// author→institution link and bumps both node values. Co-author pairs share
/// a single undirected link whose weight counts the studies they share.
pub fn collaboration_network<'a>(
    records: impl IntoIterator<Item = &'a PublicationRecord>,
) -> CollaborationNetwork<'a> {
    let records: Vec<&PublicationRecord> = records.into_iter().collect();

    let mut nodes: Vec<NetworkNode<'a>> = Vec::new();
    let mut institutions: HashMap<&str, usize> = HashMap::new();
    for &r in &records {
        institutions.entry(r.institution.as_str()).or_insert_with(|| {
            nodes.push(NetworkNode {
                id: format!("inst-{}", nodes.len()),
                name: r.institution.as_str(),
                kind: NodeKind::Institution,
                value: 1,
            });
            nodes.len() - 1
        });
    }

    // (source, target, weight) as node indices.
    let mut links: Vec<(usize, usize, usize)> = Vec::new();
    let mut authors: HashMap<&str, usize> = HashMap::new();
    for &r in &records {
        let inst = institutions[r.institution.as_str()];
        for author in &r.authors {
            let a = *authors.entry(author.as_str()).or_insert_with(|| {
                nodes.push(NetworkNode {
                    id: format!("auth-{}", nodes.len()),
                    name: author.as_str(),
                    kind: NodeKind::Author,
                    value: 1,
                });
                nodes.len() - 1
            });
            links.push((a, inst, 1));
            nodes[a].value += 1;
            nodes[inst].value += 1;
        }
    }

    let mut pairs: HashMap<(usize, usize), usize> = HashMap::new();
    for &r in &records {
        for (i, first) in r.authors.iter().enumerate() {
            for second in &r.authors[i + 1..] {
                let a = authors[first.as_str()];
                let b = authors[second.as_str()];
                match pairs.get(&(a.min(b), a.max(b))) {
                    Some(&link) => links[link].2 += 1,
                    None => {
                        pairs.insert((a.min(b), a.max(b)), links.len());
                        links.push((a, b, 1));
                    }
                }
            }
        }
    }

    let links = links
        .into_iter()
        .map(|(s, t, value)| NetworkLink {
            source: nodes[s].id.clone(),
            target: nodes[t].id.clone(),
            value,
        })
        .collect();

    CollaborationNetwork { nodes, links }
}

/// Everything the overview dashboard needs in one pass over the input.
pub fn stats_overview<'a>(
    records: impl IntoIterator<Item = &'a PublicationRecord>,
) -> StatsOverview<'a> {
    let records: Vec<&PublicationRecord> = records.into_iter().collect();

    let mut categories = Tally::default();
    for &r in &records {
        categories.add(&r.category);
    }

    StatsOverview {
        total_studies: records.len(),
        publications_by_year: year_counts(records.iter().copied()),
        top_cited_studies: top_cited(records.iter().copied(), TOP_CITED_LIMIT)
            .into_iter()
            .map(|r| CitedStudy {
                id: &r.id,
                title: &r.title,
                authors: &r.authors,
                citations: r.citations,
            })
            .collect(),
        category_distribution: categories.into_entries(),
        top_institutions: top_institutions(records.iter().copied(), TOP_INSTITUTIONS_LIMIT),
        top_keywords: top_keywords(records.iter().copied(), TOP_KEYWORDS_LIMIT),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn year_counts<'a>(records: impl IntoIterator<Item = &'a PublicationRecord>) -> BTreeMap<i32, usize> {
    let mut years = BTreeMap::new();
    for r in records {
        *years.entry(r.year()).or_insert(0) += 1;
    }
    years
}

fn as_map<S: Serializer>(entries: &[(&str, usize)], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(entries.iter().map(|(k, v)| (k, v)))
}

fn keyword_tally<'a>(records: impl IntoIterator<Item = &'a PublicationRecord>) -> Tally<'a> {
    let mut tally = Tally::default();
    for r in records {
        for k in &r.keywords {
            tally.add(k);
        }
    }
    tally
}

/// `total / count` in tenths, rounded half up. Integer-only, so `3.25`
/// style midpoints never drift through float error.
fn round_half_up_tenths(total: u64, count: u64) -> u64 {
    if count == 0 {
        return 0;
    }
    (20 * total + count) / (2 * count)
}
