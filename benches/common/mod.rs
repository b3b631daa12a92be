//! Synthetic corpora shared by the bench suites.

use bioastra_core::PublicationRecord;
use chrono::NaiveDate;
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::{Sentence, Words};
use fake::faker::name::en::Name;
use fake::Fake;

const CATEGORIES: &[&str] = &[
    "Cell Biology",
    "Human Physiology",
    "Microbiology",
    "Radiation Biology",
    "Space Agriculture",
    "Neuroscience",
    "Life Support Systems",
];

/// `n` records with fake text. A small pool of institutions and authors keeps
/// the collaboration network dense, as it is in real publication data.
pub fn corpus(n: usize) -> Vec<PublicationRecord> {
    let institutions: Vec<String> = (0..25).map(|_| CompanyName().fake()).collect();
    let authors: Vec<String> = (0..400).map(|_| Name().fake()).collect();

    (0..n)
        .map(|i| {
            let mut keywords: Vec<String> = Words(2..5).fake();
            if i % 4 == 0 {
                keywords.push("microgravity".to_string());
            }
            PublicationRecord {
                id: format!("BENCH-{i:07}"),
                title: Sentence(4..10).fake(),
                r#abstract: Sentence(20..40).fake(),
                authors: (0..4).map(|k| authors[(i * 7 + k * 13) % authors.len()].clone()).collect(),
                institution: institutions[i % institutions.len()].clone(),
                published_date: NaiveDate::from_ymd_opt(2010 + (i % 15) as i32, 1 + (i % 12) as u32, 1 + (i % 28) as u32)
                    .expect("day 1..=28 is valid in every month"),
                category: CATEGORIES[i % CATEGORIES.len()].to_string(),
                keywords,
                citations: (i * 31 % 211) as u32,
                doi: format!("10.9999/bench.{i}"),
            }
        })
        .collect()
}
