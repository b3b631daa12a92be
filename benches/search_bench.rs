//! Search pipeline benchmarks.
//!
//! Every request rescans the whole store, so these track how the filter
//! pipeline, the sort-and-paginate step and autocomplete scale with the
//! number of records.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `search` | Text-only, structured-only and combined criteria on a 10k store |
//! | `list` | Filter + stable sort + paginate for each sort key |
//! | `suggest` | Autocomplete per kind |
//! | `scaling` | Combined search as the store grows from 1k to 100k |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench search_bench
//! open target/criterion/report/index.html
//! ```

mod common;

use std::hint::black_box;

use bioastra_core::query::{
    list_studies, search, Pagination, SearchCriteria, SortKey, SortOrder, StudyListCriteria,
};
use bioastra_core::suggest::{suggest, SuggestKind};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn combined_criteria() -> SearchCriteria {
    SearchCriteria {
        query: Some("microgravity".into()),
        category: Some("Human Physiology".into()),
        start_date: Some("2012-01-01".into()),
        end_date: Some("2020-12-31".into()),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

fn search_bench(c: &mut Criterion) {
    let records = common::corpus(10_000);
    let mut group = c.benchmark_group("search");
    group.throughput(Throughput::Elements(records.len() as u64));

    let cases = [
        (
            "text_two_terms",
            SearchCriteria {
                query: Some("microgravity lorem".into()),
                ..Default::default()
            },
        ),
        (
            "category_and_dates",
            SearchCriteria {
                category: Some("Neuroscience".into()),
                start_date: Some("2015-01-01".into()),
                ..Default::default()
            },
        ),
        ("combined", combined_criteria()),
    ];

    for (name, criteria) in cases {
        group.bench_function(name, |b| {
            b.iter(|| {
                let page = search(black_box(&records), &criteria, Pagination::new(1, 20));
                black_box(page.total_count)
            })
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Study listing
// ---------------------------------------------------------------------------

fn list_bench(c: &mut Criterion) {
    let records = common::corpus(10_000);
    let mut group = c.benchmark_group("list");

    for (name, key) in [
        ("published_date", SortKey::PublishedDate),
        ("citations", SortKey::Citations),
        ("title", SortKey::Title),
    ] {
        let criteria = StudyListCriteria {
            sort_by: key,
            sort_order: SortOrder::Desc,
            ..Default::default()
        };
        group.bench_function(name, |b| {
            b.iter(|| {
                let page = list_studies(black_box(&records), &criteria, Pagination::new(3, 10));
                black_box(page.results.len())
            })
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Autocomplete
// ---------------------------------------------------------------------------

fn suggest_bench(c: &mut Criterion) {
    let records = common::corpus(10_000);
    let mut group = c.benchmark_group("suggest");

    for (name, kind) in [
        ("title", SuggestKind::Title),
        ("author", SuggestKind::Author),
        ("keyword", SuggestKind::Keyword),
        ("all", SuggestKind::All),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| black_box(suggest(black_box(&records), "mi", kind, 10).len()))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Scaling: store size axis
// ---------------------------------------------------------------------------

fn scaling_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");
    let criteria = combined_criteria();

    for store_size in [1_000usize, 10_000, 100_000] {
        let records = common::corpus(store_size);
        group.throughput(Throughput::Elements(store_size as u64));
        group.bench_with_input(
            BenchmarkId::new("combined_search", store_size),
            &records,
            |b, records| {
                b.iter(|| black_box(search(records, &criteria, Pagination::new(1, 20)).total_count))
            },
        );
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion registration
// ---------------------------------------------------------------------------

criterion_group!(search_benches, search_bench, list_bench, suggest_bench, scaling_bench);
criterion_main!(search_benches);
