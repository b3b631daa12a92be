//! Domain-specific assertion macros for bioastra harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that name the
//! records involved, not just the positions.

// ---------------------------------------------------------------------------
// Result set assertions
// ---------------------------------------------------------------------------

/// Assert that a result set holds exactly these ids, in this order.
///
/// ```rust
/// assert_ids!(page.results, ["NASA-SB-2021-15", "NASA-SB-2021-03"]);
/// ```
#[macro_export]
macro_rules! assert_ids {
    ($results:expr, [$($id:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $results.iter().map(|r| r.id.as_str()).collect();
        let expected: Vec<&str> = vec![$($id),*];
        pretty_assertions::assert_eq!(actual, expected, "result ids differ");
    }};
}

/// Assert that every record in a result set satisfies a predicate.
///
/// ```rust
/// assert_results_all!(page.results, |r| r.category == "Neuroscience");
/// ```
#[macro_export]
macro_rules! assert_results_all {
    ($results:expr, |$r:ident| $pred:expr) => {{
        let mut failing: Vec<&str> = Vec::new();
        for $r in $results.iter() {
            if !$pred {
                failing.push($r.id.as_str());
            }
        }
        if !failing.is_empty() {
            panic!(
                "assert_results_all! failed: {} of {} records did not satisfy predicate: {:?}",
                failing.len(),
                $results.len(),
                failing
            );
        }
    }};
}

/// Assert that consecutive records are ordered by a key (non-increasing for
/// `desc`, non-decreasing for `asc`).
///
/// ```rust
/// assert_sorted_by!(page.results, |r| r.citations, desc);
/// ```
#[macro_export]
macro_rules! assert_sorted_by {
    (@check $results:expr, $r:ident, $key:expr, $op:tt, $label:expr) => {{
        for pair in $results.windows(2) {
            let a = {
                let $r = &pair[0];
                $key
            };
            let b = {
                let $r = &pair[1];
                $key
            };
            if !(a $op b) {
                panic!(
                    "assert_sorted_by! failed: {} and {} are not {}",
                    pair[0].id, pair[1].id, $label
                );
            }
        }
    }};
    ($results:expr, |$r:ident| $key:expr, desc) => {
        $crate::assert_sorted_by!(@check $results, $r, $key, >=, "descending")
    };
    ($results:expr, |$r:ident| $key:expr, asc) => {
        $crate::assert_sorted_by!(@check $results, $r, $key, <=, "ascending")
    };
}

// ---------------------------------------------------------------------------
// HTTP envelope assertions
// ---------------------------------------------------------------------------

/// Assert a 200 response whose body carries `"success": true`.
#[macro_export]
macro_rules! assert_success {
    ($status:expr, $body:expr) => {{
        let body: &serde_json::Value = &$body;
        pretty_assertions::assert_eq!($status, axum::http::StatusCode::OK, "body: {}", body);
        pretty_assertions::assert_eq!(body["success"], serde_json::json!(true), "body: {}", body);
    }};
}

/// Assert an error envelope with the given status and message.
#[macro_export]
macro_rules! assert_failure {
    ($status:expr, $body:expr, $expected_status:expr, $message:expr) => {{
        let body: &serde_json::Value = &$body;
        pretty_assertions::assert_eq!($status, $expected_status, "body: {}", body);
        pretty_assertions::assert_eq!(
            body,
            &serde_json::json!({ "success": false, "error": $message })
        );
    }};
}
