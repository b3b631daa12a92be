//! Fixture data and sources used across harnesses.
//!
//! The embedded 15-record sample is the main fixture. Its headline facts are
//! pinned here as constants so harnesses don't repeat magic numbers.

use std::borrow::Cow;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use bioastra_api::{create_router, AppState};
use bioastra_core::{Config, CoreError, PublicationRecord, RecordSource, StaticStore};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const SAMPLE_SIZE: usize = 15;
/// The most-cited sample record (42 citations).
pub const TOP_CITED_ID: &str = "NASA-SB-2021-15";
pub const SAMPLE_CATEGORY_COUNT: usize = 12;
pub const SAMPLE_INSTITUTION_COUNT: usize = 7;

pub fn sample_store() -> StaticStore {
    StaticStore::sample().expect("embedded sample must load")
}

pub fn sample_records() -> Vec<PublicationRecord> {
    sample_store()
        .all()
        .expect("static store never fails")
        .into_owned()
}

// ---------------------------------------------------------------------------
// Misbehaving sources
// ---------------------------------------------------------------------------

/// A source whose backing storage is gone.
pub struct FailingSource;

impl RecordSource for FailingSource {
    fn all(&self) -> bioastra_core::Result<Cow<'_, [PublicationRecord]>> {
        Err(CoreError::Unavailable("connection refused".into()))
    }
}

/// A source that panics mid-request.
pub struct PanickingSource;

impl RecordSource for PanickingSource {
    fn all(&self) -> bioastra_core::Result<Cow<'_, [PublicationRecord]>> {
        panic!("record source exploded")
    }
}

// ---------------------------------------------------------------------------
// HTTP helpers
// ---------------------------------------------------------------------------

pub fn router_with(source: impl RecordSource + 'static) -> Router {
    let state = AppState::new(Arc::new(source), &Config::defaults());
    create_router(Arc::new(state))
}

pub fn sample_router() -> Router {
    router_with(sample_store())
}

/// Issue a GET and decode the body as JSON.
pub async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("GET")
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    let json = serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("non-JSON body from {uri}: {e}: {bytes:?}"));
    (status, json)
}
