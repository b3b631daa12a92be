//! Extractors that never reject a request.
//!
//! axum's stock `Query` and `Path` answer undecodable input with a plain-text
//! 400. Every parameter here is optional and textual, so these degrade
//! instead: repeated query keys keep their first value, and anything that
//! still fails to deserialize falls back to `T::default()`.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use axum::http::Uri;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Query string parameters, first value per key.
#[derive(Debug, Clone, Default)]
pub struct LenientQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for LenientQuery<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(first_values(&parts.uri)))
    }
}

fn first_values<T: DeserializeOwned + Default>(uri: &Uri) -> T {
    let pairs = match Query::<Vec<(String, String)>>::try_from_uri(uri) {
        Ok(Query(pairs)) => pairs,
        Err(e) => {
            tracing::debug!(error = %e, "unreadable query string, using defaults");
            return T::default();
        }
    };

    let mut fields = Map::new();
    for (key, value) in pairs {
        if fields.contains_key(&key) {
            tracing::debug!(%key, "repeated query parameter, keeping the first value");
            continue;
        }
        fields.insert(key, Value::String(value));
    }

    serde_json::from_value(Value::Object(fields)).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "query parameters did not fit, using defaults");
        T::default()
    })
}

/// A single path segment, or `None` when it is not valid UTF-8 once
/// percent-decoded.
#[derive(Debug, Clone)]
pub struct PathSegment(pub Option<String>);

impl<S> FromRequestParts<S> for PathSegment
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(segment)) => Ok(Self(Some(segment))),
            Err(e) => {
                tracing::debug!(error = %e, path = %parts.uri.path(), "undecodable path segment");
                Ok(Self(None))
            }
        }
    }
}
