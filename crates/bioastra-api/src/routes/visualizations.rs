//! `/visualizations` endpoints. Each one aggregates over the records left
//! after the optional category, date range and keyword filters.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use bioastra_core::aggregate;
use bioastra_core::{Filter, Predicate};

use super::DataEnvelope;
use crate::extract::LenientQuery;
use crate::{ApiError, AppState};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationParams {
    pub category: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Comma-separated; a record matches if it carries any of them.
    pub keywords: Option<String>,
}

impl VisualizationParams {
    pub fn filter(&self) -> Filter {
        Filter::new()
            .with(self.category.as_deref().and_then(Predicate::category))
            .with(self.start_date.as_deref().and_then(Predicate::published_from))
            .with(self.end_date.as_deref().and_then(Predicate::published_until))
            .with(
                self.keywords
                    .as_deref()
                    .and_then(|raw| Predicate::keywords_any(raw.split(','))),
            )
    }
}

pub async fn publication_trends(
    State(state): State<Arc<AppState>>,
    LenientQuery(params): LenientQuery<VisualizationParams>,
) -> Result<Response, ApiError> {
    let records = state.source.all()?;
    let subset = params.filter().apply(&records);
    Ok(DataEnvelope::ok(aggregate::publications_by_year(subset)).into_response())
}

pub async fn category_distribution(
    State(state): State<Arc<AppState>>,
    LenientQuery(params): LenientQuery<VisualizationParams>,
) -> Result<Response, ApiError> {
    let records = state.source.all()?;
    let subset = params.filter().apply(&records);
    Ok(DataEnvelope::ok(aggregate::category_distribution(subset)).into_response())
}

pub async fn citation_impact(
    State(state): State<Arc<AppState>>,
    LenientQuery(params): LenientQuery<VisualizationParams>,
) -> Result<Response, ApiError> {
    let records = state.source.all()?;
    let subset = params.filter().apply(&records);
    Ok(DataEnvelope::ok(aggregate::citation_impact(subset)).into_response())
}

pub async fn collaboration_network(
    State(state): State<Arc<AppState>>,
    LenientQuery(params): LenientQuery<VisualizationParams>,
) -> Result<Response, ApiError> {
    let records = state.source.all()?;
    let subset = params.filter().apply(&records);
    Ok(DataEnvelope::ok(aggregate::collaboration_network(subset)).into_response())
}

pub async fn keyword_cloud(
    State(state): State<Arc<AppState>>,
    LenientQuery(params): LenientQuery<VisualizationParams>,
) -> Result<Response, ApiError> {
    let records = state.source.all()?;
    let subset = params.filter().apply(&records);
    Ok(DataEnvelope::ok(aggregate::keyword_cloud(subset)).into_response())
}
