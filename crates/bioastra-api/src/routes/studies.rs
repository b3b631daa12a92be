//! `/studies` endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use bioastra_core::aggregate::{self, StatsOverview};
use bioastra_core::query::{self, Pagination, SortKey, SortOrder, StudyListCriteria};
use bioastra_core::PublicationRecord;

use crate::extract::{LenientQuery, PathSegment};
use crate::{ApiError, AppState};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub category: Option<String>,
    pub year: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StudyListResponse<'a> {
    success: bool,
    total_studies: usize,
    total_pages: usize,
    current_page: usize,
    studies: Vec<&'a PublicationRecord>,
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    LenientQuery(params): LenientQuery<StudyListParams>,
) -> Result<Response, ApiError> {
    let records = state.source.all()?;
    let pagination = Pagination::from_params(
        params.page.as_deref(),
        params.limit.as_deref(),
        state.query.studies_default_limit,
        state.query.max_limit,
    );
    let criteria = StudyListCriteria {
        category: params.category,
        year: params.year,
        author: params.author,
        sort_by: params.sort_by.as_deref().map(SortKey::parse).unwrap_or_default(),
        sort_order: params.sort_order.as_deref().map(SortOrder::parse).unwrap_or_default(),
    };

    let page = query::list_studies(&records, &criteria, pagination);
    Ok(Json(StudyListResponse {
        success: true,
        total_studies: page.total_count,
        total_pages: page.total_pages,
        current_page: page.page,
        studies: page.results,
    })
    .into_response())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StudyDetailResponse<'a> {
    success: bool,
    study: &'a PublicationRecord,
    related_studies: Vec<&'a PublicationRecord>,
}

pub async fn detail(
    State(state): State<Arc<AppState>>,
    PathSegment(id): PathSegment,
) -> Result<Response, ApiError> {
    let Some(id) = id else {
        return Err(ApiError::NotFound("Study not found"));
    };
    let records = state.source.all()?;
    let found = query::find_study(&records, &id, state.query.related_limit)?;
    Ok(Json(StudyDetailResponse {
        success: true,
        study: found.study,
        related_studies: found.related,
    })
    .into_response())
}

#[derive(Debug, Serialize)]
struct StatsResponse<'a> {
    success: bool,
    stats: StatsOverview<'a>,
}

pub async fn stats_overview(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let records = state.source.all()?;
    Ok(Json(StatsResponse {
        success: true,
        stats: aggregate::stats_overview(records.iter()),
    })
    .into_response())
}
