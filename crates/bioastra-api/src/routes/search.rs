//! `/search` endpoints: paged search, facet catalogue, autocomplete.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use bioastra_core::facets::{self, FilterOptions};
use bioastra_core::query::{self, Pagination, SearchCriteria};
use bioastra_core::suggest::{self, SuggestKind};
use bioastra_core::PublicationRecord;

use crate::extract::LenientQuery;
use crate::{ApiError, AppState};

/// Raw query string. Everything stays textual so bad values degrade to
/// defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub query: Option<String>,
    pub category: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub author: Option<String>,
    pub institution: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse<'a> {
    success: bool,
    count: usize,
    page: usize,
    total_pages: usize,
    data: Vec<&'a PublicationRecord>,
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    LenientQuery(params): LenientQuery<SearchParams>,
) -> Result<Response, ApiError> {
    let records = state.source.all()?;
    let pagination = Pagination::from_params(
        params.page.as_deref(),
        params.limit.as_deref(),
        state.query.search_default_limit,
        state.query.max_limit,
    );
    let criteria = SearchCriteria {
        query: params.query,
        category: params.category,
        start_date: params.start_date,
        end_date: params.end_date,
        author: params.author,
        institution: params.institution,
    };

    let page = query::search(&records, &criteria, pagination);
    Ok(Json(SearchResponse {
        success: true,
        count: page.total_count,
        page: page.page,
        total_pages: page.total_pages,
        data: page.results,
    })
    .into_response())
}

#[derive(Debug, Serialize)]
struct FiltersResponse<'a> {
    success: bool,
    filters: FilterOptions<'a>,
}

pub async fn filters(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let records = state.source.all()?;
    Ok(Json(FiltersResponse {
        success: true,
        filters: facets::filter_options(&records),
    })
    .into_response())
}

#[derive(Debug, Default, Deserialize)]
pub struct AutocompleteParams {
    pub term: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize)]
struct AutocompleteResponse<'a> {
    success: bool,
    suggestions: Vec<&'a str>,
}

pub async fn autocomplete(
    State(state): State<Arc<AppState>>,
    LenientQuery(params): LenientQuery<AutocompleteParams>,
) -> Result<Response, ApiError> {
    let records = state.source.all()?;
    let kind = params.kind.as_deref().map(SuggestKind::parse).unwrap_or_default();
    let term = params.term.unwrap_or_default();

    Ok(Json(AutocompleteResponse {
        success: true,
        suggestions: suggest::suggest(&records, &term, kind, state.query.suggestion_limit),
    })
    .into_response())
}
