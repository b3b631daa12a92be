//! `/insights` endpoints.

use axum::Json;
use serde::Deserialize;

use bioastra_core::insights::{self, ResearchGap, Summary, SummaryRequest, TrendingTopic};

use super::DataEnvelope;
use crate::extract::LenientQuery;

pub async fn trends() -> Json<DataEnvelope<&'static [TrendingTopic]>> {
    DataEnvelope::ok(insights::trending_topics())
}

#[derive(Debug, Default, Deserialize)]
pub struct GapParams {
    pub area: Option<String>,
}

pub async fn gaps(
    LenientQuery(params): LenientQuery<GapParams>,
) -> Json<DataEnvelope<Vec<&'static ResearchGap>>> {
    DataEnvelope::ok(insights::research_gaps(params.area.as_deref()))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryParams {
    pub study_id: Option<String>,
    pub keywords: Option<String>,
    pub topic: Option<String>,
}

pub async fn summary(
    LenientQuery(params): LenientQuery<SummaryParams>,
) -> Json<DataEnvelope<Summary>> {
    let request = SummaryRequest::from_params(
        params.study_id.as_deref(),
        params.keywords.as_deref(),
        params.topic.as_deref(),
    );
    DataEnvelope::ok(insights::summarize(&request))
}
