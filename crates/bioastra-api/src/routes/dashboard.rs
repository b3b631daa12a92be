//! `/dashboard` endpoints. These return the bare objects, without the
//! `success` envelope.

use axum::Json;

use bioastra_core::dashboard::{self, DashboardData, KeyMetrics, TopicDistribution};

pub async fn dashboard() -> Json<DashboardData> {
    Json(dashboard::dashboard())
}

pub async fn metrics() -> Json<KeyMetrics> {
    Json(dashboard::key_metrics())
}

pub async fn topics() -> Json<TopicDistribution> {
    Json(dashboard::topic_distribution())
}
