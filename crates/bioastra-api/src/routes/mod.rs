//! HTTP endpoint handlers, one module per resource.

pub mod dashboard;
pub mod home;
pub mod insights;
pub mod resources;
pub mod search;
pub mod studies;
pub mod visualizations;

use axum::Json;
use serde::Serialize;

/// `{ "success": true, "data": ... }`
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self { success: true, data })
    }
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub message: &'static str,
}

pub async fn health() -> Json<Health> {
    Json(Health {
        message: "BIOAstra API running. Ready for launch.",
    })
}
