//! `/resources` endpoints.

use axum::Json;
use serde::Serialize;

use bioastra_core::resources::{self, Resource};

use super::DataEnvelope;
use crate::extract::PathSegment;
use crate::ApiError;

#[derive(Debug, Serialize)]
pub struct ResourceList {
    pub success: bool,
    pub count: usize,
    pub data: Vec<&'static Resource>,
}

impl ResourceList {
    fn new(data: Vec<&'static Resource>) -> Json<Self> {
        Json(Self {
            success: true,
            count: data.len(),
            data,
        })
    }
}

pub async fn list() -> Json<ResourceList> {
    ResourceList::new(resources::all().iter().collect())
}

/// An undecodable category matches nothing.
pub async fn by_category(PathSegment(category): PathSegment) -> Json<ResourceList> {
    match category {
        Some(category) => ResourceList::new(resources::by_category(&category)),
        None => ResourceList::new(Vec::new()),
    }
}

pub async fn by_id(
    PathSegment(id): PathSegment,
) -> Result<Json<DataEnvelope<&'static Resource>>, ApiError> {
    id.as_deref()
        .and_then(resources::by_id)
        .map(DataEnvelope::ok)
        .ok_or(ApiError::NotFound("Resource not found"))
}
