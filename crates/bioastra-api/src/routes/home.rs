//! `/home`: landing page content, returned bare like `/dashboard`.

use axum::Json;

use bioastra_core::home::{self, HomeData};

pub async fn home() -> Json<HomeData> {
    Json(home::home())
}
