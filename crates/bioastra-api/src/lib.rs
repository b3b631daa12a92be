//! bioastra-api: the axum HTTP surface.
//!
//! All routes are read-only `GET`s nested under `/api/v1`, plus a health
//! check at `/`.

pub mod error;
pub mod extract;
pub mod routes;

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use bioastra_core::config::{Config, QueryConfig};
use bioastra_core::RecordSource;

pub use error::ApiError;

/// Shared application state
pub struct AppState {
    pub source: Arc<dyn RecordSource>,
    pub query: QueryConfig,
    pub cors_origin: String,
}

impl AppState {
    pub fn new(source: Arc<dyn RecordSource>, config: &Config) -> Self {
        Self {
            source,
            query: config.query.clone(),
            cors_origin: config.server.cors_origin.clone(),
        }
    }
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        // Search
        .route("/search", get(routes::search::search))
        .route("/search/filters", get(routes::search::filters))
        .route("/search/autocomplete", get(routes::search::autocomplete))
        // Studies
        .route("/studies", get(routes::studies::list))
        .route("/studies/stats/overview", get(routes::studies::stats_overview))
        .route("/studies/{id}", get(routes::studies::detail))
        // Visualizations
        .route(
            "/visualizations/publication-trends",
            get(routes::visualizations::publication_trends),
        )
        .route(
            "/visualizations/category-distribution",
            get(routes::visualizations::category_distribution),
        )
        .route(
            "/visualizations/citation-impact",
            get(routes::visualizations::citation_impact),
        )
        .route(
            "/visualizations/collaboration-network",
            get(routes::visualizations::collaboration_network),
        )
        .route(
            "/visualizations/keyword-cloud",
            get(routes::visualizations::keyword_cloud),
        )
        // Insights
        .route("/insights/trends", get(routes::insights::trends))
        .route("/insights/gaps", get(routes::insights::gaps))
        .route("/insights/summary", get(routes::insights::summary))
        // Resources
        .route("/resources", get(routes::resources::list))
        .route("/resources/category/{category}", get(routes::resources::by_category))
        .route("/resources/{id}", get(routes::resources::by_id))
        // Dashboard
        .route("/dashboard", get(routes::dashboard::dashboard))
        .route("/dashboard/metrics", get(routes::dashboard::metrics))
        .route("/dashboard/topics", get(routes::dashboard::topics))
        // Home
        .route("/home", get(routes::home::home));

    let cors = cors_layer(&state.cors_origin);

    Router::new()
        .route("/", get(routes::health))
        .nest("/api/v1", api)
        // Middleware
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);
    if origin == "*" {
        return layer.allow_origin(Any);
    }
    match HeaderValue::from_str(origin) {
        Ok(value) => layer.allow_origin(value),
        Err(e) => {
            tracing::warn!(origin, error = %e, "invalid CORS origin, cross-origin requests disabled");
            layer
        }
    }
}

/// Start the server
pub async fn serve(addr: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("bioastra listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
