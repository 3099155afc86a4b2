//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use comparison::{PipelineConfig, TextGenerator};

use crate::server::routes::{
    compare_handler, download_handler, generate_handler, health_handler, index_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub pipeline_config: PipelineConfig,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>, pipeline_config: PipelineConfig) -> Self {
        Self {
            generator,
            pipeline_config,
        }
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    // CORS configuration - allow any origin, the forms are public
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(index_handler))
        .route("/compare", post(compare_handler))
        .route("/download", post(download_handler))
        .route("/generate", post(generate_handler))
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
