//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the admin page routes and the static asset directory under a
//! single Axum router. The host mounts each page view at its own path; the
//! views expose no parameters, events, or callbacks back to the host.

pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Admin UI routes: one route per page view plus liveness and assets.
pub fn app(config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(pages::dashboard))
        .route("/orders", get(pages::orders))
        .route("/products", get(pages::products))
        .route("/healthz", get(healthz))
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
