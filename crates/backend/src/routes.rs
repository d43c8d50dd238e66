use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::options::CollectionRegistry;
use crate::system::middleware::request_logger::request_logger;

/// Shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub registry: Arc<CollectionRegistry>,
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    use axum::http::{header, Method};

    // Read-only API: only GET crosses origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/options/:collection", get(handlers::options::list))
        .fallback_service(ServeDir::new("dist"))
        .with_state(state)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
