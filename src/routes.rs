use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;

use crate::api::controller::log::LogController;
use crate::api::view::log_view;
use crate::app_state::AppState;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    Router::new()
        // Rendered pages
        .route("/", get(LogController::index))
        .route("/logs/{filename}", get(LogController::view_log_file))
        // Health check
        .route("/health", get(health_check))
        // JSON API
        .nest("/api", crate::api::routes::log_routes::log_routes())
        // Fallback handler for 404
        .fallback(handler_404)
        .layer(CorsLayer::very_permissive())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html(log_view::render_not_found_page()),
    )
}
