//! JSON API routes (/api/*)

use axum::{routing::get, Router};

use crate::api::controller::log::LogController;
use crate::app_state::AppState;

pub fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/files", get(LogController::list_files))
        .route("/logs/{filename}", get(LogController::fetch_log_file))
}
