//! Log controller: connects routes to the log service.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

use crate::api::dto::log_dto::{LogFileContentResponse, LogFileListResponse};
use crate::api::view::log_view;
use crate::app_state::AppState;
use crate::core::persistence::logs::log_access_error::LogAccessError;
use crate::errors::status_code;

pub struct LogController;

impl LogController {
    /// Rendered index of the available log files.
    pub async fn index(State(state): State<AppState>) -> Response {
        match state.log_service.list_log_files().await {
            Ok(files) => Html(log_view::render_index(&files)).into_response(),
            // The index answers enumeration failures with the structured JSON
            // body, same as the API listing.
            Err(err) => err.into_response(),
        }
    }

    /// Rendered view of one file's content.
    pub async fn view_log_file(
        State(state): State<AppState>,
        Path(filename): Path<String>,
    ) -> Response {
        match state.log_service.fetch_log_file(&filename).await {
            Ok(content) => Html(log_view::render_log_page(&content)).into_response(),
            Err(err) => {
                (status_code(&err), Html(log_view::render_error_page(&err))).into_response()
            }
        }
    }

    /// JSON listing of the available log files.
    pub async fn list_files(
        State(state): State<AppState>,
    ) -> Result<Json<LogFileListResponse>, LogAccessError> {
        let files = state.log_service.list_log_files().await?;
        Ok(Json(LogFileListResponse::new(files)))
    }

    /// JSON fetch of one file's content.
    pub async fn fetch_log_file(
        State(state): State<AppState>,
        Path(filename): Path<String>,
    ) -> Result<Json<LogFileContentResponse>, LogAccessError> {
        let content = state.log_service.fetch_log_file(&filename).await?;
        Ok(Json(content.into()))
    }
}
