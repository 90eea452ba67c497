//! HTTP mapping for the log store's error kinds. The status code and the
//! structured JSON failure body are produced here and nowhere else; the HTML
//! error pages map from the same kinds in the view layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::dto::log_dto::LogErrorBody;
use crate::core::persistence::logs::log_access_error::LogAccessError;

/// Choose status codes per kind
pub fn status_code(err: &LogAccessError) -> StatusCode {
    match err {
        LogAccessError::InvalidFileType { .. }
        | LogAccessError::InvalidFileName { .. }
        | LogAccessError::IsDirectory { .. } => StatusCode::BAD_REQUEST,
        LogAccessError::NotFound { .. } => StatusCode::NOT_FOUND,
        LogAccessError::PermissionDenied { .. } => StatusCode::FORBIDDEN,
        LogAccessError::Read { .. } | LogAccessError::DirectoryList { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for LogAccessError {
    fn into_response(self) -> Response {
        let status = status_code(&self);
        (status, Json(LogErrorBody::from(&self))).into_response()
    }
}
