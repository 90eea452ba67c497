use std::sync::Arc;

use crate::config::AppConfig;
use crate::core::persistence::logs::log_repository::LogFileRepositoryImpl;
use crate::domain::log::service::LogService;

#[derive(Clone)]
pub struct AppState {
    pub log_service: Arc<LogService<LogFileRepositoryImpl>>,
}

pub fn build_app_state(config: &AppConfig) -> AppState {
    AppState {
        log_service: Arc::new(LogService::new(LogFileRepositoryImpl::new(
            config.logs_dir.clone(),
        ))),
    }
}
