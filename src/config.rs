//! Process configuration, read once at startup.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_LOGS_DIR: &str = "./logs";

/// All configuration the service needs. The logs directory is injected into
/// the repository at construction; nothing else holds process-wide state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub logs_dir: PathBuf,
}

impl AppConfig {
    /// Read `RUSTLOG_PORT` and `RUSTLOG_LOGS_DIR` from the environment.
    /// A malformed port is a startup error rather than a silent fallback.
    pub fn from_env() -> Result<Self> {
        let port = match env::var("RUSTLOG_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("RUSTLOG_PORT is not a valid port: {raw:?}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let logs_dir = env::var("RUSTLOG_LOGS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOGS_DIR));

        Ok(Self { port, logs_dir })
    }
}
