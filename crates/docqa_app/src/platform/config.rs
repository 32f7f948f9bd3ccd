use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use docqa_engine::ClientSettings;
use docqa_logging::LogDestination;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) const DEFAULT_CONFIG_FILE: &str = "docqa.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub base_url: String,
    pub upload_path: String,
    pub ask_path: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: Option<u64>,
    pub notification_ms: u64,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            base_url: client.base_url,
            upload_path: client.upload_path,
            ask_path: client.ask_path,
            connect_timeout_secs: client.connect_timeout.as_secs(),
            request_timeout_secs: client.request_timeout.map(|timeout| timeout.as_secs()),
            notification_ms: 3000,
            log_destination: LogDestination::File,
        }
    }
}

impl AppConfig {
    pub(crate) fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.base_url.clone(),
            upload_path: self.upload_path.clone(),
            ask_path: self.ask_path.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }

    pub(crate) fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Reads the config file. A missing file is `Ok(None)`.
pub(crate) fn read_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(ron::from_str(&content)?))
}
