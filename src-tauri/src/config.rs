//! Application Configuration
//!
//! Optional `taskboard.toml` in the app config directory. Every key has a
//! default, so a partial file is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use board_core::ProjectStatus;

pub const CONFIG_FILE_NAME: &str = "taskboard.toml";
/// Overrides the database location
pub const DB_ENV_VAR: &str = "TASKBOARD_DB";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub db_file_name: String,
    /// Log file stem and subscriber name
    pub log_name: String,
    /// Owner recorded on new projects
    pub owner: String,
    pub default_status: ProjectStatus,
    pub max_log_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_file_name: "taskboard.db".to_string(),
            log_name: "TaskBoard".to_string(),
            owner: "local".to_string(),
            default_status: ProjectStatus::InProgress,
            max_log_bytes: 1024 * 1024,
        }
    }
}

impl AppConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_from_dir(config_dir: &Path) -> Result<Self, ConfigError> {
        Self::load(&config_dir.join(CONFIG_FILE_NAME))
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Database path: `TASKBOARD_DB` if set, else `db_file_name` in `data_dir`
    pub fn db_path(&self, data_dir: &Path) -> PathBuf {
        self.db_path_with(data_dir, std::env::var_os(DB_ENV_VAR).map(PathBuf::from))
    }

    fn db_path_with(&self, data_dir: &Path, env_override: Option<PathBuf>) -> PathBuf {
        match env_override {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => data_dir.join(&self.db_file_name),
        }
    }

    pub fn logger_options(&self) -> rolling_logger::LoggerOptions {
        rolling_logger::LoggerOptions {
            max_bytes: self.max_log_bytes,
            ..Default::default()
        }
    }
}
