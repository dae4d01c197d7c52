//! Application configuration, stored as RON.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use forum_logging::{forum_info, forum_warn};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILENAME: &str = "forum_reader.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid site url {0:?}")]
    SiteUrl(String),
}

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogDestination {
    /// Write to the configured log file.
    #[default]
    File,
    /// Write to the terminal (stderr for warnings and errors).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Forum origin that in-app paths are opened against.
    pub site_url: String,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
    pub log_level: String,
    pub max_spans_per_comment: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site_url: "https://www.v2ex.com".to_string(),
            log_destination: LogDestination::File,
            log_file: PathBuf::from("./forum_reader.log"),
            log_level: "info".to_string(),
            max_spans_per_comment: 5_000,
        }
    }
}

impl AppConfig {
    /// Loads the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                forum_info!("No config at {:?}; using defaults", path);
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Self = ron::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        config.site()?;
        Ok(config)
    }

    /// Parsed [`AppConfig::site_url`].
    pub fn site(&self) -> Result<url::Url, ConfigError> {
        url::Url::parse(&self.site_url).map_err(|_| ConfigError::SiteUrl(self.site_url.clone()))
    }

    /// Configured level, falling back to `Info` for unknown names.
    pub fn level(&self) -> LevelFilter {
        forum_logging::parse_level(&self.log_level).unwrap_or_else(|| {
            forum_warn!("Unknown log level {:?}; using info", self.log_level);
            LevelFilter::Info
        })
    }
}
