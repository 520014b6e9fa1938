//! Configuration types and parsing for placeprobe.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Database file probed when nothing else is configured
pub const DEFAULT_DATABASE_PATH: &str = "historic_places.db";

/// Maximum number of distinct values printed per section
pub const DEFAULT_LIMIT: u32 = 20;

/// File names searched for by [`Config::load_from_dir`], in order
pub const CONFIG_FILE_NAMES: [&str; 2] = ["placeprobe.yml", "placeprobe.yaml"];

/// Reporter configuration from placeprobe.yml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the SQLite database of historic places
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Row limit applied to every distinct-value query
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_database_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE_PATH)
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            limit: default_limit(),
        }
    }
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a directory.
    ///
    /// Looks for placeprobe.yml or placeprobe.yaml and returns `Ok(None)`
    /// when neither exists, so callers can fall back to [`Config::default`].
    pub fn load_from_dir(dir: &Path) -> CoreResult<Option<Self>> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
            .map(|path| Self::load(&path))
            .transpose()
    }

    /// Apply command-line overrides on top of this configuration
    pub fn with_overrides(
        mut self,
        database_path: Option<PathBuf>,
        limit: Option<u32>,
    ) -> CoreResult<Self> {
        if let Some(path) = database_path {
            self.database_path = path;
        }
        if let Some(limit) = limit {
            self.limit = limit;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.database_path.as_os_str().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "database_path cannot be empty".to_string(),
            });
        }

        if self.limit == 0 {
            return Err(CoreError::ConfigInvalid {
                message: "limit must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
