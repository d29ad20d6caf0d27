//! Dashboard configuration loaded from an optional TOML file.
//!
//! ## Format
//!
//! Every section and key is optional; anything omitted keeps its default.
//!
//! ```toml
//! [parameters.worker_consumption]
//! intercept = 4.0
//! slope = 0.8
//!
//! [parameters.drivers]
//! yt = 5.0
//! ymex = 5.0
//!
//! [dashboard]
//! show_benchmark = true
//!
//! [logging]
//! level = "info"
//! file = "gdp.log"
//! terminal = true
//! ```

use std::{fs, path::Path, path::PathBuf};

use gdp_core::ParameterSet;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Which charts each render cycle produces.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Emit the fixed historical GDP chart after the six component charts.
    pub show_benchmark: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            show_benchmark: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Any `EnvFilter` directive; `RUST_LOG` wins when set.
    pub level: Option<String>,
    /// Append log records to this file in addition to the terminal.
    pub file: Option<PathBuf>,
    /// Write log records to stderr.
    pub terminal: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            file: None,
            terminal: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub parameters: ParameterSet,
    pub dashboard: DashboardConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Parses a configuration document.
    pub fn from_toml_str(
        text: &str,
        origin: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }
}
