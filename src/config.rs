//! Optional per-project configuration.
//!
//! The tools work without any configuration. A `.linestats.toml` found in the
//! working directory or one of its ancestors can set where results files are
//! written and the default log level:
//!
//! ```toml
//! output_dir = "reports"
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Command-line flags override anything set here.

pub mod loader;

pub use loader::{load_config, load_config_from, parse_and_validate_config, CONFIG_FILE_NAME};

use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::logging::parse_level;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LinestatsConfig {
    /// Directory receiving results files, relative to the config file.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Directory the configuration was loaded from; not part of the file.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: Option<String>,
}

impl LinestatsConfig {
    pub fn log_level(&self) -> Option<LevelFilter> {
        self.logging.level.as_deref().and_then(parse_level)
    }

    /// Configured output directory, resolved against the config file location.
    pub fn resolved_output_dir(&self) -> Option<PathBuf> {
        let dir = self.output_dir.as_ref()?;
        match &self.base_dir {
            Some(base) if dir.is_relative() => Some(base.join(dir)),
            _ => Some(dir.clone()),
        }
    }

    /// Output directory for a run: the CLI flag wins, then configuration,
    /// then the current directory.
    pub fn output_dir_for(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.resolved_output_dir())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
