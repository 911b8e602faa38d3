use std::fs;
use std::path::{Path, PathBuf};

use super::LinestatsConfig;
use crate::errors::ToolError;
use crate::logging::parse_level;

pub const CONFIG_FILE_NAME: &str = ".linestats.toml";

/// How many directories, starting with the working directory, are searched.
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse and validate configuration from TOML text.
pub fn parse_and_validate_config(contents: &str, path: &Path) -> Result<LinestatsConfig, ToolError> {
    let mut config = toml::from_str::<LinestatsConfig>(contents)
        .map_err(|e| ToolError::config(path, e.message().to_string()))?;

    if let Some(dir) = &config.output_dir {
        if dir.as_os_str().is_empty() {
            return Err(ToolError::config(path, "output_dir must not be empty"));
        }
    }

    if let Some(level) = &config.logging.level {
        if parse_level(level).is_none() {
            return Err(ToolError::config(
                path,
                format!("unknown log level '{}'", level),
            ));
        }
    }

    config.base_dir = path.parent().map(Path::to_path_buf);
    Ok(config)
}

/// Try one candidate file. `None` when it does not exist.
fn try_load_config_from_path(config_path: &Path) -> Option<Result<LinestatsConfig, ToolError>> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => return Some(Err(ToolError::config(config_path, e.to_string()))),
    };

    let loaded = parse_and_validate_config(&contents, config_path);
    if loaded.is_ok() {
        log::debug!("Loaded config from {}", config_path.display());
    }
    Some(loaded)
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load the nearest configuration at or above `start`.
///
/// No file at all yields the defaults. The nearest file that exists is the
/// one used; if it cannot be read or validated the error is returned so the
/// caller can warn and fall back to the defaults.
pub fn load_config_from(start: &Path) -> Result<LinestatsConfig, ToolError> {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No {} found within {} directories. Using defaults.",
                CONFIG_FILE_NAME,
                MAX_TRAVERSAL_DEPTH
            );
            Ok(LinestatsConfig::default())
        })
}

/// Load the nearest configuration at or above the working directory.
pub fn load_config() -> Result<LinestatsConfig, ToolError> {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            log::debug!("Failed to get current directory: {}. Using default config.", e);
            Ok(LinestatsConfig::default())
        }
    }
}
