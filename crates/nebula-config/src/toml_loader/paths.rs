//! Where the config file lives, and writing the first-run template there.

use std::io;
use std::path::{Path, PathBuf};

use nebula_common::ConfigError;
use tracing::{debug, info};

use super::template::default_config_toml;

const APP_DIR: &str = "nebula";
const FILE_NAME: &str = "config.toml";

/// `<base>/nebula/config.toml`.
pub fn config_path_in(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(FILE_NAME)
}

/// Config file under the platform config directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| config_path_in(&base))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Write the commented template to `path` unless a file is already there.
///
/// The template goes to a sibling temp file first and is renamed into place,
/// so an interrupted first run never leaves a truncated config behind.
/// Returns whether a file was created.
pub fn create_default_config(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        debug!(path = %path.display(), "config already present, not overwriting");
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| write_error("create", parent, e))?;
    }

    let staging = path.with_extension("toml.tmp");
    std::fs::write(&staging, default_config_toml())
        .map_err(|e| write_error("write", &staging, e))?;
    if let Err(e) = std::fs::rename(&staging, path) {
        let _ = std::fs::remove_file(&staging);
        return Err(write_error("install", path, e));
    }

    info!(path = %path.display(), "created default config");
    Ok(true)
}

fn write_error(action: &str, path: &Path, e: io::Error) -> ConfigError {
    ConfigError::ParseError(format!("failed to {action} {}: {e}", path.display()))
}
