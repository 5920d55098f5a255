use std::path::PathBuf;

use nebula_common::PlatformError;

pub(super) const APP_NAME: &str = "nebula";

fn base(dir: Option<PathBuf>, what: &str) -> Result<PathBuf, PlatformError> {
    dir.map(|p| p.join(APP_NAME))
        .ok_or_else(|| PlatformError::PathError(format!("could not determine {what} directory")))
}

/// Platform configuration directory for Nebula.
///
/// - macOS: `~/Library/Application Support/nebula`
/// - Linux: `$XDG_CONFIG_HOME/nebula` (defaults to `~/.config/nebula`)
/// - Windows: `%APPDATA%\nebula`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    base(dirs::config_dir(), "config")
}

/// Platform data directory for Nebula.
///
/// - macOS: `~/Library/Application Support/nebula`
/// - Linux: `$XDG_DATA_HOME/nebula` (defaults to `~/.local/share/nebula`)
/// - Windows: `%APPDATA%\nebula`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    base(dirs::data_dir(), "data")
}

pub fn cache_dir() -> Result<PathBuf, PlatformError> {
    base(dirs::cache_dir(), "cache")
}

/// `config_dir()/config.toml`
pub fn config_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("config.toml"))
}

/// `data_dir()/logs`
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// `log_dir()/crash-reports`
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}

/// Browsing data shared by every content view: cookies, local storage, cache.
pub fn webview_data_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("webview"))
}
