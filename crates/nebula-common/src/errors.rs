use std::path::PathBuf;

use crate::id::ViewId;
use crate::types::WindowId;

/// Failures of the view multiplexing core.
///
/// Every variant is recoverable: a missing id is reported to the caller and
/// a failed load leaves the view registered and navigable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    #[error("window not found: {0}")]
    WindowNotFound(WindowId),

    #[error("view not found: {0}")]
    ViewNotFound(ViewId),

    #[error("load failed for {view}: {reason}")]
    LoadFailed { view: ViewId, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("clipboard error: {0}")]
    ClipboardError(String),

    #[error("path error: {0}")]
    PathError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum NebulaError {
    #[error(transparent)]
    Shell(#[from] ShellError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("{0}")]
    Other(String),
}
