//! Errors raised at the core's boundaries.
//!
//! Registry and multiplexer failures use [`ShellError`] from `nebula-common`.

use nebula_common::ShellError;

/// Failure reported by a host trait implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct HostError(pub String);

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// An inbound message that does not map to a [`Command`](crate::router::Command).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandParseError {
    #[error("unknown command kind: {0}")]
    UnknownKind(String),

    #[error("command '{kind}' is missing field '{field}'")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error(transparent)]
    Shell(#[from] ShellError),

    #[error("host error: {0}")]
    Host(#[from] HostError),

    #[error(transparent)]
    Parse(#[from] CommandParseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use nebula_common::WindowId;

    #[test]
    fn host_error_display_is_message() {
        assert_eq!(HostError::new("no event loop").to_string(), "no event loop");
    }

    #[test]
    fn parse_error_display() {
        let err = CommandParseError::UnknownKind("eval".into());
        assert_eq!(err.to_string(), "unknown command kind: eval");

        let err = CommandParseError::MissingField {
            kind: "navigate",
            field: "url",
        };
        assert_eq!(err.to_string(), "command 'navigate' is missing field 'url'");
    }

    #[test]
    fn router_error_wraps_shell_error() {
        let err: RouterError = ShellError::WindowNotFound(WindowId(9)).into();
        assert_eq!(err.to_string(), "window not found: window-9");
    }

    #[test]
    fn router_error_wraps_host_error() {
        let err: RouterError = HostError::new("window creation refused").into();
        assert_eq!(err.to_string(), "host error: window creation refused");
    }
}
