use nebula_common::ViewId;
use serde_json::Value;

use crate::error::CommandParseError;

/// An inbound command from a window's UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewWindow,
    NewView { url: Option<String> },
    RequestView { view: ViewId },
    Navigate { view: ViewId, url: String },
    CloseView { view: ViewId },
    SidebarOn,
    SidebarOff,
    ToggleSidebar,
    CopyUrl,
    CloseWindow,
    MinimizeWindow,
    MaximizeWindow,
    Ping,
}

impl Command {
    /// Every kind the router accepts over IPC.
    pub const KINDS: &'static [&'static str] = &[
        "new-window",
        "new-view",
        "request-view",
        "navigate",
        "close-view",
        "sidebar-on",
        "sidebar-off",
        "toggle-sidebar",
        "copy-url",
        "close-window",
        "minimize-window",
        "maximize-window",
        "ping",
    ];

    pub fn kind(&self) -> &'static str {
        match self {
            Self::NewWindow => "new-window",
            Self::NewView { .. } => "new-view",
            Self::RequestView { .. } => "request-view",
            Self::Navigate { .. } => "navigate",
            Self::CloseView { .. } => "close-view",
            Self::SidebarOn => "sidebar-on",
            Self::SidebarOff => "sidebar-off",
            Self::ToggleSidebar => "toggle-sidebar",
            Self::CopyUrl => "copy-url",
            Self::CloseWindow => "close-window",
            Self::MinimizeWindow => "minimize-window",
            Self::MaximizeWindow => "maximize-window",
            Self::Ping => "ping",
        }
    }

    /// Build a command from an IPC `kind` and its payload.
    ///
    /// Commands with a single argument take it either as a bare string or as
    /// an object field (`{"url": ..}`, `{"viewId": ..}`).
    pub fn parse(kind: &str, payload: &Value) -> Result<Self, CommandParseError> {
        let command = match kind {
            "new-window" => Self::NewWindow,
            "new-view" => Self::NewView {
                url: string_arg(payload, "url").filter(|u| !u.trim().is_empty()),
            },
            "request-view" => Self::RequestView {
                view: view_arg(payload, "request-view")?,
            },
            "navigate" => Self::Navigate {
                view: field(payload, "viewId")
                    .map(ViewId::from_raw)
                    .ok_or(CommandParseError::MissingField {
                        kind: "navigate",
                        field: "viewId",
                    })?,
                url: field(payload, "url").ok_or(CommandParseError::MissingField {
                    kind: "navigate",
                    field: "url",
                })?,
            },
            "close-view" => Self::CloseView {
                view: view_arg(payload, "close-view")?,
            },
            "sidebar-on" => Self::SidebarOn,
            "sidebar-off" => Self::SidebarOff,
            "toggle-sidebar" => Self::ToggleSidebar,
            "copy-url" => Self::CopyUrl,
            "close-window" => Self::CloseWindow,
            "minimize-window" => Self::MinimizeWindow,
            "maximize-window" => Self::MaximizeWindow,
            "ping" => Self::Ping,
            other => return Err(CommandParseError::UnknownKind(other.to_string())),
        };
        Ok(command)
    }
}

fn field(payload: &Value, name: &str) -> Option<String> {
    payload.get(name).and_then(Value::as_str).map(str::to_string)
}

fn string_arg(payload: &Value, name: &str) -> Option<String> {
    match payload {
        Value::String(s) => Some(s.clone()),
        _ => field(payload, name),
    }
}

fn view_arg(payload: &Value, kind: &'static str) -> Result<ViewId, CommandParseError> {
    string_arg(payload, "viewId")
        .filter(|id| !id.is_empty())
        .map(ViewId::from_raw)
        .ok_or(CommandParseError::MissingField {
            kind,
            field: "viewId",
        })
}
