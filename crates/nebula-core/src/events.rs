//! Events crossing the core boundary.
//!
//! [`OutboundEvent`] flows from the core to a window's UI layer;
//! [`EngineEvent`] flows from the rendering engine into the core.

use nebula_common::{ViewId, ViewSnapshot};
use serde_json::{json, Value};

use crate::registry::LoadGeneration;

/// Message delivered to a window's UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundEvent {
    /// A view requested from this window has started loading.
    ViewReady(ViewSnapshot),
    /// A view's url or title changed.
    ViewMetadata(ViewSnapshot),
    ViewClosed { id: ViewId },
    /// A view this window displayed was moved to another window.
    ViewDetached { id: ViewId },
    ViewLoadFailed {
        id: ViewId,
        url: String,
        reason: String,
    },
    SidebarChanged { visible: bool },
    Pong,
}

impl OutboundEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ViewReady(_) => "view-ready",
            Self::ViewMetadata(_) => "view-metadata",
            Self::ViewClosed { .. } => "view-closed",
            Self::ViewDetached { .. } => "view-detached",
            Self::ViewLoadFailed { .. } => "view-load-failed",
            Self::SidebarChanged { .. } => "sidebar-changed",
            Self::Pong => "pong",
        }
    }

    pub fn payload(&self) -> Value {
        match self {
            Self::ViewReady(snap) | Self::ViewMetadata(snap) => json!({
                "id": snap.id,
                "url": snap.url,
                "title": snap.title,
            }),
            Self::ViewClosed { id } | Self::ViewDetached { id } => json!({ "id": id }),
            Self::ViewLoadFailed { id, url, reason } => json!({
                "id": id,
                "url": url,
                "reason": reason,
            }),
            Self::SidebarChanged { visible } => json!({ "visible": visible }),
            Self::Pong => Value::Null,
        }
    }

    /// The `{"kind", "payload"}` envelope sent over IPC.
    pub fn to_wire(&self) -> Value {
        json!({
            "kind": self.kind(),
            "payload": self.payload(),
        })
    }
}

/// Asynchronous notification raised by the rendering engine.
///
/// Every variant names the view it concerns; those tied to a load also carry
/// the generation current when the engine raised them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    TitleChanged {
        view: ViewId,
        generation: LoadGeneration,
        title: String,
    },
    Navigated {
        view: ViewId,
        generation: LoadGeneration,
        url: String,
    },
    LoadFailed {
        view: ViewId,
        generation: LoadGeneration,
        reason: String,
    },
    /// The page asked for a new window (`window.open`, `target=_blank`).
    OpenRequested { view: ViewId, url: String },
}

impl EngineEvent {
    pub fn view(&self) -> &ViewId {
        match self {
            Self::TitleChanged { view, .. }
            | Self::Navigated { view, .. }
            | Self::LoadFailed { view, .. }
            | Self::OpenRequested { view, .. } => view,
        }
    }

    pub fn generation(&self) -> Option<LoadGeneration> {
        match self {
            Self::TitleChanged { generation, .. }
            | Self::Navigated { generation, .. }
            | Self::LoadFailed { generation, .. } => Some(*generation),
            Self::OpenRequested { .. } => None,
        }
    }
}
