//! WebView event types.

use std::fmt;

use nebula_common::{ViewId, WindowId};
use serde::{Deserialize, Serialize};

/// Which surface a webview renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SurfaceId {
    /// The shell UI of a window: URL bar and sidebar.
    Chrome(WindowId),
    /// A content view.
    View(ViewId),
}

impl SurfaceId {
    pub fn view(&self) -> Option<&ViewId> {
        match self {
            Self::View(id) => Some(id),
            Self::Chrome(_) => None,
        }
    }

    pub fn window(&self) -> Option<WindowId> {
        match self {
            Self::Chrome(id) => Some(*id),
            Self::View(_) => None,
        }
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chrome(id) => write!(f, "chrome:{id}"),
            Self::View(id) => write!(f, "view:{id}"),
        }
    }
}

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    Started,
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a WebView instance.
///
/// `generation` is the load generation the surface was on when the engine
/// raised the event.
#[derive(Debug, Clone, PartialEq)]
pub enum WebViewEvent {
    PageLoad {
        surface: SurfaceId,
        generation: u64,
        state: PageLoadState,
        url: String,
    },
    TitleChanged {
        surface: SurfaceId,
        generation: u64,
        title: String,
    },
    /// A JSON message posted through `window.nebula.ipc`.
    IpcMessage { surface: SurfaceId, body: String },
    /// The navigation policy refused a top-level navigation.
    NavigationBlocked {
        surface: SurfaceId,
        generation: u64,
        url: String,
    },
    /// The page called `window.open` or followed a `target=_blank` link.
    NewWindowRequested { surface: SurfaceId, url: String },
    Closed { surface: SurfaceId },
}

impl WebViewEvent {
    pub fn surface(&self) -> &SurfaceId {
        match self {
            Self::PageLoad { surface, .. }
            | Self::TitleChanged { surface, .. }
            | Self::IpcMessage { surface, .. }
            | Self::NavigationBlocked { surface, .. }
            | Self::NewWindowRequested { surface, .. }
            | Self::Closed { surface } => surface,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_id_display() {
        assert_eq!(SurfaceId::Chrome(WindowId(3)).to_string(), "chrome:window-3");
        let view = SurfaceId::View(ViewId::from_raw("abc"));
        assert_eq!(view.to_string(), "view:abc");
    }

    #[test]
    fn surface_id_accessors() {
        let chrome = SurfaceId::Chrome(WindowId(1));
        assert_eq!(chrome.window(), Some(WindowId(1)));
        assert!(chrome.view().is_none());

        let view = SurfaceId::View(ViewId::from_raw("v"));
        assert_eq!(view.view().map(ViewId::as_str), Some("v"));
        assert!(view.window().is_none());
    }

    #[test]
    fn event_surface_accessor() {
        let surface = SurfaceId::View(ViewId::from_raw("v1"));
        let evt = WebViewEvent::TitleChanged {
            surface: surface.clone(),
            generation: 2,
            title: "Docs".into(),
        };
        assert_eq!(evt.surface(), &surface);
        let closed = WebViewEvent::Closed {
            surface: surface.clone(),
        };
        assert_eq!(closed.surface(), &surface);
    }

    #[test]
    fn page_load_state_from_wry() {
        assert_eq!(
            PageLoadState::from(wry::PageLoadEvent::Started),
            PageLoadState::Started
        );
        assert_eq!(
            PageLoadState::from(wry::PageLoadEvent::Finished),
            PageLoadState::Finished
        );
    }
}
