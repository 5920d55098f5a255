//! WebView lifecycle management.
//!
//! `WebViewManager` builds `wry` child webviews for chrome and content
//! surfaces and owns the queue their handlers push events into.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::{SurfaceId, WebViewEvent};

mod handle;
pub mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::WebViewHandle;
pub use registry::WebViewRegistry;
pub use types::{NavigationPolicy, WebViewConfig};

/// Shared sink the handler closures push into.
pub(crate) type EventQueue = Arc<Mutex<Vec<WebViewEvent>>>;

#[derive(Debug, thiserror::Error)]
pub enum WebViewError {
    #[error("no surface {0}")]
    SurfaceNotFound(SurfaceId),

    #[error(transparent)]
    Engine(#[from] wry::Error),
}

pub struct WebViewManager {
    pub(crate) events: EventQueue,
    /// Serves the `nebula://` protocol when set.
    content_provider: Option<Arc<ContentProvider>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: None,
        }
    }

    /// Take every event queued since the last drain.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub(crate) fn push_event(&self, event: WebViewEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
