use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use nebula_common::WindowId;
use wry::WebView;

use crate::events::SurfaceId;

/// Handle to a live webview.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    pub(super) surface: SurfaceId,
    /// Window the webview is a child of.
    pub(super) parent: WindowId,
    /// Read by the handler closures to tag their events.
    pub(super) generation: Arc<AtomicU64>,
    /// Last url requested (best-effort tracking).
    pub(super) current_url: String,
}

impl WebViewHandle {
    pub fn surface(&self) -> &SurfaceId {
        &self.surface
    }

    pub fn parent(&self) -> WindowId {
        self.parent
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Start loading `url` as load `generation`. Callbacks raised from here
    /// on carry the new generation.
    pub fn load_url(&mut self, url: &str, generation: u64) -> Result<(), wry::Error> {
        self.generation.store(generation, Ordering::SeqCst);
        self.current_url = url.to_string();
        self.webview.load_url(url)
    }

    /// Record a url the page reached by itself (link click, redirect).
    pub fn set_current_url(&mut self, url: impl Into<String>) {
        self.current_url = url.into();
    }

    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Deliver a `{kind, payload}` envelope to the page's IPC handlers.
    pub fn send_ipc(&self, envelope: &serde_json::Value) -> Result<(), wry::Error> {
        self.evaluate_script(&crate::ipc::js_dispatch_envelope(envelope))
    }

    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }
}
