use std::collections::HashMap;

use nebula_common::WindowId;
use tracing::debug;
use wry::raw_window_handle;

use crate::events::{SurfaceId, WebViewEvent};

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::{WebViewError, WebViewManager};

/// Live webviews keyed by the surface they render.
pub struct WebViewRegistry {
    manager: WebViewManager,
    handles: HashMap<SurfaceId, WebViewHandle>,
}

impl WebViewRegistry {
    pub fn new(manager: WebViewManager) -> Self {
        Self {
            manager,
            handles: HashMap::new(),
        }
    }

    /// Build a webview for `surface` inside `window`. Any previous webview
    /// for the same surface is dropped first.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        surface: SurfaceId,
        parent: WindowId,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<(), WebViewError> {
        self.handles.remove(&surface);
        let handle = self
            .manager
            .create(surface.clone(), parent, window, bounds, config)?;
        self.handles.insert(surface, handle);
        Ok(())
    }

    pub fn get(&self, surface: &SurfaceId) -> Option<&WebViewHandle> {
        self.handles.get(surface)
    }

    pub fn get_mut(&mut self, surface: &SurfaceId) -> Option<&mut WebViewHandle> {
        self.handles.get_mut(surface)
    }

    /// Like [`get_mut`](Self::get_mut) but reports a missing surface as an
    /// error.
    pub fn require_mut(&mut self, surface: &SurfaceId) -> Result<&mut WebViewHandle, WebViewError> {
        self.handles
            .get_mut(surface)
            .ok_or_else(|| WebViewError::SurfaceNotFound(surface.clone()))
    }

    /// Drop the webview for `surface`. `false` if there was none.
    pub fn destroy(&mut self, surface: &SurfaceId) -> bool {
        if self.handles.remove(surface).is_some() {
            debug!(surface = %surface, "WebView destroyed");
            self.manager.push_event(WebViewEvent::Closed {
                surface: surface.clone(),
            });
            true
        } else {
            false
        }
    }

    /// Surfaces whose webview is a child of `window`.
    pub fn surfaces_in(&self, window: WindowId) -> Vec<SurfaceId> {
        self.handles
            .values()
            .filter(|h| h.parent == window)
            .map(|h| h.surface.clone())
            .collect()
    }

    pub fn surfaces(&self) -> Vec<SurfaceId> {
        self.handles.keys().cloned().collect()
    }

    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.manager.drain_events()
    }

    /// Destroy every webview. Used during graceful shutdown.
    pub fn destroy_all(&mut self) {
        for surface in self.surfaces() {
            self.destroy(&surface);
        }
    }

    pub fn count(&self) -> usize {
        self.handles.len()
    }
}
