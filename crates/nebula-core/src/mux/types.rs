//! The multiplexer state and its read-only accessors.

use nebula_common::{ShellError, ViewId, WindowId};
use tracing::info;

use crate::broadcast::SyncBroadcaster;
use crate::events::OutboundEvent;
use crate::geometry::ShellLayout;
use crate::host::OpenedWindow;
use crate::registry::{ViewRecord, ViewRegistry, WindowRecord, WindowRegistry};

/// Owns both registries and is the only writer of either.
///
/// Every operation runs to completion before the next one starts, so no
/// caller ever observes a view and a window that disagree about each other.
pub struct Multiplexer {
    pub(super) views: ViewRegistry,
    pub(super) windows: WindowRegistry,
    pub(super) broadcaster: SyncBroadcaster,
    pub(super) layout: ShellLayout,
    /// Address used by `create_view` when none is given.
    pub(super) home_url: String,
}

impl Multiplexer {
    pub fn new(layout: ShellLayout, home_url: impl Into<String>) -> Self {
        Self {
            views: ViewRegistry::new(),
            windows: WindowRegistry::new(),
            broadcaster: SyncBroadcaster::new(),
            layout,
            home_url: home_url.into(),
        }
    }

    // -- Accessors --

    pub fn views(&self) -> &ViewRegistry {
        &self.views
    }

    pub fn windows(&self) -> &WindowRegistry {
        &self.windows
    }

    pub fn view(&self, id: &ViewId) -> Result<&ViewRecord, ShellError> {
        self.views.get(id)
    }

    pub fn window(&self, id: WindowId) -> Result<&WindowRecord, ShellError> {
        self.windows.get(id)
    }

    pub fn layout(&self) -> ShellLayout {
        self.layout
    }

    pub fn home_url(&self) -> &str {
        &self.home_url
    }

    /// Url of the view displayed in `window`, if any.
    pub fn displayed_url(&self, window: WindowId) -> Result<Option<&str>, ShellError> {
        let record = self.windows.get(window)?;
        Ok(record
            .displayed_view()
            .and_then(|v| self.views.get(v).ok())
            .map(|v| v.url()))
    }

    // -- Windows --

    /// Start tracking a window the host created and connect its UI layer.
    pub fn register_window(&mut self, opened: OpenedWindow) -> WindowId {
        let id = self.windows.create(opened.id);
        self.broadcaster.register(id, opened.ui);
        info!(window = %id, "window registered");
        id
    }

    // -- UI delivery --

    pub fn send_to(&self, window: WindowId, event: OutboundEvent) -> bool {
        self.broadcaster.send_to(window, event)
    }

    pub fn broadcast(&self, event: &OutboundEvent) -> usize {
        self.broadcaster.broadcast(&self.windows, event)
    }

    /// Push a view's current `{id, url, title}` to every window.
    pub fn broadcast_view_metadata(&self, view: &ViewId) -> Result<usize, ShellError> {
        let snapshot = self.views.get(view)?.snapshot();
        Ok(self
            .broadcaster
            .broadcast_view_metadata(&self.windows, snapshot))
    }

    /// Check that every view/window back-reference pair agrees.
    pub fn verify_links(&self) -> Result<(), String> {
        for view in self.views.iter() {
            if let Some(owner) = view.owner() {
                let window = self
                    .windows
                    .get(owner)
                    .map_err(|_| format!("view {} owned by missing {owner}", view.id()))?;
                if window.displayed_view() != Some(view.id()) {
                    return Err(format!(
                        "view {} claims {owner} but the window displays {:?}",
                        view.id(),
                        window.displayed_view()
                    ));
                }
            }
        }
        for window in self.windows.iter() {
            if let Some(displayed) = window.displayed_view() {
                let view = self
                    .views
                    .get(displayed)
                    .map_err(|_| format!("{} displays missing view {displayed}", window.id()))?;
                if view.owner() != Some(window.id()) {
                    return Err(format!(
                        "{} displays {displayed} but the view's owner is {:?}",
                        window.id(),
                        view.owner()
                    ));
                }
            }
        }
        Ok(())
    }
}
