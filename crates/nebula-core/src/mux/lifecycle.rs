//! Creating, navigating and tearing down views and windows.

use nebula_common::{ShellError, ViewId, WindowId};
use tracing::{debug, info, warn};

use super::Multiplexer;
use crate::events::OutboundEvent;
use crate::host::ShellHost;
use crate::registry::LoadGeneration;

impl Multiplexer {
    /// Create a detached view and start loading it.
    ///
    /// `origin` receives `view-ready` once the load has been issued. A host
    /// that refuses the load leaves the view registered with the error
    /// recorded, and every window is told about the failure.
    pub fn create_view(
        &mut self,
        url: Option<&str>,
        origin: Option<WindowId>,
        host: &mut dyn ShellHost,
    ) -> ViewId {
        let url = url.unwrap_or(self.home_url.as_str()).to_string();
        let origin = origin.filter(|&w| self.windows.contains(w));
        let id = self.views.create(url.clone(), origin);
        info!(view = %id, url = %url, "view created");

        if let Err(e) = host.create_surface(&id, &url, LoadGeneration::INITIAL, origin) {
            warn!(view = %id, error = %e, "failed to start initial load");
            self.fail_load(&id, e.to_string());
        }

        if let (Some(origin), Ok(view)) = (origin, self.views.get(&id)) {
            self.send_to(origin, OutboundEvent::ViewReady(view.snapshot()));
        }
        id
    }

    /// Point `view` at `url`. The url is recorded before the engine is asked
    /// to load it, so the registry reflects the request even if the load fails.
    pub fn navigate(
        &mut self,
        view: &ViewId,
        url: &str,
        host: &mut dyn ShellHost,
    ) -> Result<LoadGeneration, ShellError> {
        let generation = self.views.begin_load(view, url)?;
        debug!(view = %view, url, generation = generation.0, "navigating");
        self.broadcast_view_metadata(view)?;

        if let Err(e) = host.load_url(view, url, generation) {
            warn!(view = %view, url, error = %e, "load failed");
            let reason = e.to_string();
            self.fail_load(view, reason.clone());
            return Err(ShellError::LoadFailed {
                view: view.clone(),
                reason,
            });
        }
        Ok(generation)
    }

    /// Record a failed load and relay it to every window.
    pub(super) fn fail_load(&mut self, view: &ViewId, reason: String) {
        let Ok(record) = self.views.get(view) else {
            return;
        };
        let event = OutboundEvent::ViewLoadFailed {
            id: view.clone(),
            url: record.url().to_string(),
            reason: reason.clone(),
        };
        if self.views.record_error(view, reason).is_ok() {
            self.broadcast(&event);
        }
    }

    /// Discard a view. Returns `false` if it was already gone.
    pub fn close_view(&mut self, view: &ViewId, host: &mut dyn ShellHost) -> bool {
        let Some(record) = self.views.remove(view) else {
            debug!(view = %view, "close of unknown view ignored");
            return false;
        };
        if let Some(owner) = record.owner() {
            let shows_it = self
                .windows
                .get(owner)
                .is_ok_and(|w| w.displayed_view() == Some(view));
            if shows_it {
                // Cannot fail: the window was just looked up.
                let _ = self.windows.set_displayed_view(owner, None);
            }
        }
        host.destroy_surface(view);
        debug_assert!(self.verify_links().is_ok());

        info!(view = %view, "view closed");
        self.broadcast(&OutboundEvent::ViewClosed { id: view.clone() });
        true
    }

    /// Tear down a window after the host closed it.
    ///
    /// The view the window displays and the background views it lists are
    /// purged before the window record disappears. Returns the number of
    /// views discarded.
    pub fn close_window(&mut self, window: WindowId, host: &mut dyn ShellHost) -> usize {
        if !self.windows.contains(window) {
            debug!(window = %window, "close of unknown window ignored");
            return 0;
        }

        let owned = self.views.belonging_to(window);
        for view in &owned {
            self.views.remove(view);
            host.destroy_surface(view);
        }
        // Cannot fail: presence was checked above.
        let _ = self.windows.set_displayed_view(window, None);
        self.windows.remove(window);
        self.broadcaster.unregister(window);
        debug_assert!(self.verify_links().is_ok());

        for view in &owned {
            self.broadcast(&OutboundEvent::ViewClosed { id: view.clone() });
        }
        info!(window = %window, views = owned.len(), "window closed");
        owned.len()
    }
}
