//! Applying rendering-engine callbacks.

use tracing::debug;

use super::Multiplexer;
use crate::events::EngineEvent;

impl Multiplexer {
    /// Apply a title/url/failure notification from the engine.
    ///
    /// Notifications for views that no longer exist, or raised by a load that
    /// a later navigation superseded, are dropped. Returns whether the event
    /// changed anything.
    pub fn apply_engine_event(&mut self, event: EngineEvent) -> bool {
        let Ok(view) = self.views.get(event.view()) else {
            debug!(view = %event.view(), "engine event for unknown view dropped");
            return false;
        };
        if let Some(generation) = event.generation() {
            if generation < view.generation() {
                debug!(
                    view = %event.view(),
                    stale = generation.0,
                    current = view.generation().0,
                    "stale engine event dropped"
                );
                return false;
            }
        }

        match event {
            EngineEvent::TitleChanged { view, title, .. } => {
                if self.views.update_title(&view, title).is_err() {
                    return false;
                }
                self.broadcast_view_metadata(&view).is_ok()
            }
            EngineEvent::Navigated { view, url, .. } => {
                if self.views.update_url(&view, url).is_err() {
                    return false;
                }
                self.broadcast_view_metadata(&view).is_ok()
            }
            EngineEvent::LoadFailed { view, reason, .. } => {
                self.fail_load(&view, reason);
                true
            }
            // Needs a host to create the new view; the router handles it.
            EngineEvent::OpenRequested { .. } => false,
        }
    }
}
