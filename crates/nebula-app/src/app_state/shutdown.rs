//! Graceful shutdown: close every window, then drop leftover webviews.

use winit::event_loop::ActiveEventLoop;

use super::core::NebulaApp;

impl NebulaApp {
    /// Close every window through the same path a user close takes, so the
    /// core's cascade runs once per window.
    pub(super) fn shutdown(&mut self, event_loop: Option<&ActiveEventLoop>) {
        tracing::info!("Initiating graceful shutdown");

        let windows: Vec<_> = self.host.windows.keys().copied().collect();
        for window in windows {
            self.close_window(event_loop, window);
        }

        // Views that were never attached anywhere.
        self.host.webviews.destroy_all();
        self.host.parked.clear();
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================
