//! Delivery of core events to each window's chrome page.

use nebula_webview::SurfaceId;

use crate::app_state::core::{HostState, NebulaApp};

impl NebulaApp {
    /// Forward queued core events to every chrome page that can take them.
    pub(in crate::app_state) fn flush_ui_messages(&mut self) {
        let HostState {
            windows, webviews, ..
        } = &mut self.host;

        for (id, app_window) in windows.iter_mut() {
            let deliverable = app_window.ui.take_deliverable();
            if deliverable.is_empty() {
                continue;
            }
            let Some(chrome) = webviews.get(&SurfaceId::Chrome(*id)) else {
                tracing::debug!(window = %id, dropped = deliverable.len(), "no chrome surface");
                continue;
            };
            for envelope in &deliverable {
                if let Err(e) = chrome.send_ipc(envelope) {
                    tracing::warn!(window = %id, error = %e, "failed to deliver UI event");
                }
            }
        }
    }
}
