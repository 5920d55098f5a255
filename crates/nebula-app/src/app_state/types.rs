//! Internal types and constants for the app state module.

use std::sync::Arc;
use std::time::Duration;

use nebula_core::UiReceiver;
use serde_json::Value;
use winit::window::Window;

/// How often to poll webview and UI queues (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// A native window and the UI endpoint the core talks to.
pub(super) struct AppWindow {
    pub window: Arc<Window>,
    pub ui: UiQueue,
}

impl AppWindow {
    pub fn new(window: Arc<Window>, receiver: UiReceiver) -> Self {
        Self {
            window,
            ui: UiQueue::new(receiver),
        }
    }
}

/// Core events on their way to a chrome page.
///
/// Scripts evaluated before the page has loaded are lost, so events are
/// held until the chrome reports `Finished`.
pub(super) struct UiQueue {
    receiver: UiReceiver,
    ready: bool,
    pending: Vec<Value>,
}

impl UiQueue {
    pub fn new(receiver: UiReceiver) -> Self {
        Self {
            receiver,
            ready: false,
            pending: Vec::new(),
        }
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Pull everything the core sent; return the wire envelopes that may be
    /// delivered now, oldest first.
    pub fn take_deliverable(&mut self) -> Vec<Value> {
        while let Ok(event) = self.receiver.try_recv() {
            self.pending.push(event.to_wire());
        }
        if self.ready {
            std::mem::take(&mut self.pending)
        } else {
            Vec::new()
        }
    }
}

/// A content view with no live webview: created before any window existed,
/// or left behind by a closed window. Rebuilt when next shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ParkedSurface {
    pub url: String,
    pub generation: u64,
}
