//! Sync broadcaster: fan-out of core events to per-window UI endpoints.
//!
//! Each window's UI layer is reached through an unbounded channel. Broadcasts
//! enumerate the [`WindowRegistry`] rather than the endpoint map, so a window
//! is only ever addressed while it is registered. Sends are fire-and-forget:
//! a missing or closed endpoint drops the message.

use std::collections::HashMap;

use nebula_common::{ViewSnapshot, WindowId};
use tokio::sync::mpsc;
use tracing::debug;

use crate::events::OutboundEvent;
use crate::registry::WindowRegistry;

pub type UiSender = mpsc::UnboundedSender<OutboundEvent>;
pub type UiReceiver = mpsc::UnboundedReceiver<OutboundEvent>;

/// Create the channel pair connecting the core to one window's UI layer.
pub fn ui_channel() -> (UiSender, UiReceiver) {
    mpsc::unbounded_channel()
}

#[derive(Debug, Default)]
pub struct SyncBroadcaster {
    endpoints: HashMap<WindowId, UiSender>,
}

impl SyncBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, window: WindowId, sender: UiSender) {
        self.endpoints.insert(window, sender);
    }

    pub fn unregister(&mut self, window: WindowId) {
        self.endpoints.remove(&window);
    }

    /// Deliver to one window. Returns whether the message was handed off.
    pub fn send_to(&self, window: WindowId, event: OutboundEvent) -> bool {
        let Some(sender) = self.endpoints.get(&window) else {
            debug!(window = %window, kind = event.kind(), "no UI endpoint, dropping");
            return false;
        };
        if sender.send(event).is_err() {
            debug!(window = %window, "UI endpoint closed, dropping");
            return false;
        }
        true
    }

    /// Deliver to every registered window. Returns the number of deliveries.
    pub fn broadcast(&self, windows: &WindowRegistry, event: &OutboundEvent) -> usize {
        windows
            .ids()
            .into_iter()
            .filter(|&window| self.send_to(window, event.clone()))
            .count()
    }

    pub fn broadcast_view_metadata(&self, windows: &WindowRegistry, snapshot: ViewSnapshot) -> usize {
        self.broadcast(windows, &OutboundEvent::ViewMetadata(snapshot))
    }
}
