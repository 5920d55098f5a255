//! Bridge between the core and the webviews.
//!
//! Handles coordinate conversion, IPC message dispatch from chrome pages,
//! translation of engine callbacks, and delivery of core events to chrome.

pub(super) mod bounds;
mod ipc_dispatch;
mod lifecycle;
mod ui_sync;
