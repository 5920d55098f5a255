//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the native windows and webviews, and hands every shell
//! command to the core's router together with a host built over them.

mod core;
mod dispatch;
mod event_handler;
mod host;
mod init;
mod polling;
mod shutdown;
mod types;
mod webview_bridge;

pub use core::NebulaApp;
