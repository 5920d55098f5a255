//! Rendering-engine adapter for the Nebula shell.
//!
//! Wraps `wry` child webviews:
//! - one chrome surface per window and one surface per content view
//! - a shared event queue drained by the event loop
//! - the `window.nebula.ipc` bridge between chrome pages and Rust
//! - the `nebula://` protocol serving bundled chrome assets
//! - per-surface navigation policies

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;

pub use content::ContentProvider;
pub use events::{PageLoadState, SurfaceId, WebViewEvent};
pub use ipc::IpcMessage;
pub use manager::{
    NavigationPolicy, WebViewConfig, WebViewHandle, WebViewManager, WebViewRegistry,
};
