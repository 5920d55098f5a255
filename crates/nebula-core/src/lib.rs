//! View multiplexing and state synchronization for the Nebula browser shell.
//!
//! Owns the live windows and views, attaches at most one view to each window,
//! computes view geometry under the sidebar layout, and fans metadata changes
//! out to every window's UI layer. Everything host-specific (window creation,
//! the rendering engine) enters through the traits in [`host`].

pub mod address;
pub mod broadcast;
pub mod error;
pub mod events;
pub mod geometry;
pub mod host;
pub mod mux;
pub mod registry;
pub mod router;

#[cfg(test)]
pub(crate) mod testing;

pub use broadcast::{ui_channel, SyncBroadcaster, UiReceiver, UiSender};
pub use error::{CommandParseError, HostError, RouterError};
pub use events::{EngineEvent, OutboundEvent};
pub use geometry::{compute_bounds, ShellLayout};
pub use host::{OpenedWindow, RenderEngine, ShellHost, WindowHost};
pub use mux::Multiplexer;
pub use registry::{LoadGeneration, ViewRecord, ViewRegistry, WindowRecord, WindowRegistry};
pub use router::{ChromeRequest, Command, CommandRouter, Outcome};
