//! Arena-style registries of live views and windows.
//!
//! Both registries are keyed by id and own their records outright. Reads are
//! public; every mutation is crate-private so that only the
//! [`Multiplexer`](crate::mux::Multiplexer) can change the relationship
//! between a window and the view it displays.

mod view;
mod window;

pub use view::{LoadGeneration, ViewRecord, ViewRegistry};
pub use window::{WindowRecord, WindowRegistry};
