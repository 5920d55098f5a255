//! The Multiplexer coordinates the view and window registries, enforces that
//! a window displays at most one view, and keeps view geometry current.

mod attach;
mod engine;
mod lifecycle;
mod sidebar;
mod types;

pub use types::*;
