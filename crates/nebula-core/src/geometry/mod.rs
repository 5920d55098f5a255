//! Geometry engine: where a view sits inside its window.

mod calculation;
mod types;

pub use calculation::compute_bounds;
pub use types::*;
