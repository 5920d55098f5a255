pub mod actions;
pub mod errors;
pub mod id;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, NebulaError, PlatformError, ShellError};
pub use id::ViewId;
pub use types::{Rect, Size, ViewSnapshot, WindowId};

pub type Result<T> = std::result::Result<T, NebulaError>;
