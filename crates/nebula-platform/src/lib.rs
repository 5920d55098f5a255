//! OS integration for Nebula: filesystem locations, the clipboard, keyboard
//! shortcut parsing and lookup, and crash reports.

pub mod clipboard;
pub mod crash_report;
pub mod input;
pub mod keymap;
pub mod paths;
pub mod winit_keys;

pub use clipboard::{copy_text, Clipboard};
pub use input::{KeyCombo, KeybindRegistry};
pub use keymap::{KeyBind, Modifier};
pub use paths::{
    cache_dir, config_dir, config_file, crash_report_dir, data_dir, ensure_dirs, log_dir,
    webview_data_dir,
};
pub use winit_keys::normalize_winit_key;
