//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts configuration.
///
/// Format: "Modifier+Key" where Modifier is one of: Cmd, Option, Ctrl, Shift.
/// Multiple modifiers: "Cmd+Shift+S". `Cmd` means Super on macOS and Ctrl
/// elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub toggle_sidebar: String,
    pub copy_url: String,
    pub new_view: String,
    pub new_window: String,
    pub close_view: String,
    pub toggle_fullscreen: String,
    pub quit: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            toggle_sidebar: "Cmd+Shift+S".into(),
            copy_url: "Cmd+Shift+C".into(),
            new_view: "Cmd+T".into(),
            new_window: "Cmd+N".into(),
            close_view: "Cmd+W".into(),
            toggle_fullscreen: "Cmd+Ctrl+F".into(),
            quit: "Cmd+Q".into(),
        }
    }
}
