//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Size and decoration of every new window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial inner width in logical pixels (valid range: 200-10000).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 200-10000).
    pub height: u32,
    pub title: String,
    /// Draw the chrome under a transparent title bar (macOS).
    pub hidden_titlebar: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 670,
            title: "Nebula".into(),
            hidden_titlebar: true,
        }
    }
}
