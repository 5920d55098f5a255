//! Settings applied to every content webview.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSettings {
    /// Custom user agent. `None` keeps the engine default.
    pub user_agent: Option<String>,
    /// Enable the web inspector.
    pub devtools: bool,
    /// Allow media to play without a user gesture.
    pub autoplay: bool,
    /// Allow pages to use the clipboard API.
    pub clipboard: bool,
}

impl Default for WebViewSettings {
    fn default() -> Self {
        Self {
            user_agent: None,
            devtools: false,
            autoplay: false,
            clipboard: true,
        }
    }
}
