//! Browser chrome metrics.

use serde::{Deserialize, Serialize};

/// Chrome metrics the content area is carved out of.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of the URL bar strip in pixels (valid range: 0-200).
    pub chrome_height: u32,
    /// Width of the tab sidebar in pixels (valid range: 0-800).
    pub sidebar_width: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            chrome_height: 50,
            sidebar_width: 250,
        }
    }
}
