//! Browsing defaults: where new views start and how address bar searches go.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Address a new view opens when none is given.
    pub home_url: String,
    /// Search engine template; `{query}` is replaced by the encoded input.
    pub search_url: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            home_url: "https://google.com".into(),
            search_url: "https://www.google.com/search?q={query}".into(),
        }
    }
}
