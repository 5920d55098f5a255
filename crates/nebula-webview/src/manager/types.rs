/// Which top-level navigations a surface may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPolicy {
    /// Shell UI: bundled `nebula://` pages only.
    Chrome,
    /// Web content: `http`, `https`, `about`, `data`, `blob`.
    Content,
}

/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load.
    pub url: String,
    /// Load generation the initial load belongs to.
    pub generation: u64,
    pub policy: NavigationPolicy,
    /// Whether the surface is shown as soon as it is built.
    pub visible: bool,
    pub transparent: bool,
    pub devtools: bool,
    pub user_agent: Option<String>,
    pub clipboard: bool,
    pub autoplay: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: "about:blank".to_string(),
            generation: 1,
            policy: NavigationPolicy::Content,
            visible: false,
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: None,
            clipboard: true,
            autoplay: false,
        }
    }
}

impl WebViewConfig {
    /// A chrome surface showing `url`, visible and transparent.
    pub fn chrome(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            policy: NavigationPolicy::Chrome,
            visible: true,
            transparent: true,
            ..Default::default()
        }
    }

    /// A hidden content surface starting its `generation` load at `url`.
    pub fn content(url: impl Into<String>, generation: u64) -> Self {
        Self {
            url: url.into(),
            generation,
            ..Default::default()
        }
    }
}
