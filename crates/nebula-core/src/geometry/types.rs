//! Layout metrics for the browser chrome.

/// Fixed chrome metrics the content rectangle is carved out of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellLayout {
    /// Height of the URL bar strip across the top of every window.
    pub chrome_height: f64,
    /// Width of the tab sidebar when it is open.
    pub sidebar_width: f64,
}

impl Default for ShellLayout {
    fn default() -> Self {
        Self {
            chrome_height: 50.0,
            sidebar_width: 250.0,
        }
    }
}
