//! Content rectangle computation.

use nebula_common::{Rect, Size};

use super::ShellLayout;

/// Compute the bounds of the view displayed in a window.
///
/// The view sits below the chrome strip and, when the sidebar is open, to the
/// right of it. A window smaller than the chrome yields a zero-area rect;
/// no dimension is ever negative.
pub fn compute_bounds(
    window_width: f64,
    window_height: f64,
    sidebar_visible: bool,
    chrome_height: f64,
    sidebar_width: f64,
) -> Rect {
    let x = if sidebar_visible {
        sidebar_width.max(0.0)
    } else {
        0.0
    };
    let y = chrome_height.max(0.0);

    // f64::max discards NaN, so a bogus host size also lands on zero.
    Rect {
        x,
        y,
        width: (window_width - x).max(0.0),
        height: (window_height - y).max(0.0),
    }
}

impl ShellLayout {
    pub fn content_bounds(&self, window: Size, sidebar_visible: bool) -> Rect {
        compute_bounds(
            window.width,
            window.height,
            sidebar_visible,
            self.chrome_height,
            self.sidebar_width,
        )
    }
}
