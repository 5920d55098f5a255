//! Coordinate conversion between core rects and wry rects.

use nebula_common::{Rect, Size};

/// Convert a core `Rect` (f64 logical coords) to a wry `Rect`.
pub fn rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

/// A rect covering a whole window of `size`.
pub fn full_window(size: Size) -> wry::Rect {
    rect_to_wry(&Rect {
        x: 0.0,
        y: 0.0,
        width: size.width,
        height: size.height,
    })
}
