//! Validation for window size and chrome metrics.

use crate::schema::NebulaConfig;

use super::helpers::validate_range;

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &NebulaConfig) {
    validate_range(
        errors,
        "layout.chrome_height",
        config.layout.chrome_height,
        0,
        200,
    );
    validate_range(
        errors,
        "layout.sidebar_width",
        config.layout.sidebar_width,
        0,
        800,
    );
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &NebulaConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 10000);
    validate_range(errors, "window.height", config.window.height, 200, 10000);
}
