//! Shared validation helpers used by all domain validators.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `value` starts with one of `schemes` (case-insensitive).
pub(crate) fn validate_scheme(errors: &mut Vec<String>, name: &str, value: &str, schemes: &[&str]) {
    let lower = value.trim().to_ascii_lowercase();
    if !schemes.iter().any(|s| lower.starts_with(s)) {
        errors.push(format!(
            "{name} = \"{value}\" must start with one of {}",
            schemes.join(", ")
        ));
    }
}
