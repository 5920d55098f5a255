//! Winit key name normalization.
//!
//! Converts the text of winit logical keys into the key names used by
//! [`KeyCombo`](crate::input::KeyCombo) and [`parse_keybind`](crate::keymap::parse_keybind).

/// Winit names that differ from the keybind vocabulary.
const RENAMED: &[(&str, &str)] = &[
    ("ArrowUp", "Up"),
    ("ArrowDown", "Down"),
    ("ArrowLeft", "Left"),
    ("ArrowRight", "Right"),
    (" ", "Space"),
];

/// Convert a winit key name to the normalized string used by `KeyCombo`.
///
/// Single characters are uppercased, because Shift changes the logical key
/// winit reports (`s` vs `S`) but not the shortcut. Named keys such as
/// `F11` or `Escape` pass through.
pub fn normalize_winit_key(key: &str) -> String {
    if let Some((_, name)) = RENAMED.iter().find(|(winit, _)| *winit == key) {
        return (*name).to_string();
    }
    if key.chars().count() == 1 {
        key.to_uppercase()
    } else {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys() {
        assert_eq!(normalize_winit_key("ArrowUp"), "Up");
        assert_eq!(normalize_winit_key("ArrowRight"), "Right");
    }

    #[test]
    fn space() {
        assert_eq!(normalize_winit_key(" "), "Space");
    }

    #[test]
    fn single_chars_uppercased() {
        assert_eq!(normalize_winit_key("t"), "T");
        assert_eq!(normalize_winit_key("S"), "S");
    }

    #[test]
    fn named_keys_pass_through() {
        assert_eq!(normalize_winit_key("F11"), "F11");
        assert_eq!(normalize_winit_key("Escape"), "Escape");
        assert_eq!(normalize_winit_key("Enter"), "Enter");
    }

    #[test]
    fn punctuation_kept() {
        assert_eq!(normalize_winit_key("."), ".");
        assert_eq!(normalize_winit_key(","), ",");
    }
}
