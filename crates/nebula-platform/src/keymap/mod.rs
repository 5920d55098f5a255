//! Keyboard shortcut strings.

mod parse;
mod types;

pub use parse::parse_keybind;
pub use types::{KeyBind, Modifier};

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd() -> Modifier {
        if cfg!(target_os = "macos") {
            Modifier::Super
        } else {
            Modifier::Ctrl
        }
    }

    #[test]
    fn parse_simple_keybind() {
        let kb = parse_keybind("Ctrl+G").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
        assert_eq!(kb.key, "G");
    }

    #[test]
    fn parse_sorts_modifiers() {
        let kb = parse_keybind("Shift+Ctrl+T").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl, Modifier::Shift]);
        assert_eq!(kb, parse_keybind("Ctrl+Shift+T").unwrap());
    }

    #[test]
    fn parse_cmd_is_platform_dependent() {
        let kb = parse_keybind("Cmd+Shift+S").unwrap();
        let mut expected = vec![cmd(), Modifier::Shift];
        expected.sort();
        assert_eq!(kb.modifiers, expected);
        assert_eq!(kb.key, "S");
    }

    #[test]
    fn parse_cmd_ctrl_fullscreen() {
        let kb = parse_keybind("Cmd+Ctrl+F").unwrap();
        if cfg!(target_os = "macos") {
            assert_eq!(kb.modifiers, vec![Modifier::Ctrl, Modifier::Super]);
        } else {
            assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
        }
        assert_eq!(kb.key, "F");
    }

    #[test]
    fn parse_option_becomes_alt() {
        let kb = parse_keybind("Option+Period").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Alt]);
        assert_eq!(kb.key, ".");
    }

    #[test]
    fn parse_single_key() {
        let kb = parse_keybind("f11").unwrap();
        assert!(kb.modifiers.is_empty());
        assert_eq!(kb.key, "F11");
    }

    #[test]
    fn parse_key_aliases() {
        assert_eq!(parse_keybind("Ctrl+Return").unwrap().key, "Enter");
        assert_eq!(parse_keybind("Ctrl+Esc").unwrap().key, "Escape");
        assert_eq!(parse_keybind("Ctrl+space").unwrap().key, "Space");
        assert_eq!(parse_keybind("Ctrl+t").unwrap().key, "T");
    }

    #[test]
    fn parse_errors() {
        assert!(parse_keybind("").is_err());
        assert!(parse_keybind("Ctrl+").is_err());
        assert!(parse_keybind("Hyper+K").is_err());
    }

    #[test]
    fn duplicate_modifiers_collapse() {
        let kb = parse_keybind("Ctrl+Ctrl+A").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
    }

    #[test]
    fn display_trait_is_stable_text() {
        let kb = KeyBind::new(vec![Modifier::Super, Modifier::Shift], "C");
        assert_eq!(kb.to_string(), "Shift+Super+C");
    }

    #[test]
    fn keybind_serialization_roundtrip() {
        let kb = KeyBind::new(vec![Modifier::Ctrl, Modifier::Shift], "T");
        let json = serde_json::to_string(&kb).unwrap();
        let back: KeyBind = serde_json::from_str(&json).unwrap();
        assert_eq!(kb, back);
    }
}
