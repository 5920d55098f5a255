//! Keybind registry: maps key presses to runtime [`Action`](nebula_common::Action)s.
//!
//! Built from [`KeybindConfig`](nebula_config::schema::KeybindConfig) at startup.

mod key_combo;
mod registry;

pub use key_combo::KeyCombo;
pub use registry::KeybindRegistry;

#[cfg(test)]
mod tests {
    use super::key_combo::*;
    use super::*;
    use crate::keymap::parse_keybind;
    use nebula_common::Action;
    use nebula_config::schema::KeybindConfig;

    fn combo(binding: &str) -> KeyCombo {
        KeyCombo::from_keybind(&parse_keybind(binding).unwrap())
    }

    #[test]
    fn keycombo_from_keybind() {
        let c = combo("Ctrl+Shift+G");
        assert_eq!(c.mods, MOD_CTRL | MOD_SHIFT);
        assert_eq!(c.key, "G");
    }

    #[test]
    fn keycombo_from_winit_matches_parsed() {
        let pressed = KeyCombo::from_winit(true, false, false, false, "T".into());
        assert_eq!(pressed, combo("Ctrl+T"));
    }

    #[test]
    fn keycombo_modifier_order_is_irrelevant() {
        let c = combo("Super+Shift+Alt+X");
        assert_eq!(c, combo("Alt+Shift+Super+X"));
        assert_eq!(c.mods, MOD_ALT | MOD_SHIFT | MOD_SUPER);
    }

    #[test]
    fn registry_from_default_config() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        assert_eq!(registry.len(), 7);
        assert!(!registry.is_empty());
    }

    #[test]
    fn registry_lookup_default_bindings() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        assert_eq!(registry.lookup(&combo("Cmd+T")), Some(&Action::NewView));
        assert_eq!(registry.lookup(&combo("Cmd+N")), Some(&Action::NewWindow));
        assert_eq!(
            registry.lookup(&combo("Cmd+Shift+S")),
            Some(&Action::ToggleSidebar)
        );
        assert_eq!(
            registry.lookup(&combo("Cmd+Shift+C")),
            Some(&Action::CopyUrl)
        );
        assert_eq!(registry.lookup(&combo("Cmd+Q")), Some(&Action::Quit));
    }

    #[test]
    fn registry_lookup_miss() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        let pressed = KeyCombo::from_winit(false, false, false, false, "Z".into());
        assert_eq!(registry.lookup(&pressed), None);
    }

    #[test]
    fn registry_skips_invalid_bindings() {
        let config = KeybindConfig {
            quit: "Hyper+Q".into(),
            ..Default::default()
        };
        let registry = KeybindRegistry::from_config(&config);
        assert_eq!(registry.len(), 6);
        assert_eq!(registry.lookup(&combo("Cmd+Q")), None);
    }

    #[test]
    fn registry_first_binding_wins_on_collision() {
        let config = KeybindConfig {
            copy_url: "Cmd+Shift+S".into(),
            ..Default::default()
        };
        let registry = KeybindRegistry::from_config(&config);
        assert_eq!(
            registry.lookup(&combo("Cmd+Shift+S")),
            Some(&Action::ToggleSidebar)
        );
    }
}
