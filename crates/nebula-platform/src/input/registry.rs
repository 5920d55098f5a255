use std::collections::HashMap;

use nebula_common::Action;
use nebula_config::schema::KeybindConfig;
use tracing::{debug, warn};

use crate::keymap::parse_keybind;

use super::key_combo::KeyCombo;

/// Maps key combinations to [`Action`]s.
pub struct KeybindRegistry {
    bindings: HashMap<KeyCombo, Action>,
}

impl KeybindRegistry {
    /// Build the registry from the `[keybinds]` config section.
    ///
    /// Unparseable bindings are logged and skipped. When two bindings collapse
    /// to the same combination on this platform, the first one wins.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mappings: [(&str, Action); 7] = [
            (&config.toggle_sidebar, Action::ToggleSidebar),
            (&config.copy_url, Action::CopyUrl),
            (&config.new_view, Action::NewView),
            (&config.new_window, Action::NewWindow),
            (&config.close_view, Action::CloseView),
            (&config.toggle_fullscreen, Action::ToggleFullscreen),
            (&config.quit, Action::Quit),
        ];

        let mut bindings = HashMap::new();
        for (binding, action) in mappings {
            let kb = match parse_keybind(binding) {
                Ok(kb) => kb,
                Err(e) => {
                    warn!(binding, error = %e, "invalid keybind");
                    continue;
                }
            };
            let combo = KeyCombo::from_keybind(&kb);
            if let Some(existing) = bindings.get(&combo) {
                warn!(binding, ?existing, ?action, "keybind already taken, ignoring");
                continue;
            }
            debug!(keybind = %kb, action = action.label(), "keybind registered");
            bindings.insert(combo, action);
        }

        Self { bindings }
    }

    pub fn lookup(&self, combo: &KeyCombo) -> Option<&Action> {
        self.bindings.get(combo)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
