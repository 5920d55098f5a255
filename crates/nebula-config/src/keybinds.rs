//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use nebula_common::ConfigError;
use std::collections::HashMap;

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("toggle_sidebar", &config.toggle_sidebar),
        ("copy_url", &config.copy_url),
        ("new_view", &config.new_view),
        ("new_window", &config.new_window),
        ("close_view", &config.close_view),
        ("toggle_fullscreen", &config.toggle_fullscreen),
        ("quit", &config.quit),
    ]
}

/// Canonical form of a binding: lowercase, modifiers sorted, key last.
///
/// `"Shift+Cmd+s"` and `"Cmd+Shift+S"` normalize to the same string.
pub fn normalize_binding(binding: &str) -> String {
    let mut parts: Vec<String> = binding
        .split('+')
        .map(|p| p.trim().to_ascii_lowercase())
        .filter(|p| !p.is_empty())
        .collect();
    let Some(key) = parts.pop() else {
        return String::new();
    };
    parts.sort();
    parts.dedup();
    parts.push(key);
    parts.join("+")
}

/// Validate that no two keybinds are mapped to the same key combination.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let binds = all_keybinds(config);
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (name, binding) in &binds {
        let normalized = normalize_binding(binding);
        if normalized.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "keybinds.{name} is empty"
            )));
        }
        if let Some(existing_name) = seen.get(&normalized) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(normalized, name);
    }

    Ok(())
}
