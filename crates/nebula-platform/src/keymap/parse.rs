use nebula_common::PlatformError;

use super::types::{KeyBind, Modifier};

/// Parse a shortcut string like `"Cmd+Shift+S"` into a [`KeyBind`].
///
/// `Cmd`/`Command` become Super on macOS and Ctrl elsewhere, so
/// `"Cmd+Ctrl+F"` collapses to `Ctrl+F` off macOS. `Option` is Alt, and
/// `Win`/`Meta` are Super. The final token is always the key.
pub fn parse_keybind(s: &str) -> Result<KeyBind, PlatformError> {
    let tokens: Vec<&str> = s.split('+').map(str::trim).collect();
    let Some((key, modifier_tokens)) = tokens.split_last() else {
        return Err(PlatformError::NotSupported("empty keybind string".into()));
    };
    if key.is_empty() {
        return Err(PlatformError::NotSupported(format!(
            "keybind '{s}' has no key component"
        )));
    }

    let modifiers = modifier_tokens
        .iter()
        .map(|token| {
            normalize_modifier(token).ok_or_else(|| {
                PlatformError::NotSupported(format!("unrecognized modifier: {token}"))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(KeyBind::new(modifiers, normalize_key_name(key)))
}

pub(super) fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_ascii_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "cmd" | "command" => Some(if cfg!(target_os = "macos") {
            Modifier::Super
        } else {
            Modifier::Ctrl
        }),
        "super" | "win" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}

/// Key names accepted in config, mapped to the names keyboard events produce.
const KEY_ALIASES: &[(&str, &str)] = &[
    ("period", "."),
    ("comma", ","),
    ("slash", "/"),
    ("backslash", "\\"),
    ("space", "Space"),
    ("enter", "Enter"),
    ("return", "Enter"),
    ("escape", "Escape"),
    ("esc", "Escape"),
    ("tab", "Tab"),
    ("backspace", "Backspace"),
    ("delete", "Delete"),
    ("del", "Delete"),
    ("up", "Up"),
    ("down", "Down"),
    ("left", "Left"),
    ("right", "Right"),
    ("home", "Home"),
    ("end", "End"),
    ("pageup", "PageUp"),
    ("pagedown", "PageDown"),
];

pub(super) fn normalize_key_name(token: &str) -> String {
    let lower = token.to_ascii_lowercase();
    if let Some((_, name)) = KEY_ALIASES.iter().find(|(alias, _)| *alias == lower) {
        return (*name).to_string();
    }
    if token.chars().count() == 1 {
        return token.to_uppercase();
    }
    // "f11" -> "F11", "insert" -> "Insert"
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => lower,
    }
}
