use crate::keymap::{KeyBind, Modifier};

pub(super) const MOD_CTRL: u8 = 0b0001;
pub(super) const MOD_ALT: u8 = 0b0010;
pub(super) const MOD_SHIFT: u8 = 0b0100;
pub(super) const MOD_SUPER: u8 = 0b1000;

/// A key press reduced to a hashable form: modifier bitmask plus key name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Bitmask: Ctrl=1, Alt=2, Shift=4, Super=8.
    pub mods: u8,
    /// Normalized key name (e.g. "T", "Enter", "F11").
    pub key: String,
}

fn bit(modifier: Modifier) -> u8 {
    match modifier {
        Modifier::Ctrl => MOD_CTRL,
        Modifier::Alt => MOD_ALT,
        Modifier::Shift => MOD_SHIFT,
        Modifier::Super => MOD_SUPER,
    }
}

impl KeyCombo {
    pub fn from_keybind(kb: &KeyBind) -> Self {
        Self {
            mods: kb.modifiers.iter().fold(0, |acc, m| acc | bit(*m)),
            key: kb.key.clone(),
        }
    }

    /// Build from the modifier state of a keyboard event and a key name
    /// already passed through [`normalize_winit_key`](crate::normalize_winit_key).
    pub fn from_winit(ctrl: bool, alt: bool, shift: bool, super_key: bool, key: String) -> Self {
        let mods = [
            (ctrl, MOD_CTRL),
            (alt, MOD_ALT),
            (shift, MOD_SHIFT),
            (super_key, MOD_SUPER),
        ]
        .iter()
        .filter(|(pressed, _)| *pressed)
        .fold(0, |acc, (_, b)| acc | b);
        Self { mods, key }
    }
}
