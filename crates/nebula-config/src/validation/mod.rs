//! Full configuration validation.
//!
//! Validates numeric ranges, addresses, and keybind uniqueness. Each domain
//! has its own submodule; this orchestrator calls them all and collects
//! errors into a single `ConfigError`.

mod helpers;
mod layout;
mod misc;


use crate::keybinds;
use crate::schema::NebulaConfig;
use nebula_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &NebulaConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    layout::validate_layout(&mut errors, config);
    layout::validate_window(&mut errors, config);
    misc::validate_shell(&mut errors, config);
    misc::validate_webview(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
