//! Nebula configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use nebula_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("home: {}", config.shell.home_url);
//! ```

pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{NebulaConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use nebula_common::ConfigError;

/// Load and validate config from the platform default path.
///
/// Creates a commented default file on first run.
pub fn load_config() -> Result<NebulaConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path (`--config`).
pub fn load_config_from(path: &Path) -> Result<NebulaConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
