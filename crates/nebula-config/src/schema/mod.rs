//! Configuration schema types for Nebula.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod keybind_config;
mod layout;
mod shell;
mod system;
mod webview;
mod window;

pub use keybind_config::*;
pub use layout::*;
pub use shell::*;
pub use system::*;
pub use webview::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Nebula.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct NebulaConfig {
    pub shell: ShellConfig,
    pub window: WindowConfig,
    pub layout: LayoutConfig,
    pub webview: WebViewSettings,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_correct_shell() {
        let config = NebulaConfig::default();
        assert_eq!(config.shell.home_url, "https://google.com");
        assert_eq!(
            config.shell.search_url,
            "https://www.google.com/search?q={query}"
        );
    }

    #[test]
    fn default_config_has_correct_window() {
        let config = NebulaConfig::default();
        assert_eq!(config.window.width, 900);
        assert_eq!(config.window.height, 670);
        assert_eq!(config.window.title, "Nebula");
        assert!(config.window.hidden_titlebar);
    }

    #[test]
    fn default_config_has_correct_layout() {
        let config = NebulaConfig::default();
        assert_eq!(config.layout.chrome_height, 50);
        assert_eq!(config.layout.sidebar_width, 250);
    }

    #[test]
    fn default_config_has_correct_keybinds() {
        let config = NebulaConfig::default();
        assert_eq!(config.keybinds.toggle_sidebar, "Cmd+Shift+S");
        assert_eq!(config.keybinds.copy_url, "Cmd+Shift+C");
        assert_eq!(config.keybinds.new_view, "Cmd+T");
        assert_eq!(config.keybinds.new_window, "Cmd+N");
        assert_eq!(config.keybinds.close_view, "Cmd+W");
        assert_eq!(config.keybinds.toggle_fullscreen, "Cmd+Ctrl+F");
        assert_eq!(config.keybinds.quit, "Cmd+Q");
    }

    #[test]
    fn default_config_has_correct_webview() {
        let config = NebulaConfig::default();
        assert!(config.webview.user_agent.is_none());
        assert!(!config.webview.devtools);
        assert!(!config.webview.autoplay);
        assert!(config.webview.clipboard);
    }

    #[test]
    fn default_logging_is_info() {
        let config = NebulaConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.level.as_directive(), "info");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let toml_str = r#"
[layout]
sidebar_width = 300

[keybinds]
quit = "Ctrl+Q"
"#;
        let config: NebulaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.layout.sidebar_width, 300);
        assert_eq!(config.layout.chrome_height, 50);
        assert_eq!(config.keybinds.quit, "Ctrl+Q");
        assert_eq!(config.keybinds.new_view, "Cmd+T");
        assert_eq!(config.window.width, 900);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config: NebulaConfig = toml::from_str("").unwrap();
        assert_eq!(config.shell.home_url, "https://google.com");
    }

    #[test]
    fn log_level_parses_lowercase() {
        let config: NebulaConfig = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn unknown_log_level_is_parse_error() {
        assert!(toml::from_str::<NebulaConfig>("[logging]\nlevel = \"loud\"\n").is_err());
    }
}
