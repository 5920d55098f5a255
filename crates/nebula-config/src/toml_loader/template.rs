//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Nebula Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[shell]
# home_url = "https://google.com"
# search_url = "https://www.google.com/search?q={query}"

[window]
# width = 900            # 200-10000
# height = 670           # 200-10000
# title = "Nebula"
# hidden_titlebar = true # macOS only

[layout]
# chrome_height = 50     # 0-200
# sidebar_width = 250    # 0-800

[webview]
# user_agent = "Mozilla/5.0 ..."
# devtools = false
# autoplay = false
# clipboard = true

[keybinds]
# Cmd is Super on macOS and Ctrl elsewhere.
# toggle_sidebar = "Cmd+Shift+S"
# copy_url = "Cmd+Shift+C"
# new_view = "Cmd+T"
# new_window = "Cmd+N"
# close_view = "Cmd+W"
# toggle_fullscreen = "Cmd+Ctrl+F"
# quit = "Cmd+Q"

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
