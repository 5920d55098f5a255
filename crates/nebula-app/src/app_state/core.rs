//! NebulaApp struct definition and constructor.

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use nebula_common::{ViewId, WindowId};
use nebula_config::schema::{WindowConfig, WebViewSettings};
use nebula_config::NebulaConfig;
use nebula_core::{CommandRouter, Multiplexer, ShellLayout};
use nebula_platform::KeybindRegistry;
use nebula_webview::WebViewRegistry;

use super::types::{AppWindow, ParkedSurface};

/// Native resources the core's host traits operate on.
pub(super) struct HostState {
    pub windows: BTreeMap<WindowId, AppWindow>,
    pub native: HashMap<winit::window::WindowId, WindowId>,
    pub webviews: WebViewRegistry,
    pub parked: HashMap<ViewId, ParkedSurface>,
    pub next_window: u64,
    pub window_config: WindowConfig,
    pub webview_settings: WebViewSettings,
}

/// Top-level application state.
pub struct NebulaApp {
    pub(super) keybinds: KeybindRegistry,
    pub(super) router: CommandRouter,
    pub(super) host: HostState,

    /// Address for the first view of the first window (`nebula <URL>`).
    pub(super) initial_url: Option<String>,
    pub(super) started: bool,

    pub(super) focused: Option<WindowId>,
    // winit sends modifier changes separately from key events
    pub(super) modifiers: winit::keyboard::ModifiersState,

    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl NebulaApp {
    pub fn new(config: NebulaConfig, keybinds: KeybindRegistry, initial_url: Option<String>) -> Self {
        let layout = ShellLayout {
            chrome_height: f64::from(config.layout.chrome_height),
            sidebar_width: f64::from(config.layout.sidebar_width),
        };
        let mux = Multiplexer::new(layout, config.shell.home_url.clone());
        let router = CommandRouter::new(mux, config.shell.search_url.clone());

        Self {
            keybinds,
            router,
            host: HostState {
                windows: BTreeMap::new(),
                native: HashMap::new(),
                webviews: WebViewRegistry::new(super::init::webview_manager()),
                parked: HashMap::new(),
                next_window: 0,
                window_config: config.window,
                webview_settings: config.webview,
            },
            initial_url,
            started: false,
            focused: None,
            modifiers: winit::keyboard::ModifiersState::empty(),
            should_exit: false,
            last_poll: Instant::now(),
        }
    }

    /// The core's id for a native window, if it is one of ours.
    pub(super) fn window_for(&self, native: winit::window::WindowId) -> Option<WindowId> {
        self.host.native.get(&native).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> NebulaApp {
        let config = NebulaConfig::default();
        let keybinds = KeybindRegistry::from_config(&config.keybinds);
        NebulaApp::new(config, keybinds, None)
    }

    #[test]
    fn fresh_app_has_no_windows() {
        let app = app();
        assert!(app.host.windows.is_empty());
        assert_eq!(app.host.webviews.count(), 0);
        assert!(app.router.mux().windows().is_empty());
        assert!(!app.started);
    }

    #[test]
    fn layout_comes_from_config() {
        let mut config = NebulaConfig::default();
        config.layout.chrome_height = 64;
        config.layout.sidebar_width = 300;
        let keybinds = KeybindRegistry::from_config(&config.keybinds);
        let app = NebulaApp::new(config, keybinds, None);
        let layout = app.router.mux().layout();
        assert_eq!(layout.chrome_height, 64.0);
        assert_eq!(layout.sidebar_width, 300.0);
    }

    #[test]
    fn home_url_comes_from_config() {
        let mut config = NebulaConfig::default();
        config.shell.home_url = "https://start.example.org".into();
        let keybinds = KeybindRegistry::from_config(&config.keybinds);
        let app = NebulaApp::new(config, keybinds, None);
        assert_eq!(app.router.mux().home_url(), "https://start.example.org");
    }
}
