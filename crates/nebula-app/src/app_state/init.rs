//! Window creation and webview setup.

use std::path::PathBuf;

use nebula_config::schema::{WebViewSettings, WindowConfig};
use nebula_webview::{ContentProvider, WebViewConfig, WebViewManager};
use winit::window::WindowAttributes;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Bundled chrome assets, relative to the executable or working directory.
const ASSETS_DIR: &str = "assets";

// =============================================================================
// INITIALIZATION
// =============================================================================

/// Locate the bundled assets: next to the executable, then the working
/// directory, then the source tree.
pub(super) fn assets_dir() -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(ASSETS_DIR)));
    let in_cwd = std::env::current_dir().ok().map(|dir| dir.join(ASSETS_DIR));
    let in_tree = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join(ASSETS_DIR);

    beside_exe
        .into_iter()
        .chain(in_cwd)
        .find(|dir| dir.is_dir())
        .unwrap_or(in_tree)
}

/// The webview manager with the `nebula://` protocol wired to the assets.
pub(super) fn webview_manager() -> WebViewManager {
    let assets = assets_dir();
    if !assets.is_dir() {
        tracing::warn!(
            path = %assets.display(),
            "Assets directory not found, the chrome will not load"
        );
    }

    let mut manager = WebViewManager::new();
    manager.set_content_provider(ContentProvider::new(&assets));
    tracing::info!(assets_dir = %assets.display(), "WebView manager initialized");
    manager
}

/// Attributes for every top-level window.
pub(super) fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    let attrs = WindowAttributes::default()
        .with_title(config.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            f64::from(config.width),
            f64::from(config.height),
        ));

    // macOS: traffic lights float over the chrome page
    #[cfg(target_os = "macos")]
    let attrs = {
        use winit::platform::macos::WindowAttributesExtMacOS;
        if config.hidden_titlebar {
            attrs
                .with_titlebar_transparent(true)
                .with_title_hidden(true)
                .with_fullsize_content_view(true)
        } else {
            attrs
        }
    };

    attrs
}

/// Settings for a content surface starting load `generation` of `url`.
pub(super) fn content_config(
    settings: &WebViewSettings,
    url: &str,
    generation: u64,
    visible: bool,
) -> WebViewConfig {
    WebViewConfig {
        visible,
        devtools: settings.devtools || cfg!(debug_assertions),
        user_agent: settings.user_agent.clone(),
        clipboard: settings.clipboard,
        autoplay: settings.autoplay,
        ..WebViewConfig::content(url, generation)
    }
}

/// Settings for a window's chrome surface.
pub(super) fn chrome_config(settings: &WebViewSettings) -> WebViewConfig {
    WebViewConfig {
        devtools: settings.devtools || cfg!(debug_assertions),
        ..WebViewConfig::chrome(nebula_webview::content::CHROME_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nebula_webview::NavigationPolicy;

    #[test]
    fn content_config_carries_settings() {
        let settings = WebViewSettings {
            user_agent: Some("NebulaTest/1".into()),
            devtools: true,
            autoplay: true,
            clipboard: false,
        };
        let cfg = content_config(&settings, "https://example.com", 3, true);
        assert_eq!(cfg.url, "https://example.com");
        assert_eq!(cfg.generation, 3);
        assert!(cfg.visible);
        assert!(cfg.devtools);
        assert!(cfg.autoplay);
        assert!(!cfg.clipboard);
        assert_eq!(cfg.user_agent.as_deref(), Some("NebulaTest/1"));
        assert_eq!(cfg.policy, NavigationPolicy::Content);
    }

    #[test]
    fn chrome_config_loads_bundled_page() {
        let cfg = chrome_config(&WebViewSettings::default());
        assert_eq!(cfg.url, "nebula://localhost/chrome/index.html");
        assert_eq!(cfg.policy, NavigationPolicy::Chrome);
        assert!(cfg.visible);
    }

    #[test]
    fn source_tree_assets_exist() {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../..")
            .join(ASSETS_DIR)
            .join("chrome/index.html");
        assert!(dir.is_file(), "missing {}", dir.display());
    }
}
