use std::borrow::Cow;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use nebula_common::WindowId;
use tracing::{debug, warn};
use wry::http::Response;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::{self, ContentProvider};
use crate::events::SurfaceId;
use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::handlers::HandlerContext;
use super::types::{NavigationPolicy, WebViewConfig};
use super::WebViewManager;

impl WebViewManager {
    /// Build a webview for `surface` as a child of `window`, positioned at
    /// `bounds`.
    ///
    /// Chrome surfaces get the IPC bridge; content pages cannot post
    /// commands to the shell.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        surface: SurfaceId,
        parent: WindowId,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let generation = Arc::new(AtomicU64::new(config.generation));
        let ctx = HandlerContext {
            events: Arc::clone(&self.events),
            surface: surface.clone(),
            generation: Arc::clone(&generation),
        };

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_visible(config.visible)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_focused(false);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        if config.policy == NavigationPolicy::Chrome {
            builder = builder.with_initialization_script(IPC_INIT_SCRIPT);
            builder = Self::attach_ipc_handler(builder, ctx.clone());
        }

        builder = Self::attach_page_load_handler(builder, ctx.clone());
        builder = Self::attach_title_handler(builder, ctx.clone());
        builder = Self::attach_navigation_handler(builder, ctx.clone(), config.policy);
        builder = Self::attach_new_window_handler(builder, ctx);
        builder = self.attach_custom_protocol(builder);

        let webview = builder.with_url(&config.url).build_as_child(window)?;

        debug!(surface = %surface, window = %parent, url = %config.url, "WebView created");

        Ok(WebViewHandle {
            webview,
            surface,
            parent,
            generation,
            current_url: config.url,
        })
    }

    /// Serve bundled assets via `nebula://`.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn attach_custom_protocol<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        let Some(provider) = &self.content_provider else {
            return builder;
        };
        let cp = Arc::clone(provider);
        builder.with_custom_protocol(content::SCHEME.to_string(), move |_wv_id, request| {
            let uri = request.uri().to_string();
            let path = content::request_path(&uri);

            match cp.resolve(path) {
                Some((mime, data)) => Response::builder()
                    .status(200)
                    .header("Content-Type", mime.as_ref())
                    .header("Access-Control-Allow-Origin", "nebula://localhost")
                    .body(Cow::from(data.into_owned()))
                    .unwrap_or_else(|_| Response::new(Cow::from(Vec::new()))),
                None => {
                    warn!(path = %path, "custom protocol: asset not found");
                    let mut response = Response::new(Cow::from(b"Not Found".to_vec()));
                    *response.status_mut() = wry::http::StatusCode::NOT_FOUND;
                    response
                }
            }
        })
    }
}
