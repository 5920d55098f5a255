use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, SurfaceId, WebViewEvent};

use super::types::NavigationPolicy;
use super::{EventQueue, WebViewManager};

// =============================================================================
// NAVIGATION ALLOWLISTS
// =============================================================================

/// Prefixes a chrome surface may navigate to.
///
/// WebView2 on Windows rewrites `nebula://localhost/…` to
/// `http://nebula.localhost/…`.
pub const CHROME_NAV_PREFIXES: &[&str] = &["nebula://", "http://nebula.localhost/", "about:blank"];

/// Schemes a content surface may navigate to.
pub const CONTENT_NAV_SCHEMES: &[&str] = &["http:", "https:", "about:", "data:", "blob:"];

impl NavigationPolicy {
    pub fn allows(self, url: &str) -> bool {
        match self {
            Self::Chrome => CHROME_NAV_PREFIXES
                .iter()
                .any(|prefix| url.starts_with(prefix)),
            Self::Content => {
                let lower = url.trim_start().to_ascii_lowercase();
                CONTENT_NAV_SCHEMES
                    .iter()
                    .any(|scheme| lower.starts_with(scheme))
            }
        }
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

/// Everything a handler closure needs to tag and queue its events.
#[derive(Clone)]
pub(super) struct HandlerContext {
    pub events: EventQueue,
    pub surface: SurfaceId,
    pub generation: Arc<AtomicU64>,
}

impl HandlerContext {
    fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn push(&self, event: WebViewEvent) {
        match self.events.lock() {
            Ok(mut evts) => evts.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        ctx: HandlerContext,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(
                    surface = %ctx.surface,
                    body_len = body.len(),
                    "IPC message rejected: invalid JSON"
                );
                return;
            }

            debug!(surface = %ctx.surface, body_len = body.len(), "IPC message from JS");
            ctx.push(WebViewEvent::IpcMessage {
                surface: ctx.surface.clone(),
                body,
            });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        ctx: HandlerContext,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            let generation = ctx.generation();
            debug!(surface = %ctx.surface, generation, ?state, url = %url, "page load");
            ctx.push(WebViewEvent::PageLoad {
                surface: ctx.surface.clone(),
                generation,
                state,
                url,
            });
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        ctx: HandlerContext,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            let generation = ctx.generation();
            debug!(surface = %ctx.surface, generation, title = %title, "title changed");
            ctx.push(WebViewEvent::TitleChanged {
                surface: ctx.surface.clone(),
                generation,
                title,
            });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        ctx: HandlerContext,
        policy: NavigationPolicy,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if policy.allows(&url) {
                return true;
            }
            warn!(surface = %ctx.surface, url = %url, "navigation blocked");
            ctx.push(WebViewEvent::NavigationBlocked {
                surface: ctx.surface.clone(),
                generation: ctx.generation(),
                url,
            });
            false
        })
    }

    /// Popups never get a native window of their own; they are queued so the
    /// shell can open them as views.
    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        ctx: HandlerContext,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            debug!(surface = %ctx.surface, url = %url, "new window requested");
            ctx.push(WebViewEvent::NewWindowRequested {
                surface: ctx.surface.clone(),
                url,
            });
            false
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
