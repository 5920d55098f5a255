//! Draining webview events: chrome IPC, chrome readiness, and engine
//! callbacks for content views.

use nebula_common::ViewId;
use nebula_core::{EngineEvent, LoadGeneration};
use nebula_webview::{PageLoadState, SurfaceId, WebViewEvent};
use winit::event_loop::ActiveEventLoop;

use crate::app_state::core::NebulaApp;
use crate::app_state::host::AppHost;

// =============================================================================
// ENGINE EVENT TRANSLATION
// =============================================================================

/// Map a content surface's webview event to the core's engine event.
///
/// `PageLoad` is expected to have been filtered down to url changes.
pub(super) fn to_engine_event(view: ViewId, event: WebViewEvent) -> Option<EngineEvent> {
    match event {
        WebViewEvent::PageLoad {
            generation, url, ..
        } => Some(EngineEvent::Navigated {
            view,
            generation: LoadGeneration(generation),
            url,
        }),
        WebViewEvent::TitleChanged {
            generation, title, ..
        } => Some(EngineEvent::TitleChanged {
            view,
            generation: LoadGeneration(generation),
            title,
        }),
        WebViewEvent::NavigationBlocked {
            generation, url, ..
        } => Some(EngineEvent::LoadFailed {
            view,
            generation: LoadGeneration(generation),
            reason: format!("navigation to {url} is not allowed"),
        }),
        WebViewEvent::NewWindowRequested { url, .. } => Some(EngineEvent::OpenRequested { view, url }),
        WebViewEvent::IpcMessage { .. } | WebViewEvent::Closed { .. } => None,
    }
}

// =============================================================================
// POLLING
// =============================================================================

impl NebulaApp {
    /// Drain and route every queued webview event.
    pub(in crate::app_state) fn poll_webview_events(&mut self, event_loop: &ActiveEventLoop) {
        for event in self.host.webviews.drain_events() {
            match event.surface().clone() {
                SurfaceId::Chrome(window) => self.handle_chrome_event(event_loop, window, event),
                SurfaceId::View(view) => self.handle_content_event(event_loop, view, event),
            }
        }
    }

    fn handle_chrome_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window: nebula_common::WindowId,
        event: WebViewEvent,
    ) {
        match event {
            WebViewEvent::IpcMessage { body, .. } => {
                self.handle_ipc_message(event_loop, window, &body)
            }
            WebViewEvent::PageLoad { state, url, .. } => {
                tracing::debug!(window = %window, ?state, url = %url, "chrome page load");
                if let Some(app_window) = self.host.windows.get_mut(&window) {
                    app_window.ui.set_ready(state == PageLoadState::Finished);
                }
            }
            WebViewEvent::NavigationBlocked { url, .. } => {
                tracing::warn!(window = %window, url = %url, "chrome navigation blocked");
            }
            other => tracing::debug!(window = %window, event = ?other, "chrome event ignored"),
        }
    }

    fn handle_content_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        view: ViewId,
        event: WebViewEvent,
    ) {
        if let WebViewEvent::PageLoad { url, .. } = &event {
            // Started and Finished both report the url; only changes matter.
            let surface = SurfaceId::View(view.clone());
            match self.host.webviews.get_mut(&surface) {
                Some(handle) if handle.current_url() != url => handle.set_current_url(url.as_str()),
                _ => return,
            }
        }

        let Some(engine_event) = to_engine_event(view, event) else {
            return;
        };
        self.router.handle_engine_event(
            engine_event,
            &mut AppHost::new(&mut self.host, Some(event_loop)),
        );
    }
}

// =============================================================================
// TESTS
// =============================================================================
