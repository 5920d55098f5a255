//! Action dispatch: turns keybind actions and router outcomes into work.

use nebula_common::{Action, ViewId, WindowId};
use nebula_core::{ChromeRequest, Command, Outcome, RouterError};
use winit::event_loop::ActiveEventLoop;

use super::core::NebulaApp;
use super::host::AppHost;

/// What an [`Action`] amounts to on a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ActionEffect {
    Command(Command),
    ToggleFullscreen,
    Quit,
    Nothing,
}

/// Resolve an action against the view `displayed` in the focused window.
pub(super) fn action_effect(action: Action, displayed: Option<ViewId>) -> ActionEffect {
    match action {
        Action::NewWindow => ActionEffect::Command(Command::NewWindow),
        Action::NewView => ActionEffect::Command(Command::NewView { url: None }),
        Action::CloseView => match displayed {
            Some(view) => ActionEffect::Command(Command::CloseView { view }),
            None => ActionEffect::Nothing,
        },
        Action::CopyUrl => ActionEffect::Command(Command::CopyUrl),
        Action::ToggleSidebar => ActionEffect::Command(Command::ToggleSidebar),
        Action::ToggleFullscreen => ActionEffect::ToggleFullscreen,
        Action::Quit => ActionEffect::Quit,
    }
}

impl NebulaApp {
    /// Dispatch a resolved [`Action`] on behalf of `window`.
    pub(super) fn dispatch(&mut self, event_loop: &ActiveEventLoop, window: WindowId, action: Action) {
        tracing::debug!(window = %window, action = action.label(), "dispatch");
        let displayed = self
            .router
            .mux()
            .window(window)
            .ok()
            .and_then(|w| w.displayed_view().cloned());

        match action_effect(action, displayed) {
            ActionEffect::Command(command) => self.run_command(event_loop, window, command),
            ActionEffect::ToggleFullscreen => self.toggle_fullscreen(window),
            ActionEffect::Quit => self.should_exit = true,
            ActionEffect::Nothing => {}
        }
    }

    pub(super) fn run_command(&mut self, event_loop: &ActiveEventLoop, origin: WindowId, command: Command) {
        let result = self.router.handle(
            origin,
            command,
            &mut AppHost::new(&mut self.host, Some(event_loop)),
        );
        self.apply_outcome(Some(event_loop), origin, result);
    }

    /// Carry out what the router left to the host.
    pub(super) fn apply_outcome(
        &mut self,
        event_loop: Option<&ActiveEventLoop>,
        origin: WindowId,
        result: Result<Outcome, RouterError>,
    ) {
        match result {
            Ok(Outcome::Chrome(request)) => self.perform_chrome_request(event_loop, origin, request),
            Ok(Outcome::CopyToClipboard(text)) => match nebula_platform::copy_text(&text) {
                Ok(()) => tracing::debug!(window = %origin, "url copied"),
                Err(e) => tracing::warn!(window = %origin, error = %e, "copy failed"),
            },
            Ok(Outcome::WindowOpened(window)) => self.focused = Some(window),
            Ok(Outcome::ViewCreated(_) | Outcome::Handled) => {}
            Err(e) => tracing::warn!(window = %origin, error = %e, "command failed"),
        }
    }

    fn perform_chrome_request(
        &mut self,
        event_loop: Option<&ActiveEventLoop>,
        window: WindowId,
        request: ChromeRequest,
    ) {
        if request == ChromeRequest::Close {
            self.close_window(event_loop, window);
            return;
        }
        let Some(native) = self.host.windows.get(&window).map(|w| &w.window) else {
            return;
        };
        match request {
            ChromeRequest::Minimize => native.set_minimized(true),
            ChromeRequest::ToggleMaximize => native.set_maximized(!native.is_maximized()),
            ChromeRequest::Close => {}
        }
    }

    fn toggle_fullscreen(&self, window: WindowId) {
        if let Some(app_window) = self.host.windows.get(&window) {
            let w = &app_window.window;
            if w.fullscreen().is_some() {
                w.set_fullscreen(None);
            } else {
                w.set_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
            }
        }
    }

    /// Run the core's cascade for `window`, then drop the native window.
    ///
    /// Every path that closes a window ends here; a second call for the same
    /// window is a no-op.
    pub(super) fn close_window(&mut self, event_loop: Option<&ActiveEventLoop>, window: WindowId) {
        let purged = self
            .router
            .window_closed(window, &mut AppHost::new(&mut self.host, event_loop));
        let existed = self.host.close_native(window);
        if self.focused == Some(window) {
            self.focused = None;
        }
        if existed {
            tracing::info!(window = %window, purged, "window closed");
        }

        if self.host.windows.is_empty() && !cfg!(target_os = "macos") {
            self.should_exit = true;
        }
    }
}
