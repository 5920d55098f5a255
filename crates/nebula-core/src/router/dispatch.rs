use nebula_common::{ShellError, ViewId, WindowId};
use tracing::{debug, info, warn};

use super::Command;
use crate::address;
use crate::error::RouterError;
use crate::events::{EngineEvent, OutboundEvent};
use crate::host::ShellHost;
use crate::mux::Multiplexer;

/// Window chrome operations the host performs itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeRequest {
    Close,
    Minimize,
    ToggleMaximize,
}

/// What a handled command asks of the host, if anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Handled,
    WindowOpened(WindowId),
    ViewCreated(ViewId),
    Chrome(ChromeRequest),
    /// Put this text on the system clipboard.
    CopyToClipboard(String),
}

pub struct CommandRouter {
    mux: Multiplexer,
    /// Search template with a `{query}` slot for non-URL address input.
    search_url: String,
}

impl CommandRouter {
    pub fn new(mux: Multiplexer, search_url: impl Into<String>) -> Self {
        Self {
            mux,
            search_url: search_url.into(),
        }
    }

    pub fn mux(&self) -> &Multiplexer {
        &self.mux
    }

    /// Parse and apply a raw IPC message from `origin`.
    pub fn handle_ipc(
        &mut self,
        origin: WindowId,
        kind: &str,
        payload: &serde_json::Value,
        host: &mut dyn ShellHost,
    ) -> Result<Outcome, RouterError> {
        let command = Command::parse(kind, payload)?;
        self.handle(origin, command, host)
    }

    /// Apply a command on behalf of the window that sent it.
    pub fn handle(
        &mut self,
        origin: WindowId,
        command: Command,
        host: &mut dyn ShellHost,
    ) -> Result<Outcome, RouterError> {
        debug!(window = %origin, kind = command.kind(), "command");
        let outcome = match command {
            Command::NewWindow => Outcome::WindowOpened(self.open_window(None, host)?),
            Command::NewView { url } => {
                let url = url.map(|u| self.resolve(&u));
                Outcome::ViewCreated(self.mux.create_view(url.as_deref(), Some(origin), host))
            }
            Command::RequestView { view } => {
                self.mux.attach_view(origin, &view, host)?;
                Outcome::Handled
            }
            Command::Navigate { view, url } => {
                let url = self.resolve(&url);
                self.mux.navigate(&view, &url, host)?;
                Outcome::Handled
            }
            Command::CloseView { view } => {
                self.mux.close_view(&view, host);
                Outcome::Handled
            }
            Command::SidebarOn => {
                self.mux.set_sidebar(origin, true, host)?;
                Outcome::Handled
            }
            Command::SidebarOff => {
                self.mux.set_sidebar(origin, false, host)?;
                Outcome::Handled
            }
            Command::ToggleSidebar => {
                self.mux.toggle_sidebar(origin, host)?;
                Outcome::Handled
            }
            Command::CopyUrl => match self.mux.displayed_url(origin)? {
                Some(url) => Outcome::CopyToClipboard(url.to_string()),
                None => Outcome::Handled,
            },
            // The host closes the window; `window_closed` runs the cascade
            // when its close notification comes back.
            Command::CloseWindow => Outcome::Chrome(ChromeRequest::Close),
            Command::MinimizeWindow => Outcome::Chrome(ChromeRequest::Minimize),
            Command::MaximizeWindow => Outcome::Chrome(ChromeRequest::ToggleMaximize),
            Command::Ping => {
                self.mux.send_to(origin, OutboundEvent::Pong);
                Outcome::Handled
            }
        };
        Ok(outcome)
    }

    /// Open a window with a fresh view displayed in it.
    ///
    /// `url` overrides the home address for that first view.
    pub fn open_window(
        &mut self,
        url: Option<&str>,
        host: &mut dyn ShellHost,
    ) -> Result<WindowId, RouterError> {
        let opened = host.open_window()?;
        let window = self.mux.register_window(opened);
        let url = url.map(|u| self.resolve(u));
        let view = self.mux.create_view(url.as_deref(), Some(window), host);
        self.mux.attach_view(window, &view, host)?;
        info!(window = %window, view = %view, "window opened");
        Ok(window)
    }

    /// Apply a rendering-engine callback.
    pub fn handle_engine_event(&mut self, event: EngineEvent, host: &mut dyn ShellHost) {
        match event {
            EngineEvent::OpenRequested { view, url } => {
                let owner = self
                    .mux
                    .view(&view)
                    .ok()
                    .and_then(|v| v.owner().or(v.origin()));
                let created = self.mux.create_view(Some(&url), owner, host);
                debug!(from = %view, view = %created, url = %url, "popup opened as view");
            }
            other => {
                self.mux.apply_engine_event(other);
            }
        }
    }

    /// Host notification: a window is gone. Safe to deliver more than once.
    pub fn window_closed(&mut self, window: WindowId, host: &mut dyn ShellHost) -> usize {
        self.mux.close_window(window, host)
    }

    /// Host notification: a window changed size.
    pub fn window_resized(&mut self, window: WindowId, host: &mut dyn ShellHost) {
        match self.mux.relayout(window, host) {
            Ok(_) => {}
            Err(ShellError::WindowNotFound(_)) => {
                debug!(window = %window, "resize for untracked window ignored")
            }
            Err(e) => warn!(window = %window, error = %e, "relayout failed"),
        }
    }

    fn resolve(&self, input: &str) -> String {
        address::resolve_input(input, &self.search_url)
    }
}
