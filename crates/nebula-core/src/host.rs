//! Traits at the boundary to the windowing layer and the rendering engine.
//!
//! The core never touches a native window or webview. It asks the host to
//! create windows and reports what each view surface should do; the host
//! reports back through [`EngineEvent`](crate::events::EngineEvent)s and the
//! window-closed / resized notifications on the router.

use nebula_common::{Rect, Size, ViewId, WindowId};

use crate::broadcast::UiSender;
use crate::error::HostError;
use crate::registry::LoadGeneration;

/// A window freshly created by the host, with the endpoint of its UI layer.
pub struct OpenedWindow {
    pub id: WindowId,
    pub ui: UiSender,
}

pub trait WindowHost {
    /// Create a top-level window and its UI layer.
    fn open_window(&mut self) -> Result<OpenedWindow, HostError>;

    /// Current inner size of a window in logical pixels. `None` when the
    /// host no longer knows the window.
    fn inner_size(&self, window: WindowId) -> Option<Size>;
}

pub trait RenderEngine {
    /// Create the render surface for a new view and start loading `url`.
    /// The surface starts hidden. `origin` hints at which window will most
    /// likely display it.
    fn create_surface(
        &mut self,
        view: &ViewId,
        url: &str,
        generation: LoadGeneration,
        origin: Option<WindowId>,
    ) -> Result<(), HostError>;

    /// Start loading `url`, superseding any load in flight.
    fn load_url(
        &mut self,
        view: &ViewId,
        url: &str,
        generation: LoadGeneration,
    ) -> Result<(), HostError>;

    /// Show the surface inside `window` at `bounds`, moving it there if it
    /// lives elsewhere.
    fn show_surface(&mut self, view: &ViewId, window: WindowId, bounds: Rect)
        -> Result<(), HostError>;

    fn set_surface_bounds(&mut self, view: &ViewId, bounds: Rect) -> Result<(), HostError>;

    fn hide_surface(&mut self, view: &ViewId);

    fn destroy_surface(&mut self, view: &ViewId);
}

/// Everything the multiplexer needs from its host.
pub trait ShellHost: WindowHost + RenderEngine {}

impl<T: WindowHost + RenderEngine> ShellHost for T {}
