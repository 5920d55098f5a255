//! The core's host traits over winit windows and wry webviews.

use std::sync::Arc;

use nebula_common::{Rect, Size, ViewId, WindowId};
use nebula_core::{ui_channel, HostError, LoadGeneration, OpenedWindow, RenderEngine, WindowHost};
use nebula_webview::SurfaceId;
use tracing::{debug, info, warn};
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use super::core::HostState;
use super::init::{chrome_config, content_config, window_attributes};
use super::types::{AppWindow, ParkedSurface};
use super::webview_bridge::bounds::{full_window, rect_to_wry};

fn engine_error(e: impl std::fmt::Display) -> HostError {
    HostError::new(e.to_string())
}

/// Inner size of a native window in logical pixels.
pub(super) fn logical_size(window: &Window) -> Size {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    Size::new(size.width, size.height)
}

/// Host handed to the router for the duration of one call.
///
/// Without an event loop (shutdown, tests) no window can be opened.
pub(super) struct AppHost<'a> {
    state: &'a mut HostState,
    event_loop: Option<&'a ActiveEventLoop>,
}

impl<'a> AppHost<'a> {
    pub fn new(state: &'a mut HostState, event_loop: Option<&'a ActiveEventLoop>) -> Self {
        Self { state, event_loop }
    }
}

impl WindowHost for AppHost<'_> {
    fn open_window(&mut self) -> Result<OpenedWindow, HostError> {
        let event_loop = self
            .event_loop
            .ok_or_else(|| HostError::new("no event loop to create a window on"))?;
        let attrs = window_attributes(&self.state.window_config);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| HostError::new(format!("failed to create window: {e}")))?,
        );

        let id = WindowId(self.state.next_window + 1);
        let bounds = full_window(logical_size(&window));
        self.state
            .webviews
            .create(
                SurfaceId::Chrome(id),
                id,
                window.as_ref(),
                bounds,
                chrome_config(&self.state.webview_settings),
            )
            .map_err(engine_error)?;
        self.state.next_window = id.0;

        let (ui, receiver) = ui_channel();
        self.state.native.insert(window.id(), id);
        self.state.windows.insert(id, AppWindow::new(window, receiver));
        info!(window = %id, "native window created");
        Ok(OpenedWindow { id, ui })
    }

    fn inner_size(&self, window: WindowId) -> Option<Size> {
        self.state
            .windows
            .get(&window)
            .map(|w| logical_size(&w.window))
    }
}

impl RenderEngine for AppHost<'_> {
    fn create_surface(
        &mut self,
        view: &ViewId,
        url: &str,
        generation: LoadGeneration,
        origin: Option<WindowId>,
    ) -> Result<(), HostError> {
        match origin.filter(|w| self.state.windows.contains_key(w)) {
            Some(parent) => {
                self.state
                    .build_content(view, parent, url, generation.0, Rect::zero(), false)
            }
            None => {
                debug!(view = %view, "no window for new surface, parked");
                self.state.parked.insert(
                    view.clone(),
                    ParkedSurface {
                        url: url.to_string(),
                        generation: generation.0,
                    },
                );
                Ok(())
            }
        }
    }

    fn load_url(
        &mut self,
        view: &ViewId,
        url: &str,
        generation: LoadGeneration,
    ) -> Result<(), HostError> {
        let surface = SurfaceId::View(view.clone());
        if let Some(handle) = self.state.webviews.get_mut(&surface) {
            return handle.load_url(url, generation.0).map_err(engine_error);
        }
        if let Some(parked) = self.state.parked.get_mut(view) {
            parked.url = url.to_string();
            parked.generation = generation.0;
            return Ok(());
        }
        Err(HostError::new(format!("no surface for view {view}")))
    }

    fn show_surface(
        &mut self,
        view: &ViewId,
        window: WindowId,
        bounds: Rect,
    ) -> Result<(), HostError> {
        let surface = SurfaceId::View(view.clone());
        if let Some(handle) = self.state.webviews.get_mut(&surface) {
            if handle.parent() == window {
                handle.set_bounds(rect_to_wry(&bounds)).map_err(engine_error)?;
                return handle.set_visible(true).map_err(engine_error);
            }
            // A child webview cannot change native parent; rebuild it in the
            // target window at the url it had reached.
            let parked = ParkedSurface {
                url: handle.current_url().to_string(),
                generation: handle.generation(),
            };
            debug!(view = %view, from = %handle.parent(), to = %window, "moving surface");
            self.state.webviews.destroy(&surface);
            self.state.parked.insert(view.clone(), parked);
        }

        let parked = self
            .state
            .parked
            .remove(view)
            .ok_or_else(|| HostError::new(format!("no surface for view {view}")))?;
        let built = self
            .state
            .build_content(view, window, &parked.url, parked.generation, bounds, true);
        if built.is_err() {
            self.state.parked.insert(view.clone(), parked);
        }
        built
    }

    fn set_surface_bounds(&mut self, view: &ViewId, bounds: Rect) -> Result<(), HostError> {
        self.state
            .webviews
            .require_mut(&SurfaceId::View(view.clone()))
            .map_err(engine_error)?
            .set_bounds(rect_to_wry(&bounds))
            .map_err(engine_error)
    }

    fn hide_surface(&mut self, view: &ViewId) {
        if let Some(handle) = self.state.webviews.get_mut(&SurfaceId::View(view.clone())) {
            if let Err(e) = handle.set_visible(false) {
                warn!(view = %view, error = %e, "failed to hide surface");
            }
        }
    }

    fn destroy_surface(&mut self, view: &ViewId) {
        self.state.webviews.destroy(&SurfaceId::View(view.clone()));
        self.state.parked.remove(view);
    }
}

impl HostState {
    /// Build a content webview for `view` inside `parent`.
    fn build_content(
        &mut self,
        view: &ViewId,
        parent: WindowId,
        url: &str,
        generation: u64,
        bounds: Rect,
        visible: bool,
    ) -> Result<(), HostError> {
        let window = self
            .windows
            .get(&parent)
            .map(|w| Arc::clone(&w.window))
            .ok_or_else(|| HostError::new(format!("window {parent} is gone")))?;
        let config = content_config(&self.webview_settings, url, generation, visible);
        self.webviews
            .create(
                SurfaceId::View(view.clone()),
                parent,
                window.as_ref(),
                rect_to_wry(&bounds),
                config,
            )
            .map_err(engine_error)
    }

    /// Tear down a native window after the core has run its cascade.
    ///
    /// Views that survived the cascade (detached ones parented here) are
    /// parked. Returns `false` if the window was already gone.
    pub fn close_native(&mut self, window: WindowId) -> bool {
        for surface in self.webviews.surfaces_in(window) {
            if let SurfaceId::View(view) = &surface {
                if let Some(handle) = self.webviews.get(&surface) {
                    self.parked.insert(
                        view.clone(),
                        ParkedSurface {
                            url: handle.current_url().to_string(),
                            generation: handle.generation(),
                        },
                    );
                }
            }
            self.webviews.destroy(&surface);
        }

        match self.windows.remove(&window) {
            Some(app_window) => {
                self.native.remove(&app_window.window.id());
                true
            }
            None => false,
        }
    }

    /// Stretch the chrome surface over the whole window again.
    pub fn resize_chrome(&mut self, window: WindowId) {
        let Some(size) = self.windows.get(&window).map(|w| logical_size(&w.window)) else {
            return;
        };
        if let Some(handle) = self.webviews.get(&SurfaceId::Chrome(window)) {
            if let Err(e) = handle.set_bounds(full_window(size)) {
                warn!(window = %window, error = %e, "failed to resize chrome");
            }
        }
    }
}
