//! Headless host used by the core's tests.

use std::collections::{BTreeMap, HashMap, HashSet};

use nebula_common::{Rect, Size, ViewId, WindowId};

use crate::broadcast::{ui_channel, UiReceiver};
use crate::error::HostError;
use crate::events::OutboundEvent;
use crate::host::{OpenedWindow, RenderEngine, WindowHost};
use crate::registry::LoadGeneration;

/// What the host last did to a view's surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub url: String,
    pub generation: LoadGeneration,
    pub window: Option<WindowId>,
    pub bounds: Option<Rect>,
    pub visible: bool,
    pub loads: usize,
}

/// Records every host call and hands out UI receivers per window.
pub struct RecordingHost {
    next_window: u64,
    pub sizes: HashMap<WindowId, Size>,
    pub ui: BTreeMap<WindowId, UiReceiver>,
    pub surfaces: HashMap<ViewId, Surface>,
    pub destroyed: Vec<ViewId>,
    /// Urls whose load the engine rejects.
    pub failing_urls: HashSet<String>,
    pub refuse_windows: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            next_window: 1,
            sizes: HashMap::new(),
            ui: BTreeMap::new(),
            surfaces: HashMap::new(),
            destroyed: Vec::new(),
            failing_urls: HashSet::new(),
            refuse_windows: false,
        }
    }

    pub fn surface(&self, view: &ViewId) -> &Surface {
        &self.surfaces[view]
    }

    pub fn bounds(&self, view: &ViewId) -> Option<Rect> {
        self.surfaces.get(view).and_then(|s| s.bounds)
    }

    /// Everything delivered to a window's UI since the last drain.
    pub fn drain(&mut self, window: WindowId) -> Vec<OutboundEvent> {
        let mut out = Vec::new();
        if let Some(rx) = self.ui.get_mut(&window) {
            while let Ok(event) = rx.try_recv() {
                out.push(event);
            }
        }
        out
    }

    pub fn drain_all(&mut self) {
        let ids: Vec<_> = self.ui.keys().copied().collect();
        for id in ids {
            self.drain(id);
        }
    }

    /// Simulate the UI layer of a window going away.
    pub fn close_ui(&mut self, window: WindowId) {
        self.ui.remove(&window);
    }

    fn fail_if_rejected(&self, url: &str) -> Result<(), HostError> {
        if self.failing_urls.contains(url) {
            return Err(HostError::new(format!("cannot load {url}")));
        }
        Ok(())
    }
}

impl WindowHost for RecordingHost {
    fn open_window(&mut self) -> Result<OpenedWindow, HostError> {
        if self.refuse_windows {
            return Err(HostError::new("window creation refused"));
        }
        let id = WindowId(self.next_window);
        self.next_window += 1;
        self.sizes.insert(id, Size::new(900.0, 670.0));
        let (tx, rx) = ui_channel();
        self.ui.insert(id, rx);
        Ok(OpenedWindow { id, ui: tx })
    }

    fn inner_size(&self, window: WindowId) -> Option<Size> {
        self.sizes.get(&window).copied()
    }
}

impl RenderEngine for RecordingHost {
    fn create_surface(
        &mut self,
        view: &ViewId,
        url: &str,
        generation: LoadGeneration,
        _origin: Option<WindowId>,
    ) -> Result<(), HostError> {
        self.fail_if_rejected(url)?;
        self.surfaces.insert(
            view.clone(),
            Surface {
                url: url.to_string(),
                generation,
                window: None,
                bounds: None,
                visible: false,
                loads: 1,
            },
        );
        Ok(())
    }

    fn load_url(
        &mut self,
        view: &ViewId,
        url: &str,
        generation: LoadGeneration,
    ) -> Result<(), HostError> {
        self.fail_if_rejected(url)?;
        let surface = self
            .surfaces
            .get_mut(view)
            .ok_or_else(|| HostError::new("no surface"))?;
        surface.url = url.to_string();
        surface.generation = generation;
        surface.loads += 1;
        Ok(())
    }

    fn show_surface(
        &mut self,
        view: &ViewId,
        window: WindowId,
        bounds: Rect,
    ) -> Result<(), HostError> {
        let surface = self
            .surfaces
            .get_mut(view)
            .ok_or_else(|| HostError::new("no surface"))?;
        surface.window = Some(window);
        surface.bounds = Some(bounds);
        surface.visible = true;
        Ok(())
    }

    fn set_surface_bounds(&mut self, view: &ViewId, bounds: Rect) -> Result<(), HostError> {
        let surface = self
            .surfaces
            .get_mut(view)
            .ok_or_else(|| HostError::new("no surface"))?;
        surface.bounds = Some(bounds);
        Ok(())
    }

    fn hide_surface(&mut self, view: &ViewId) {
        if let Some(surface) = self.surfaces.get_mut(view) {
            surface.visible = false;
        }
    }

    fn destroy_surface(&mut self, view: &ViewId) {
        if self.surfaces.remove(view).is_some() {
            self.destroyed.push(view.clone());
        }
    }
}
