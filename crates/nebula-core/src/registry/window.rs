use std::collections::BTreeMap;

use nebula_common::{ShellError, ViewId, WindowId};

/// Layout state of one top-level window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub(crate) id: WindowId,
    pub(crate) sidebar_visible: bool,
    pub(crate) displayed_view: Option<ViewId>,
}

impl WindowRecord {
    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn sidebar_visible(&self) -> bool {
        self.sidebar_visible
    }

    pub fn displayed_view(&self) -> Option<&ViewId> {
        self.displayed_view.as_ref()
    }
}

/// Owns every live window record.
///
/// Window ids come from the host windowing layer; the registry only tracks
/// them. Ordered so broadcasts visit windows deterministically.
#[derive(Debug, Default)]
pub struct WindowRegistry {
    windows: BTreeMap<WindowId, WindowRecord>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: WindowId) -> Result<&WindowRecord, ShellError> {
        self.windows.get(&id).ok_or(ShellError::WindowNotFound(id))
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    pub fn ids(&self) -> Vec<WindowId> {
        self.windows.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.values()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Track a window the host just created. Re-registering an id keeps the
    /// existing record.
    pub(crate) fn create(&mut self, id: WindowId) -> WindowId {
        self.windows.entry(id).or_insert(WindowRecord {
            id,
            sidebar_visible: false,
            displayed_view: None,
        });
        id
    }

    fn get_mut(&mut self, id: WindowId) -> Result<&mut WindowRecord, ShellError> {
        self.windows
            .get_mut(&id)
            .ok_or(ShellError::WindowNotFound(id))
    }

    pub(crate) fn set_sidebar(&mut self, id: WindowId, visible: bool) -> Result<(), ShellError> {
        self.get_mut(id)?.sidebar_visible = visible;
        Ok(())
    }

    /// Replace the displayed view, returning the one it replaced.
    pub(crate) fn set_displayed_view(
        &mut self,
        id: WindowId,
        view: Option<ViewId>,
    ) -> Result<Option<ViewId>, ShellError> {
        let window = self.get_mut(id)?;
        Ok(std::mem::replace(&mut window.displayed_view, view))
    }

    /// Remove a window. Absent ids are a no-op.
    pub(crate) fn remove(&mut self, id: WindowId) -> Option<WindowRecord> {
        self.windows.remove(&id)
    }
}
