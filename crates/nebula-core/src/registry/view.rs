use std::collections::HashMap;

use nebula_common::{ShellError, ViewId, ViewSnapshot, WindowId};

/// Counter tagging each load a view performs.
///
/// Engine callbacks carry the generation that was current when they were
/// raised; anything older than the view's current generation is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadGeneration(pub u64);

impl LoadGeneration {
    pub const INITIAL: LoadGeneration = LoadGeneration(1);

    pub fn next(self) -> Self {
        LoadGeneration(self.0.saturating_add(1))
    }
}

impl Default for LoadGeneration {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// A live content view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRecord {
    pub(crate) id: ViewId,
    pub(crate) url: String,
    pub(crate) title: String,
    pub(crate) owner: Option<WindowId>,
    pub(crate) origin: Option<WindowId>,
    pub(crate) generation: LoadGeneration,
    pub(crate) last_error: Option<String>,
}

impl ViewRecord {
    pub fn id(&self) -> &ViewId {
        &self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Window currently displaying this view, if any.
    pub fn owner(&self) -> Option<WindowId> {
        self.owner
    }

    /// Window whose tab strip lists this view: the one that created it, or
    /// the last one to display it.
    pub fn origin(&self) -> Option<WindowId> {
        self.origin
    }

    pub fn generation(&self) -> LoadGeneration {
        self.generation
    }

    /// Reason of the most recent failed load, cleared by the next navigation.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            id: self.id.clone(),
            url: self.url.clone(),
            title: self.title.clone(),
        }
    }
}

/// Owns every live view. Has no knowledge of windows beyond the owner field.
#[derive(Debug, Default)]
pub struct ViewRegistry {
    views: HashMap<ViewId, ViewRecord>,
    /// Creation order, so tab strips list views stably.
    order: Vec<ViewId>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &ViewId) -> Result<&ViewRecord, ShellError> {
        self.views
            .get(id)
            .ok_or_else(|| ShellError::ViewNotFound(id.clone()))
    }

    pub fn contains(&self, id: &ViewId) -> bool {
        self.views.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Views in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &ViewRecord> {
        self.order.iter().filter_map(|id| self.views.get(id))
    }

    /// Ids of views that go away with `window`: the one it displays and the
    /// background views it lists.
    pub fn belonging_to(&self, window: WindowId) -> Vec<ViewId> {
        self.iter()
            .filter(|v| match v.owner {
                Some(owner) => owner == window,
                None => v.origin == Some(window),
            })
            .map(|v| v.id.clone())
            .collect()
    }

    /// Register a detached view whose title starts out as its url.
    pub(crate) fn create(
        &mut self,
        url: impl Into<String>,
        origin: Option<WindowId>,
    ) -> ViewId {
        let id = ViewId::new();
        let url = url.into();
        let record = ViewRecord {
            id: id.clone(),
            title: url.clone(),
            url,
            owner: None,
            origin,
            generation: LoadGeneration::INITIAL,
            last_error: None,
        };
        self.views.insert(id.clone(), record);
        self.order.push(id.clone());
        id
    }

    fn get_mut(&mut self, id: &ViewId) -> Result<&mut ViewRecord, ShellError> {
        self.views
            .get_mut(id)
            .ok_or_else(|| ShellError::ViewNotFound(id.clone()))
    }

    pub(crate) fn update_title(
        &mut self,
        id: &ViewId,
        title: impl Into<String>,
    ) -> Result<(), ShellError> {
        self.get_mut(id)?.title = title.into();
        Ok(())
    }

    pub(crate) fn update_url(
        &mut self,
        id: &ViewId,
        url: impl Into<String>,
    ) -> Result<(), ShellError> {
        self.get_mut(id)?.url = url.into();
        Ok(())
    }

    /// Record a new navigation: set the url and advance the generation.
    pub(crate) fn begin_load(
        &mut self,
        id: &ViewId,
        url: impl Into<String>,
    ) -> Result<LoadGeneration, ShellError> {
        let view = self.get_mut(id)?;
        view.url = url.into();
        view.generation = view.generation.next();
        view.last_error = None;
        Ok(view.generation)
    }

    pub(crate) fn set_owner(
        &mut self,
        id: &ViewId,
        owner: Option<WindowId>,
    ) -> Result<(), ShellError> {
        let view = self.get_mut(id)?;
        view.owner = owner;
        if owner.is_some() {
            view.origin = owner;
        }
        Ok(())
    }

    pub(crate) fn record_error(
        &mut self,
        id: &ViewId,
        reason: impl Into<String>,
    ) -> Result<(), ShellError> {
        self.get_mut(id)?.last_error = Some(reason.into());
        Ok(())
    }

    /// Remove a view. Absent ids are a no-op.
    pub(crate) fn remove(&mut self, id: &ViewId) -> Option<ViewRecord> {
        let removed = self.views.remove(id)?;
        self.order.retain(|v| v != id);
        Some(removed)
    }
}
