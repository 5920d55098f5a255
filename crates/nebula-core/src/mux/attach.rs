//! Attaching views to windows and keeping their geometry current.

use nebula_common::{Rect, ShellError, Size, ViewId, WindowId};
use tracing::{debug, warn};

use super::Multiplexer;
use crate::events::OutboundEvent;
use crate::host::ShellHost;

impl Multiplexer {
    /// Display `view` in `window`.
    ///
    /// A view shown elsewhere is taken from its previous window, which is
    /// told with `view-detached`, and the view `window` was showing is
    /// detached. Both sides of the link change in this one call. The
    /// requesting window receives a metadata snapshot.
    pub fn attach_view(
        &mut self,
        window: WindowId,
        view: &ViewId,
        host: &mut dyn ShellHost,
    ) -> Result<Rect, ShellError> {
        self.windows.get(window)?;
        let previous_owner = self.views.get(view)?.owner();

        let taken_from = previous_owner.filter(|&w| w != window);
        if let Some(previous) = taken_from {
            if self.windows.contains(previous) {
                self.windows.set_displayed_view(previous, None)?;
            }
            debug!(view = %view, from = %previous, to = %window, "view moved between windows");
        }

        let displaced = self.windows.set_displayed_view(window, Some(view.clone()))?;
        if let Some(displaced) = displaced.filter(|d| d != view) {
            // The displaced view keeps living in the background.
            if self.views.contains(&displaced) {
                self.views.set_owner(&displaced, None)?;
            }
            host.hide_surface(&displaced);
        }
        self.views.set_owner(view, Some(window))?;
        debug_assert!(self.verify_links().is_ok());

        let bounds = self.bounds_for(window, host)?;
        if let Err(e) = host.show_surface(view, window, bounds) {
            warn!(view = %view, window = %window, error = %e, "failed to show view surface");
        }
        debug!(view = %view, window = %window, ?bounds, "view attached");

        if let Some(previous) = taken_from {
            self.send_to(previous, OutboundEvent::ViewDetached { id: view.clone() });
        }
        let snapshot = self.views.get(view)?.snapshot();
        self.send_to(window, OutboundEvent::ViewMetadata(snapshot));
        Ok(bounds)
    }

    /// Unbind `view` from whatever window displays it. Returns that window.
    pub fn detach_view(
        &mut self,
        view: &ViewId,
        host: &mut dyn ShellHost,
    ) -> Result<Option<WindowId>, ShellError> {
        let Some(owner) = self.views.get(view)?.owner() else {
            return Ok(None);
        };
        if self.windows.contains(owner) {
            self.windows.set_displayed_view(owner, None)?;
        }
        self.views.set_owner(view, None)?;
        host.hide_surface(view);
        debug!(view = %view, window = %owner, "view detached");
        Ok(Some(owner))
    }

    /// Recompute and apply the bounds of the view displayed in `window`.
    pub fn relayout(
        &mut self,
        window: WindowId,
        host: &mut dyn ShellHost,
    ) -> Result<Option<Rect>, ShellError> {
        let Some(view) = self.windows.get(window)?.displayed_view().cloned() else {
            return Ok(None);
        };
        let bounds = self.bounds_for(window, host)?;
        if let Err(e) = host.set_surface_bounds(&view, bounds) {
            warn!(view = %view, window = %window, error = %e, "failed to resize view surface");
        }
        Ok(Some(bounds))
    }

    /// Content rectangle of `window`, from its size as the host reports it now.
    pub(super) fn bounds_for(
        &self,
        window: WindowId,
        host: &dyn ShellHost,
    ) -> Result<Rect, ShellError> {
        let sidebar = self.windows.get(window)?.sidebar_visible();
        let size = host.inner_size(window).unwrap_or_else(|| {
            warn!(window = %window, "host has no size for window, using zero");
            Size::new(0.0, 0.0)
        });
        Ok(self.layout.content_bounds(size, sidebar))
    }
}
