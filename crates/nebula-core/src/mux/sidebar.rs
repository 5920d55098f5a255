use nebula_common::{ShellError, WindowId};
use tracing::debug;

use super::Multiplexer;
use crate::events::OutboundEvent;
use crate::host::ShellHost;

impl Multiplexer {
    /// Show or hide the sidebar of `window`, resizing its view in the same step.
    pub fn set_sidebar(
        &mut self,
        window: WindowId,
        visible: bool,
        host: &mut dyn ShellHost,
    ) -> Result<(), ShellError> {
        self.windows.set_sidebar(window, visible)?;
        self.relayout(window, host)?;
        debug!(window = %window, visible, "sidebar changed");
        self.send_to(window, OutboundEvent::SidebarChanged { visible });
        Ok(())
    }

    /// Flip the sidebar of `window`. Returns the new visibility.
    pub fn toggle_sidebar(
        &mut self,
        window: WindowId,
        host: &mut dyn ShellHost,
    ) -> Result<bool, ShellError> {
        let visible = !self.windows.get(window)?.sidebar_visible();
        self.set_sidebar(window, visible, host)?;
        Ok(visible)
    }
}
