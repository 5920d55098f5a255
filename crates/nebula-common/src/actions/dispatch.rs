use super::Action;

impl Action {
    /// Human-readable label, used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Action::NewWindow => "New Window",
            Action::ToggleFullscreen => "Toggle Fullscreen",
            Action::Quit => "Quit",
            Action::NewView => "New Tab",
            Action::CloseView => "Close Tab",
            Action::CopyUrl => "Copy URL",
            Action::ToggleSidebar => "Toggle Sidebar",
        }
    }
}
