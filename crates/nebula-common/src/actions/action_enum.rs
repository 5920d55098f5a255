/// Every user-triggerable action in the application.
///
/// Keybinds resolve to an `Action`. The app dispatcher turns each one into a
/// shell command on the focused window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // -- Windows --
    NewWindow,
    ToggleFullscreen,
    Quit,

    // -- Views --
    NewView,
    CloseView,
    CopyUrl,

    // -- Layout --
    ToggleSidebar,
}
