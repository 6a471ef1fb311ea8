use crate::mvi::ViewEvent;

/// What a key press means on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    Quit,
    Suspend,
    /// Press a button directly
    Press(ViewEvent),
    FocusNext,
    FocusPrevious,
    PressFocused,
}
