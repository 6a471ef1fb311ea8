use super::ViewEvent;

/// What the screen shows: the last button pressed, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub last_button: Option<ViewEvent>,
}

impl ViewState {
    #[must_use]
    pub const fn pressed(button: ViewEvent) -> Self {
        Self {
            last_button: Some(button),
        }
    }

    /// Text for the label on screen.
    #[must_use]
    pub fn label(&self) -> String {
        let name = self.last_button.map_or("none", ViewEvent::name);
        format!("Last button: {name}")
    }
}
