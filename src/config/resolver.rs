use std::sync::Arc;

use crossterm::event::KeyEvent;

use crate::config::actions::ScreenAction;
use crate::config::key::KeyBinding;
use crate::config::keybindings::KeybindingsConfig;
use crate::mvi::ViewEvent;

/// Maps key events to [`ScreenAction`]s using the configured bindings.
pub struct KeyResolver {
    pub keybindings: Arc<KeybindingsConfig>,
}

impl KeyResolver {
    pub const fn new(keybindings: Arc<KeybindingsConfig>) -> Self {
        Self { keybindings }
    }

    /// Bindings are checked in the order they are listed here, so a key bound
    /// twice resolves to the earlier action.
    fn bindings(&self) -> [(&KeyBinding, ScreenAction); 8] {
        let kb = &*self.keybindings;
        [
            (&kb.global.quit, ScreenAction::Quit),
            (&kb.global.suspend, ScreenAction::Suspend),
            (&kb.buttons.instant, ScreenAction::Press(ViewEvent::Instant)),
            (&kb.buttons.one_sec, ScreenAction::Press(ViewEvent::OneSec)),
            (&kb.buttons.five_sec, ScreenAction::Press(ViewEvent::FiveSec)),
            (&kb.focus.next, ScreenAction::FocusNext),
            (&kb.focus.previous, ScreenAction::FocusPrevious),
            (&kb.focus.press, ScreenAction::PressFocused),
        ]
    }

    pub fn resolve(&self, event: &KeyEvent) -> Option<ScreenAction> {
        self.bindings()
            .into_iter()
            .find(|(binding, _)| binding.matches(event))
            .map(|(_, action)| action)
    }

    /// Key hint for a button, e.g. `1`.
    pub fn button_hint(&self, button: ViewEvent) -> Option<String> {
        let kb = &self.keybindings.buttons;
        let binding = match button {
            ViewEvent::Instant => &kb.instant,
            ViewEvent::OneSec => &kb.one_sec,
            ViewEvent::FiveSec => &kb.five_sec,
        };
        binding.primary().map(ToString::to_string)
    }

    /// `(keys, description)` pairs for the footer.
    pub fn footer_hints(&self) -> Vec<(String, &'static str)> {
        let kb = &self.keybindings;
        vec![
            (kb.focus.next.to_string(), "next"),
            (kb.focus.previous.to_string(), "previous"),
            (kb.focus.press.to_string(), "press"),
            (kb.global.quit.to_string(), "quit"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::config::key::Key;

    fn resolver() -> KeyResolver {
        KeyResolver::new(Arc::new(KeybindingsConfig::default()))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_default_button_keys() {
        let resolver = resolver();
        assert_eq!(
            resolver.resolve(&press(KeyCode::Char('1'))),
            Some(ScreenAction::Press(ViewEvent::Instant))
        );
        assert_eq!(
            resolver.resolve(&press(KeyCode::Char('o'))),
            Some(ScreenAction::Press(ViewEvent::OneSec))
        );
        assert_eq!(
            resolver.resolve(&press(KeyCode::Char('3'))),
            Some(ScreenAction::Press(ViewEvent::FiveSec))
        );
    }

    #[test]
    fn test_default_focus_and_global_keys() {
        let resolver = resolver();
        assert_eq!(
            resolver.resolve(&press(KeyCode::Tab)),
            Some(ScreenAction::FocusNext)
        );
        assert_eq!(
            resolver.resolve(&KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(ScreenAction::FocusPrevious)
        );
        assert_eq!(
            resolver.resolve(&press(KeyCode::Enter)),
            Some(ScreenAction::PressFocused)
        );
        assert_eq!(
            resolver.resolve(&KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL)),
            Some(ScreenAction::Suspend)
        );
        assert_eq!(resolver.resolve(&press(KeyCode::Char('q'))), Some(ScreenAction::Quit));
        assert_eq!(resolver.resolve(&press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_earlier_action_wins_on_conflict() {
        let mut keybindings = KeybindingsConfig::default();
        keybindings.buttons.instant = Key::char('q').into();
        let resolver = KeyResolver::new(Arc::new(keybindings));
        assert_eq!(resolver.resolve(&press(KeyCode::Char('q'))), Some(ScreenAction::Quit));
    }

    #[test]
    fn test_hints() {
        let resolver = resolver();
        assert_eq!(resolver.button_hint(ViewEvent::OneSec).as_deref(), Some("2"));
        assert!(resolver
            .footer_hints()
            .contains(&("Enter/Space".to_string(), "press")));
    }
}
