use crossterm::event::KeyCode;
use serde::{Deserialize, Serialize};

use crate::config::key::{Key, KeyBinding};

/// Keys for the three buttons. Each presses its button directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonKeybindings {
    pub instant: KeyBinding,
    pub one_sec: KeyBinding,
    pub five_sec: KeyBinding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusKeybindings {
    pub next: KeyBinding,
    pub previous: KeyBinding,
    pub press: KeyBinding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalKeybindings {
    pub quit: KeyBinding,
    pub suspend: KeyBinding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KeybindingsConfig {
    pub global: GlobalKeybindings,
    pub buttons: ButtonKeybindings,
    pub focus: FocusKeybindings,
}

impl Default for ButtonKeybindings {
    fn default() -> Self {
        Self {
            instant: vec![Key::char('1'), Key::char('i')].into(),
            one_sec: vec![Key::char('2'), Key::char('o')].into(),
            five_sec: vec![Key::char('3'), Key::char('f')].into(),
        }
    }
}

impl Default for FocusKeybindings {
    fn default() -> Self {
        Self {
            next: vec![Key::new(KeyCode::Tab), Key::new(KeyCode::Right), Key::char('l')].into(),
            previous: vec![
                Key::new(KeyCode::BackTab),
                Key::new(KeyCode::Left),
                Key::char('h'),
            ]
            .into(),
            press: vec![Key::new(KeyCode::Enter), Key::char(' ')].into(),
        }
    }
}

impl Default for GlobalKeybindings {
    fn default() -> Self {
        Self {
            quit: vec![Key::char('q'), Key::new(KeyCode::Esc)].into(),
            suspend: Key::with_ctrl(KeyCode::Char('z')).into(),
        }
    }
}
