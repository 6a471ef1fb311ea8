pub mod actions;
pub mod key;
pub mod keybindings;
pub mod loader;
pub mod resolver;

use std::time::Duration;

pub use actions::ScreenAction;
use keybindings::KeybindingsConfig;
pub use loader::load;
pub use resolver::KeyResolver;
use serde::{Deserialize, Serialize};

use crate::mvi::ToastDuration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Catppuccin Mocha".to_string(),
        }
    }
}

/// How long each toast category stays on screen, and how many can stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub immediate_ms: u64,
    pub short_ms: u64,
    pub long_ms: u64,
    pub max_visible: usize,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            immediate_ms: 500,
            short_ms: 1000,
            long_ms: 5000,
            max_visible: 3,
        }
    }
}

impl ToastConfig {
    #[must_use]
    pub const fn duration(&self, duration: ToastDuration) -> Duration {
        let ms = match duration {
            ToastDuration::Immediate => self.immediate_ms,
            ToastDuration::Short => self.short_ms,
            ToastDuration::Long => self.long_ms,
        };
        Duration::from_millis(ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Renders per second
    pub frame_rate: f64,
    /// Ticks per second, drives toast expiry
    pub tick_rate: f64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            frame_rate: 30.0,
            tick_rate: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub terminal: TerminalConfig,
    #[serde(default)]
    pub toast: ToastConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_durations() {
        let config = ToastConfig::default();
        assert_eq!(
            config.duration(ToastDuration::Immediate),
            Duration::from_millis(500)
        );
        assert_eq!(config.duration(ToastDuration::Short), Duration::from_secs(1));
        assert_eq!(config.duration(ToastDuration::Long), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [toast]
            long_ms = 8000

            [theme]
            name = "Catppuccin Latte"
            "#,
        )
        .unwrap();

        assert_eq!(config.toast.long_ms, 8000);
        assert_eq!(config.toast.short_ms, 1000);
        assert_eq!(config.theme.name, "Catppuccin Latte");
        assert_eq!(config.terminal, TerminalConfig::default());
        assert_eq!(config.keybindings, KeybindingsConfig::default());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
