//! The single screen of the app.
//!
//! [`MainScreen`] owns every widget. The core never touches it directly:
//! the render and effect loops call [`ScreenHost`], which forwards each call
//! as a [`ScreenMessage`] to the app loop, and the app loop applies it here.

use std::sync::Arc;

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tokio::sync::mpsc::UnboundedSender;
use tracing::trace;

use crate::config::{KeyResolver, ScreenAction, ToastConfig};
use crate::mvi::{EventSource, Notifier, TextView, ToastDuration, ViewEvent};
use crate::theme::Theme;
use crate::ui::{ButtonBar, Component, EventResult, Result, Toast, ToastManager};

/// Calls from the core, queued for the app loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenMessage {
    SetLabel(String),
    ShowToast {
        message: String,
        duration: ToastDuration,
    },
}

/// [`TextView`] and [`Notifier`] backed by the app loop's message queue.
#[derive(Debug, Clone)]
pub struct ScreenHost {
    tx: UnboundedSender<ScreenMessage>,
}

impl ScreenHost {
    pub const fn new(tx: UnboundedSender<ScreenMessage>) -> Self {
        Self { tx }
    }

    fn send(&self, message: ScreenMessage) {
        // The app loop is gone only while the screen is being torn down.
        if self.tx.send(message).is_err() {
            trace!("screen closed, dropping message");
        }
    }
}

impl TextView for ScreenHost {
    fn set_text(&self, text: &str) {
        self.send(ScreenMessage::SetLabel(text.to_string()));
    }
}

impl Notifier for ScreenHost {
    fn notify(&self, message: &str, duration: ToastDuration) {
        self.send(ScreenMessage::ShowToast {
            message: message.to_string(),
            duration,
        });
    }
}

/// What the app should do after the screen handled a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenOutput {
    Quit,
    Suspend,
}

pub struct MainScreen {
    sources: [EventSource; 3],
    resolver: Arc<KeyResolver>,
    toast_config: ToastConfig,
    buttons: ButtonBar,
    label: String,
    toasts: ToastManager,
}

impl MainScreen {
    /// `sources` must be in button order, as returned by
    /// [`IntentChannel::sources`](crate::mvi::IntentChannel::sources).
    pub fn new(
        sources: [EventSource; 3],
        resolver: Arc<KeyResolver>,
        toast_config: ToastConfig,
    ) -> Self {
        let hints = ViewEvent::ALL.map(|button| resolver.button_hint(button));
        Self {
            sources,
            buttons: ButtonBar::new(hints),
            toasts: ToastManager::new(toast_config.max_visible),
            resolver,
            toast_config,
            label: String::new(),
        }
    }

    #[cfg(test)]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[cfg(test)]
    pub const fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn apply(&mut self, message: ScreenMessage) {
        match message {
            ScreenMessage::SetLabel(text) => self.label = text,
            ScreenMessage::ShowToast { message, duration } => {
                let lifetime = self.toast_config.duration(duration);
                self.toasts.show(Toast::new(message, duration, lifetime));
            }
        }
    }

    fn press(&self, button: ViewEvent) {
        trace!(%button, "button pressed");
        self.sources[button.index()].emit();
    }
}

impl Component for MainScreen {
    type Output = ScreenOutput;

    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<Self::Output>> {
        let Some(action) = self.resolver.resolve(&key) else {
            return Ok(EventResult::Ignored);
        };
        Ok(match action {
            ScreenAction::Quit => ScreenOutput::Quit.into(),
            ScreenAction::Suspend => ScreenOutput::Suspend.into(),
            ScreenAction::Press(button) => {
                self.buttons.focus(button);
                self.press(button);
                EventResult::Consumed
            }
            ScreenAction::FocusNext => {
                self.buttons.focus_next();
                EventResult::Consumed
            }
            ScreenAction::FocusPrevious => {
                self.buttons.focus_previous();
                EventResult::Consumed
            }
            ScreenAction::PressFocused => {
                self.press(self.buttons.focused());
                EventResult::Consumed
            }
        })
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<EventResult<Self::Output>> {
        Ok(match self.buttons.handle_mouse(mouse)? {
            EventResult::Event(button) => {
                self.press(button);
                EventResult::Consumed
            }
            EventResult::Consumed => EventResult::Consumed,
            EventResult::Ignored => EventResult::Ignored,
        })
    }

    fn handle_tick(&mut self) {
        self.toasts.handle_tick();
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .title(" lastbutton ")
            .title_style(Style::default().fg(theme.mauve).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border()))
            .style(Style::default().bg(theme.base));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [_, label_area, _, buttons_area, _, footer_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(ButtonBar::height()),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let label = Paragraph::new(self.label.as_str())
            .style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(label, label_area);

        let [buttons_area] = Layout::horizontal([Constraint::Max(72)])
            .flex(Flex::Center)
            .areas(buttons_area);
        self.buttons.render(frame, buttons_area, theme);

        let mut spans = Vec::new();
        for (keys, description) in self.resolver.footer_hints() {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(keys, Style::default().fg(theme.lavender)));
            spans.push(Span::styled(
                format!(" {description}"),
                Style::default().fg(theme.subtext0),
            ));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            footer_area,
        );

        self.toasts.render(frame, inner, theme);
    }
}
