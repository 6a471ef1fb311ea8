use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::Component;
use crate::mvi::ToastDuration;
use crate::theme::Theme;

const TOAST_HEIGHT: u16 = 3;
const TOAST_WIDTH: u16 = 40;
const SPACING: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    message: String,
    category: ToastDuration,
    created_at: Instant,
    lifetime: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, category: ToastDuration, lifetime: Duration) -> Self {
        Self {
            message: message.into(),
            category,
            created_at: Instant::now(),
            lifetime,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn category(&self) -> ToastDuration {
        self.category
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.lifetime
    }
}

/// Stack of toasts in the bottom-right corner, newest at the bottom.
pub struct ToastManager {
    toasts: VecDeque<Toast>,
    max_visible: usize,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new(3)
    }
}

impl ToastManager {
    pub fn new(max_visible: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            max_visible: max_visible.max(1),
        }
    }

    /// Show a toast, dropping the oldest ones beyond `max_visible`.
    pub fn show(&mut self, toast: Toast) {
        self.toasts.push_back(toast);
        while self.toasts.len() > self.max_visible {
            self.toasts.pop_front();
        }
    }

    /// Drop every toast whose lifetime has passed at `now`.
    pub fn expire(&mut self, now: Instant) {
        self.toasts.retain(|t| !t.is_expired(now));
    }

    #[cfg(test)]
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Component for ToastManager {
    type Output = ();

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if self.is_empty() {
            return;
        }

        let width = TOAST_WIDTH.min(area.width.saturating_sub(4));
        let x = area.x + area.width.saturating_sub(width + 2);

        // Newest at the bottom, older ones stacked above it.
        for (i, toast) in self.toasts.iter().rev().enumerate() {
            let Ok(i) = u16::try_from(i) else { break };
            let offset = i * (TOAST_HEIGHT + SPACING) + TOAST_HEIGHT + 1;
            if offset > area.height {
                break;
            }
            let toast_area = Rect::new(x, area.y + area.height - offset, width, TOAST_HEIGHT);

            frame.render_widget(Clear, toast_area);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.toast(toast.category())))
                .title(format!(" {} ", toast.category()))
                .style(Style::default().bg(theme.surface0));
            let paragraph = Paragraph::new(toast.message())
                .style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(paragraph, toast_area);
        }
    }

    fn handle_tick(&mut self) {
        self.expire(Instant::now());
    }
}
