use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{Component, EventResult, Result};
use crate::mvi::ViewEvent;
use crate::theme::Theme;

const BUTTON_HEIGHT: u16 = 3;

/// Row of the three buttons with a movable focus.
///
/// Remembers where each button was last drawn so mouse clicks can be mapped
/// back to a button.
pub struct ButtonBar {
    hints: [Option<String>; 3],
    focused: usize,
    areas: [Rect; 3],
}

impl ButtonBar {
    /// `hints` are the keys shown next to each button, in button order.
    pub fn new(hints: [Option<String>; 3]) -> Self {
        Self {
            hints,
            focused: 0,
            areas: [Rect::default(); 3],
        }
    }

    pub const fn height() -> u16 {
        BUTTON_HEIGHT
    }

    pub const fn focused(&self) -> ViewEvent {
        ViewEvent::ALL[self.focused]
    }

    pub const fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % ViewEvent::ALL.len();
    }

    pub const fn focus_previous(&mut self) {
        self.focused = (self.focused + ViewEvent::ALL.len() - 1) % ViewEvent::ALL.len();
    }

    pub const fn focus(&mut self, button: ViewEvent) {
        self.focused = button.index();
    }

    /// Where `button` was last drawn.
    pub const fn area(&self, button: ViewEvent) -> Rect {
        self.areas[button.index()]
    }

    /// The button drawn at `position`, if any.
    pub fn button_at(&self, position: Position) -> Option<ViewEvent> {
        self.areas
            .iter()
            .position(|area| area.contains(position))
            .map(|i| ViewEvent::ALL[i])
    }

    fn caption(&self, button: ViewEvent) -> String {
        let title = match button {
            ViewEvent::Instant => "Instant",
            ViewEvent::OneSec => "One second",
            ViewEvent::FiveSec => "Five seconds",
        };
        match &self.hints[button.index()] {
            Some(hint) => format!("{title} [{hint}]"),
            None => title.to_string(),
        }
    }
}

impl Component for ButtonBar {
    type Output = ViewEvent;

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<EventResult<Self::Output>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(EventResult::Ignored);
        }
        let Some(button) = self.button_at(Position::new(mouse.column, mouse.row)) else {
            return Ok(EventResult::Ignored);
        };
        self.focus(button);
        Ok(button.into())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let columns = Layout::horizontal([Constraint::Fill(1); 3])
            .spacing(2)
            .split(area);

        for (i, button) in ViewEvent::ALL.into_iter().enumerate() {
            let button_area = columns[i];
            self.areas[i] = button_area;

            let is_focused = i == self.focused;
            let (border, text) = if is_focused {
                (
                    Style::default().fg(theme.border_focused()),
                    Style::default()
                        .fg(theme.highlight())
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (
                    Style::default().fg(theme.border()),
                    Style::default().fg(theme.text),
                )
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(border);
            let paragraph = Paragraph::new(self.caption(button))
                .style(text)
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(paragraph, button_area);
        }
    }
}
