//! # Error Panel
//!
//! The `Error` view of a screen: the message plus the retry affordance.
//! Retry itself is a key binding (`r`) handled by the event loop.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::strings::RETRY;
use crate::tui::component::Component;
use crate::tui::theme;

pub struct ErrorPanel<'a> {
    pub message: &'a str,
}

impl<'a> ErrorPanel<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Component for ErrorPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                self.message.to_string(),
                Style::default().fg(theme::ERROR),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    " r ",
                    Style::default()
                        .fg(theme::TEXT)
                        .bg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {RETRY}"), Style::default().fg(theme::TEXT)),
            ]),
        ];

        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16 + 1)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, center);
    }
}
