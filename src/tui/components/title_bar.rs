//! # TitleBar Component
//!
//! Top bar: app name, the current screen, and a status message.
//!
//! Purely presentational. It receives all data as props and keeps no state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Detalhes do Filme", app.status_message.clone());
//! title_bar.render(frame, area);
//! ```
//!
//! The text collapses depending on what is set:
//!
//! 1. **Screen + status**: `"FMDB | Detalhes do Filme | 20 filmes populares"`
//! 2. **Screen only**: `"FMDB | Detalhes do Filme"`
//! 3. **Neither**: `"FMDB"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::strings::APP_TITLE;
use crate::tui::component::Component;
use crate::tui::theme;

pub struct TitleBar {
    /// Name of the screen on top (empty on the home grid)
    pub screen_title: String,
    /// Transient status text, e.g. "20 filmes populares"
    pub status_message: String,
}

impl TitleBar {
    pub fn new(screen_title: impl Into<String>, status_message: impl Into<String>) -> Self {
        Self {
            screen_title: screen_title.into(),
            status_message: status_message.into(),
        }
    }

    fn text_parts(&self) -> Vec<&str> {
        [self.screen_title.as_str(), self.status_message.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            APP_TITLE,
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )];
        for part in self.text_parts() {
            spans.push(Span::styled(" | ", Style::default().fg(theme::MUTED)));
            spans.push(Span::styled(part.to_string(), Style::default().fg(theme::TEXT)));
        }

        frame.render_widget(Line::from(spans).style(Style::default().bg(theme::BACKGROUND)), area);
    }
}
