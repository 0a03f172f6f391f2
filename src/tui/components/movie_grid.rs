//! # Movie Grid
//!
//! The popular-movies content view: cards laid out `GRID_COLUMNS` wide, one
//! highlighted by the cursor.
//!
//! The grid is a transient component. The cursor lives in core `App`, and
//! the first visible row is derived from it on every frame, so the cursor can
//! never scroll out of view and no scroll state has to be kept here.
//!
//! ```text
//! ┌ 1 ──────────────────┐┌ 2 ──────────────────┐
//! │ Duna: Parte Dois    ││ Godzilla e Kong     │
//! │ 2024        ★ 8.2   ││ 2024        ★ 7.2   │
//! └─────────────────────┘└─────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::core::state::GRID_COLUMNS;
use crate::core::view::MovieCard;
use crate::tui::component::Component;
use crate::tui::theme;

/// Rows a card occupies: border, title, year/rating, border.
pub const CARD_HEIGHT: u16 = 4;

pub struct MovieGrid<'a> {
    pub cards: &'a [MovieCard],
    pub selected: usize,
}

impl<'a> MovieGrid<'a> {
    pub fn new(cards: &'a [MovieCard], selected: usize) -> Self {
        Self { cards, selected }
    }

    /// Index of the first card row drawn, keeping the selected row on screen.
    pub fn first_visible_row(&self, area_height: u16) -> usize {
        let visible_rows = (area_height / CARD_HEIGHT).max(1) as usize;
        let selected_row = self.selected / GRID_COLUMNS;
        (selected_row + 1).saturating_sub(visible_rows)
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, index: usize, card: &MovieCard) {
        let is_selected = index == self.selected;
        let (border_style, border_type) = if is_selected {
            (
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
                BorderType::Thick,
            )
        } else {
            (Style::default().fg(theme::MUTED), BorderType::Rounded)
        };

        let block = Block::bordered()
            .border_type(border_type)
            .border_style(border_style)
            .title(format!(" {} ", index + 1))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(theme::CARD));

        let inner_width = area.width.saturating_sub(4) as usize;
        let rating = format!("★ {}", card.rating);
        let gap = inner_width
            .saturating_sub(card.year.chars().count())
            .saturating_sub(rating.chars().count())
            .max(1);

        let lines = vec![
            Line::from(Span::styled(
                truncate_to_width(&card.title, inner_width),
                Style::default()
                    .fg(theme::TEXT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(card.year.clone(), Style::default().fg(theme::ACCENT)),
                Span::raw(" ".repeat(gap)),
                Span::styled(rating, Style::default().fg(theme::TEXT)),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Component for MovieGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let first_row = self.first_visible_row(area.height);
        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;

        let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
            .split(area);
        let column_constraints = vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS];

        for (row_offset, row_area) in row_areas.iter().enumerate() {
            let row = first_row + row_offset;
            let cells = Layout::horizontal(column_constraints.clone()).split(*row_area);
            for (col, cell_area) in cells.iter().enumerate() {
                let index = row * GRID_COLUMNS + col;
                if let Some(card) = self.cards.get(index) {
                    self.render_card(frame, *cell_area, index, card);
                }
            }
        }
    }
}

/// Cuts `text` to at most `max_width` terminal columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().filter_map(UnicodeWidthChar::width).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        // Leave one column for the ellipsis
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
