//! # Movie Detail
//!
//! The `Ready` view of the detail screen: title, tagline, release date,
//! rating, runtime, genres, synopsis, and the image URLs.
//!
//! ## Architecture
//!
//! Same split as the other stateful components: `MovieDetailView` is created
//! each frame with the layout as props and a `&mut DetailScrollState` that
//! lives in `TuiState`. Text is pre-wrapped with `textwrap` so the canvas
//! height handed to the `ScrollView` is exact.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::strings::{RELEASE_DATE_LABEL, RUNTIME_LABEL, SYNOPSIS_HEADING, VOTES};
use crate::core::view::DetailLayout;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

/// Scroll position of the detail screen. Persisted in `TuiState`.
#[derive(Default)]
pub struct DetailScrollState {
    pub scroll_state: ScrollViewState,
    /// Canvas height from the last render, for clamping
    pub content_height: u16,
    /// Viewport height from the last render, for clamping
    pub viewport_height: u16,
}

impl DetailScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top, used when a different movie is opened.
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }

    /// Keep the offset inside the content so scrolling down past the end
    /// doesn't leave a blank screen.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for DetailScrollState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Up | TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::Down | TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

pub struct MovieDetailView<'a> {
    pub layout: &'a DetailLayout,
    pub state: &'a mut DetailScrollState,
}

impl<'a> MovieDetailView<'a> {
    pub fn new(layout: &'a DetailLayout, state: &'a mut DetailScrollState) -> Self {
        Self { layout, state }
    }

    /// All lines of the detail page, wrapped to `width` columns.
    pub fn build_lines(layout: &DetailLayout, width: u16) -> Vec<Line<'static>> {
        let heading = Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD);
        let text = Style::default().fg(theme::TEXT);
        let muted = Style::default().fg(theme::MUTED);

        let mut lines = wrap_styled(
            &layout.title,
            width,
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        );
        if let Some(tagline) = &layout.tagline {
            lines.extend(wrap_styled(tagline, width, muted.add_modifier(Modifier::ITALIC)));
        }
        lines.push(Line::default());

        lines.extend(wrap_styled(
            &format!("{RELEASE_DATE_LABEL}: {}", layout.release_date),
            width,
            text,
        ));
        lines.push(Line::from(vec![
            Span::styled(format!("★ {}", layout.rating), heading),
            Span::styled(format!("  ({} {VOTES})", layout.vote_count), muted),
        ]));
        if let Some(runtime) = &layout.runtime {
            lines.push(Line::styled(format!("{RUNTIME_LABEL}: {runtime}"), text));
        }

        if !layout.genres.is_empty() {
            lines.push(Line::default());
            lines.extend(genre_badges(&layout.genres, width));
        }

        lines.push(Line::default());
        lines.push(Line::styled(SYNOPSIS_HEADING, heading));
        lines.extend(wrap_styled(&layout.overview, width, text));

        lines.push(Line::default());
        lines.extend(wrap_styled(&format!("Poster: {}", layout.poster_url), width, muted));
        lines.extend(wrap_styled(
            &format!("Backdrop: {}", layout.backdrop_url),
            width,
            muted,
        ));
        lines
    }
}

impl Component for MovieDetailView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // -1 for the scrollbar, -2 for side margins
        let content_width = area.width.saturating_sub(3).max(1);
        let lines = Self::build_lines(self.layout, content_width);
        let content_height = lines.len() as u16;

        self.state.content_height = content_height;
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width + 2, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(lines),
            Rect::new(1, 0, content_width, content_height),
        );

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// Wraps with the same rules as the rest of the TUI: break long words, split
/// on ASCII spaces only.
fn wrap_styled(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    let options = textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| Line::styled(line.into_owned(), style))
        .collect()
}

/// Genre names as filled badges, flowing onto new lines when a row is full.
fn genre_badges(genres: &[String], width: u16) -> Vec<Line<'static>> {
    let badge = Style::default().fg(theme::TEXT).bg(theme::ACCENT);
    let mut rows = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;

    for genre in genres {
        let label = format!(" {genre} ");
        let label_width = label.chars().count();
        if !spans.is_empty() && used + 1 + label_width > width as usize {
            rows.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
            used += 1;
        }
        used += label_width;
        spans.push(Span::styled(label, badge));
    }
    if !spans.is_empty() {
        rows.push(Line::from(spans));
    }
    rows
}
