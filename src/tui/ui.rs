//! # Frame Layout
//!
//! Top-level drawing: title bar, the visible screen, and a one-line key
//! legend. Which component fills the main area is decided by the screen's
//! `ScreenView`, so every screen gets the same Loading/Error/Ready treatment.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ FMDB | Detalhes do Filme | 20 filmes ...     │  title (1 line)
//! ├──────────────────────────────────────────────┤
//! │                                              │
//! │   spinner  /  error + retry  /  content      │  main
//! │                                              │
//! ├──────────────────────────────────────────────┤
//! │ ↑↓ rolar · Esc voltar · q sair               │  help (1 line)
//! └──────────────────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};

use crate::core::fetch_state::ScreenView;
use crate::core::state::{App, Screen};
use crate::core::strings::{DETAIL_TITLE, HELP_DETAIL, HELP_ERROR, HELP_ERROR_DETAIL, HELP_LIST};
use crate::core::view::{DetailLayout, MovieCard};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ErrorPanel, LoadingIndicator, MovieDetailView, MovieGrid, TitleBar};
use crate::tui::theme;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    frame.render_widget(
        Block::default().style(Style::default().bg(theme::BACKGROUND)),
        frame.area(),
    );

    let screen_title = match app.screen {
        Screen::List => "",
        Screen::Detail => DETAIL_TITLE,
    };
    TitleBar::new(screen_title, app.status_message.clone()).render(frame, title_area);

    match app.screen {
        Screen::List => draw_list(frame, main_area, app, spinner_frame),
        Screen::Detail => draw_detail(frame, main_area, app, tui, spinner_frame),
    }

    frame.render_widget(
        Paragraph::new(help_text(app)).style(Style::default().fg(theme::MUTED)),
        help_area,
    );
}

fn draw_list(frame: &mut Frame, area: Rect, app: &App, spinner_frame: usize) {
    match app.list.view() {
        ScreenView::Spinner => LoadingIndicator::new(spinner_frame).render(frame, area),
        ScreenView::Failed { message } => ErrorPanel::new(message).render(frame, area),
        ScreenView::Content(movies) => {
            let size = app.poster_size.token();
            let cards: Vec<MovieCard> = movies
                .iter()
                .map(|movie| MovieCard::from_summary(movie, size))
                .collect();
            MovieGrid::new(&cards, app.selected).render(frame, area);
        }
    }
}

fn draw_detail(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    tui: &mut TuiState,
    spinner_frame: usize,
) {
    let Some(controller) = app.detail.as_ref() else {
        return;
    };
    match controller.view() {
        ScreenView::Spinner => LoadingIndicator::new(spinner_frame).render(frame, area),
        ScreenView::Failed { message } => ErrorPanel::new(message).render(frame, area),
        ScreenView::Content(detail) => {
            let layout = DetailLayout::from_detail(detail, app.poster_size.token());
            MovieDetailView::new(&layout, &mut tui.detail_scroll).render(frame, area);
        }
    }
}

/// Key legend for whatever is on screen.
fn help_text(app: &App) -> &'static str {
    match app.screen {
        Screen::List if app.list.state().is_error() => HELP_ERROR,
        Screen::List => HELP_LIST,
        Screen::Detail if app.detail.as_ref().is_some_and(|d| d.state().is_error()) => {
            HELP_ERROR_DETAIL
        }
        Screen::Detail => HELP_DETAIL,
    }
}
