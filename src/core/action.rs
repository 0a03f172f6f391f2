//! # Actions
//!
//! Everything that can happen in FMDB becomes an `Action`.
//! User presses Enter on a poster? That's `Action::OpenSelected`.
//! The API answers? That's `Action::PopularLoaded(movies)`.
//!
//! `update()` applies an action to the state and returns the `Effect` the
//! adapter must carry out. No I/O happens here; `perform()` is the one place
//! that turns a fetch effect back into an action.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::controller::{DetailController, FetchRequest};
use crate::core::state::{App, GRID_COLUMNS, Screen};
use crate::tmdb::{MovieDetail, MovieSource, MovieSummary};

#[derive(Debug)]
pub enum Action {
    /// The list screen appeared.
    Mount,
    /// User asked to try again on the visible screen.
    Retry,
    PopularLoaded(Vec<MovieSummary>),
    DetailLoaded {
        id: u64,
        detail: Option<MovieDetail>,
    },
    SelectPrev,
    SelectNext,
    SelectUp,
    SelectDown,
    /// Open the movie under the grid cursor.
    OpenSelected,
    /// Navigate to the detail screen for a movie id.
    OpenMovie(u64),
    Back,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Fetch(FetchRequest),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Mount => Effect::Fetch(app.list.on_mount()),
        Action::Retry => {
            let request = match app.screen {
                Screen::List => app.list.on_retry(),
                Screen::Detail => app.detail.as_mut().and_then(DetailController::on_retry),
            };
            request.map_or(Effect::None, Effect::Fetch)
        }
        Action::PopularLoaded(movies) => {
            app.list.complete(movies);
            let count = app.list.movies().len();
            app.selected = app.selected.min(count.saturating_sub(1));
            app.status_message = if count > 0 {
                format!("{count} filmes populares")
            } else {
                String::new()
            };
            Effect::None
        }
        Action::DetailLoaded { id, detail } => {
            match app.detail.as_mut() {
                Some(controller) if controller.movie_id() == id => controller.complete(detail),
                _ => debug!("Ignoring details for movie {id}: screen no longer shown"),
            }
            Effect::None
        }
        Action::SelectPrev => move_selection(app, -1),
        Action::SelectNext => move_selection(app, 1),
        Action::SelectUp => move_selection(app, -(GRID_COLUMNS as isize)),
        Action::SelectDown => move_selection(app, GRID_COLUMNS as isize),
        Action::OpenSelected => {
            if app.screen != Screen::List {
                return Effect::None;
            }
            match app.selected_movie().map(|m| m.id) {
                Some(id) => update(app, Action::OpenMovie(id)),
                None => Effect::None,
            }
        }
        Action::OpenMovie(id) => {
            info!("Navigating to movie {id}");
            let mut controller = DetailController::new(id);
            let request = controller.on_mount();
            app.detail = Some(controller);
            app.screen = Screen::Detail;
            Effect::Fetch(request)
        }
        Action::Back => {
            if app.screen == Screen::Detail {
                app.screen = Screen::List;
                app.detail = None;
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn move_selection(app: &mut App, delta: isize) -> Effect {
    let count = app.list.movies().len();
    if app.screen != Screen::List || count == 0 {
        return Effect::None;
    }
    let target = app.selected as isize + delta;
    if (0..count as isize).contains(&target) {
        app.selected = target as usize;
    }
    Effect::None
}

/// Runs a fetch through the source and wraps the result as the action that
/// settles it. Failures arrive already collapsed to the sentinel values.
pub async fn perform(source: &dyn MovieSource, request: FetchRequest) -> Action {
    match request {
        FetchRequest::Popular => Action::PopularLoaded(source.fetch_popular().await),
        FetchRequest::Detail(id) => Action::DetailLoaded {
            id,
            detail: source.fetch_detail(id).await,
        },
    }
}
