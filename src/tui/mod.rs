//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The print
//! commands in `main.rs` drive the same controllers without it.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events, terminal resize,
//!   or a finished fetch.
//!
//! ## Fetches
//!
//! `Effect::Fetch` is carried out on a tokio task. The task sends the
//! settling `Action` back over an mpsc channel that the loop drains once per
//! iteration, so `App` is only ever touched from this thread.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, perform, update};
use crate::core::config::ResolvedConfig;
use crate::core::controller::FetchRequest;
use crate::core::state::{App, Screen};
use crate::tmdb::{MovieSource, TmdbClient};
use crate::tui::component::EventHandler;
use crate::tui::components::DetailScrollState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub detail_scroll: DetailScrollState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            detail_scroll: DetailScrollState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the movie source from resolved credentials and locale.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn MovieSource> {
    if config.api_key.is_empty() {
        warn!("No TMDB API key configured (config file or TMDB_API_KEY); requests will be rejected");
    }
    Arc::new(TmdbClient::with_options(
        config.api_key.clone(),
        config.base_url.clone(),
        config.language.clone(),
    ))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config);
    let mut app = App::new(config.poster_size);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background fetches
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut should_quit = dispatch(&mut app, &mut tui, Action::Mount, &source, &tx);

    while !should_quit {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if app.screen == Screen::Detail && is_scroll(event) {
                tui.detail_scroll.handle_event(&event);
                continue;
            }
            if let Some(action) = action_for(app.screen, event)
                && dispatch(&mut app, &mut tui, action, &source, &tx)
            {
                should_quit = true;
                break;
            }
        }

        // Handle finished fetches
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, &mut tui, action, &source, &tx) {
                should_quit = true;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Applies an action and carries out its effect. Returns true on quit.
fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    action: Action,
    source: &Arc<dyn MovieSource>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match update(app, action) {
        Effect::Quit => return true,
        Effect::Fetch(request) => {
            if matches!(request, FetchRequest::Detail(_)) {
                tui.detail_scroll.reset();
            }
            spawn_fetch(source.clone(), request, tx.clone());
        }
        Effect::None => {}
    }
    false
}

fn spawn_fetch(source: Arc<dyn MovieSource>, request: FetchRequest, tx: mpsc::Sender<Action>) {
    info!("Spawning fetch: {:?}", request);
    tokio::spawn(async move {
        let action = perform(source.as_ref(), request).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver result of {:?}: receiver dropped", request);
        }
    });
}

fn is_scroll(event: TuiEvent) -> bool {
    matches!(
        event,
        TuiEvent::Up
            | TuiEvent::Down
            | TuiEvent::ScrollUp
            | TuiEvent::ScrollDown
            | TuiEvent::ScrollPageUp
            | TuiEvent::ScrollPageDown
    )
}

/// Maps a key to the core action it means on `screen`.
fn action_for(screen: Screen, event: TuiEvent) -> Option<Action> {
    match (screen, event) {
        (_, TuiEvent::ForceQuit | TuiEvent::Quit) => Some(Action::Quit),
        (_, TuiEvent::Retry) => Some(Action::Retry),
        (Screen::List, TuiEvent::Left) => Some(Action::SelectPrev),
        (Screen::List, TuiEvent::Right) => Some(Action::SelectNext),
        (Screen::List, TuiEvent::Up | TuiEvent::ScrollUp) => Some(Action::SelectUp),
        (Screen::List, TuiEvent::Down | TuiEvent::ScrollDown) => Some(Action::SelectDown),
        (Screen::List, TuiEvent::Submit) => Some(Action::OpenSelected),
        (Screen::Detail, TuiEvent::Back) => Some(Action::Back),
        _ => None,
    }
}
