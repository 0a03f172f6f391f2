//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: app name, current screen, status text
//! - `LoadingIndicator`: spinner for the `Loading` state
//! - `ErrorPanel`: message and retry hint for the `Error` state
//! - `MovieGrid`: popular movies as cards, cursor derived from `App`
//!
//! ### Stateful Components (Event-Driven)
//!
//! Transient wrappers around state persisted in `TuiState`:
//! - `MovieDetailView` over `DetailScrollState`
//!
//! `EventHandler` lives on the state struct, since the wrapper is rebuilt
//! every frame.
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as props, not by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! ErrorPanel::new(message).render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! ErrorPanel::from_app(app).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── loading.rs       (Spinner)
//! ├── error_panel.rs   (Error message + retry)
//! ├── movie_grid.rs    (Popular movies grid)
//! └── movie_detail.rs  (Scrollable detail page)
//! ```

mod error_panel;
mod loading;
pub mod movie_detail;
pub mod movie_grid;
mod title_bar;

pub use error_panel::ErrorPanel;
pub use loading::LoadingIndicator;
pub use movie_detail::{DetailScrollState, MovieDetailView};
pub use movie_grid::MovieGrid;
pub use title_bar::TitleBar;
