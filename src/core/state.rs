//! # Application State
//!
//! Core state for FMDB. Domain logic only; scroll offsets and other
//! presentation state live in the `tui` module.
//!
//! ```text
//! App
//! ├── screen: Screen                   // which screen is on top
//! ├── list: ListController             // popular grid (always alive)
//! ├── detail: Option<DetailController> // present while Detail is shown
//! ├── selected: usize                  // grid cursor
//! ├── poster_size: PosterSize          // CDN size token for image URLs
//! └── status_message: String           // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::controller::{DetailController, ListController};
use crate::tmdb::{MovieSummary, PosterSize};

/// Number of columns in the popular grid.
pub const GRID_COLUMNS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List,
    Detail,
}

pub struct App {
    pub screen: Screen,
    pub list: ListController,
    pub detail: Option<DetailController>,
    pub selected: usize,
    pub poster_size: PosterSize,
    pub status_message: String,
}

impl App {
    pub fn new(poster_size: PosterSize) -> Self {
        Self {
            screen: Screen::List,
            list: ListController::new(),
            detail: None,
            selected: 0,
            poster_size,
            status_message: String::new(),
        }
    }

    /// The movie under the grid cursor, if the grid has loaded.
    pub fn selected_movie(&self) -> Option<&MovieSummary> {
        self.list.movies().get(self.selected)
    }

    /// True while the visible screen waits on the network.
    pub fn is_loading(&self) -> bool {
        match self.screen {
            Screen::List => self.list.state().is_loading(),
            Screen::Detail => self
                .detail
                .as_ref()
                .is_some_and(|d| d.state().is_loading()),
        }
    }
}
