//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::core::state::App;
use crate::tmdb::{FetchError, Genre, MovieDetail, MovieSource, MovieSummary, PosterSize};

/// A `MovieSource` that replays scripted responses in order.
///
/// Once a script runs dry every further call fails with a transport error,
/// which the sentinel methods turn into an empty list / `None`.
#[derive(Default)]
pub struct StubSource {
    popular: Mutex<VecDeque<Result<Vec<MovieSummary>, FetchError>>>,
    details: Mutex<HashMap<u64, VecDeque<Option<MovieDetail>>>>,
    popular_calls: AtomicUsize,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_popular(self, movies: Vec<MovieSummary>) -> Self {
        self.popular.lock().unwrap().push_back(Ok(movies));
        self
    }

    pub fn with_popular_failure(self) -> Self {
        self.popular
            .lock()
            .unwrap()
            .push_back(Err(FetchError::Upstream { status: 500 }));
        self
    }

    pub fn with_detail(self, id: u64, detail: Option<MovieDetail>) -> Self {
        self.details
            .lock()
            .unwrap()
            .entry(id)
            .or_default()
            .push_back(detail);
        self
    }

    pub fn popular_calls(&self) -> usize {
        self.popular_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MovieSource for StubSource {
    async fn popular(&self) -> Result<Vec<MovieSummary>, FetchError> {
        self.popular_calls.fetch_add(1, Ordering::SeqCst);
        self.popular
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Transport("script exhausted".to_string())))
    }

    async fn details(&self, id: u64) -> Result<MovieDetail, FetchError> {
        let next = self
            .details
            .lock()
            .unwrap()
            .get_mut(&id)
            .and_then(VecDeque::pop_front)
            .flatten();
        next.ok_or(FetchError::Upstream { status: 404 })
    }
}

pub fn summary(id: u64, title: &str) -> MovieSummary {
    MovieSummary {
        id,
        title: title.to_string(),
        poster_path: Some(format!("/{id}.jpg")),
        backdrop_path: None,
        overview: format!("Sinopse de {title}"),
        release_date: "2024-03-15".to_string(),
        vote_average: 7.3,
        genre_ids: vec![18],
    }
}

pub fn detail(id: u64, title: &str) -> MovieDetail {
    MovieDetail {
        summary: summary(id, title),
        genres: vec![
            Genre {
                id: 18,
                name: "Drama".to_string(),
            },
            Genre {
                id: 35,
                name: "Comédia".to_string(),
            },
        ],
        runtime_minutes: 135,
        vote_count: 4200,
        tagline: Some("Uma história".to_string()),
    }
}

/// Creates a test App on the list screen, before mount.
pub fn test_app() -> App {
    App::new(PosterSize::default())
}
