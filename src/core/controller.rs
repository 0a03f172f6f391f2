//! # Screen Controllers
//!
//! One controller per screen instance. Each owns a [`FetchState`] and is the
//! only thing allowed to change it.
//!
//! Fetching is split in two halves so the caller decides how to wait:
//!
//! - `on_mount()` / `on_retry()` enter `Loading` and hand back the
//!   [`FetchRequest`] to run.
//! - `complete(..)` applies the result as exactly one transition.
//!
//! The TUI runs the request on a background task and feeds the result back
//! through an action. Callers that can simply await use `load()` / `retry()`,
//! which do both halves around a [`MovieSource`].

use log::{debug, info};

use crate::core::fetch_state::{FetchState, ScreenView};
use crate::core::strings::{DETAIL_UNAVAILABLE, NO_MOVIES_FOUND};
use crate::tmdb::{MovieDetail, MovieSource, MovieSummary};

/// The I/O a controller needs performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchRequest {
    Popular,
    Detail(u64),
}

/// State of the popular-movies grid.
#[derive(Debug, Default)]
pub struct ListController {
    state: FetchState<Vec<MovieSummary>>,
}

impl ListController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState<Vec<MovieSummary>> {
        &self.state
    }

    pub fn on_mount(&mut self) -> FetchRequest {
        debug!("List screen mounted, loading popular movies");
        self.state = FetchState::Loading;
        FetchRequest::Popular
    }

    /// Only valid from `Error`. Anywhere else it does nothing.
    pub fn on_retry(&mut self) -> Option<FetchRequest> {
        if !self.state.is_error() {
            return None;
        }
        info!("Retrying popular movies");
        Some(self.on_mount())
    }

    /// An empty list is a failure for this screen, not an empty grid.
    pub fn complete(&mut self, movies: Vec<MovieSummary>) {
        let outcome = if movies.is_empty() { None } else { Some(movies) };
        self.state.settle(outcome, NO_MOVIES_FOUND);
        debug!("List screen settled: {}", describe(&self.state));
    }

    pub async fn load(&mut self, source: &dyn MovieSource) {
        self.on_mount();
        let movies = source.fetch_popular().await;
        self.complete(movies);
    }

    /// Returns `false` (and fetches nothing) unless the screen was in `Error`.
    pub async fn retry(&mut self, source: &dyn MovieSource) -> bool {
        if self.on_retry().is_none() {
            return false;
        }
        let movies = source.fetch_popular().await;
        self.complete(movies);
        true
    }

    pub fn view(&self) -> ScreenView<'_, Vec<MovieSummary>> {
        self.state.view()
    }

    pub fn movies(&self) -> &[MovieSummary] {
        self.state.data().map(Vec::as_slice).unwrap_or_default()
    }
}

/// State of the detail screen for one movie id, fixed at construction.
#[derive(Debug)]
pub struct DetailController {
    movie_id: u64,
    state: FetchState<MovieDetail>,
}

impl DetailController {
    pub fn new(movie_id: u64) -> Self {
        Self {
            movie_id,
            state: FetchState::Loading,
        }
    }

    pub fn movie_id(&self) -> u64 {
        self.movie_id
    }

    pub fn state(&self) -> &FetchState<MovieDetail> {
        &self.state
    }

    pub fn on_mount(&mut self) -> FetchRequest {
        debug!("Detail screen mounted for movie {}", self.movie_id);
        self.state = FetchState::Loading;
        FetchRequest::Detail(self.movie_id)
    }

    pub fn on_retry(&mut self) -> Option<FetchRequest> {
        if !self.state.is_error() {
            return None;
        }
        info!("Retrying details for movie {}", self.movie_id);
        Some(self.on_mount())
    }

    pub fn complete(&mut self, detail: Option<MovieDetail>) {
        self.state.settle(detail, DETAIL_UNAVAILABLE);
        debug!(
            "Detail screen for {} settled: {}",
            self.movie_id,
            describe(&self.state)
        );
    }

    pub async fn load(&mut self, source: &dyn MovieSource) {
        self.on_mount();
        let detail = source.fetch_detail(self.movie_id).await;
        self.complete(detail);
    }

    pub async fn retry(&mut self, source: &dyn MovieSource) -> bool {
        if self.on_retry().is_none() {
            return false;
        }
        let detail = source.fetch_detail(self.movie_id).await;
        self.complete(detail);
        true
    }

    pub fn view(&self) -> ScreenView<'_, MovieDetail> {
        self.state.view()
    }
}

fn describe<T>(state: &FetchState<T>) -> &'static str {
    match state {
        FetchState::Loading => "loading",
        FetchState::Error(_) => "error",
        FetchState::Ready(_) => "ready",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StubSource, detail, summary};

    #[tokio::test]
    async fn test_list_success_becomes_ready_with_both_movies() {
        let source = StubSource::new().with_popular(vec![summary(1, "Um"), summary(2, "Dois")]);
        let mut list = ListController::new();

        list.load(&source).await;

        let ids: Vec<u64> = list.movies().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2]);
        match list.view() {
            ScreenView::Content(movies) => assert_eq!(movies.len(), 2),
            other => panic!("expected content, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_empty_is_an_error() {
        let source = StubSource::new().with_popular(vec![]);
        let mut list = ListController::new();

        list.load(&source).await;

        assert_eq!(list.state(), &FetchState::Error(NO_MOVIES_FOUND.to_string()));
        assert_eq!(list.view(), ScreenView::Failed { message: NO_MOVIES_FOUND });
    }

    #[tokio::test]
    async fn test_list_upstream_failure_is_the_same_error() {
        let source = StubSource::new().with_popular_failure();
        let mut list = ListController::new();

        list.load(&source).await;

        assert_eq!(list.state().error_message(), Some(NO_MOVIES_FOUND));
    }

    #[test]
    fn test_list_retry_recovers() {
        let source = StubSource::new()
            .with_popular(vec![])
            .with_popular(vec![summary(9, "Nove")]);
        let mut list = ListController::new();

        tokio_test::block_on(list.load(&source));
        assert!(list.state().is_error());

        let retried = tokio_test::block_on(list.retry(&source));
        assert!(retried);
        assert_eq!(list.movies().len(), 1);
        assert_eq!(source.popular_calls(), 2);
    }

    #[test]
    fn test_retry_outside_error_does_nothing() {
        let mut list = ListController::new();
        assert_eq!(list.on_retry(), None);
        assert!(list.state().is_loading());

        list.complete(vec![summary(1, "Um")]);
        assert_eq!(list.on_retry(), None);
        assert_eq!(list.movies().len(), 1);
    }

    #[test]
    fn test_retry_from_error_reenters_loading() {
        let mut list = ListController::new();
        list.complete(vec![]);
        assert_eq!(list.on_retry(), Some(FetchRequest::Popular));
        assert!(list.state().is_loading());
    }

    #[tokio::test]
    async fn test_detail_success_and_missing_date() {
        let mut record = detail(7, "Sete");
        record.summary.release_date = String::new();
        let source = StubSource::new().with_detail(7, Some(record));
        let mut controller = DetailController::new(7);

        controller.load(&source).await;

        let ScreenView::Content(loaded) = controller.view() else {
            panic!("expected content");
        };
        assert_eq!(loaded.summary.id, 7);
        assert_eq!(loaded.summary.release_date, "");
    }

    #[tokio::test]
    async fn test_detail_none_is_an_error() {
        let source = StubSource::new().with_detail(3, None);
        let mut controller = DetailController::new(3);

        controller.load(&source).await;

        assert_eq!(controller.view(), ScreenView::Failed { message: DETAIL_UNAVAILABLE });
    }

    #[tokio::test]
    async fn test_detail_retry_uses_same_id() {
        let source = StubSource::new()
            .with_detail(4, None)
            .with_detail(4, Some(detail(4, "Quatro")));
        let mut controller = DetailController::new(4);

        controller.load(&source).await;
        assert!(controller.state().is_error());
        assert_eq!(controller.on_retry(), Some(FetchRequest::Detail(4)));

        controller.complete(source.fetch_detail(4).await);
        assert_eq!(
            controller.state().data().map(|d| d.summary.title.as_str()),
            Some("Quatro")
        );
    }
}
