//! # Fetch State
//!
//! The loading phase of one screen, shared by the list and the detail
//! screens:
//!
//! ```text
//!            on_mount()                 data
//!  ──────────────────────▶ Loading ─────────────▶ Ready(T)
//!                            │  ▲
//!              empty / none  │  │ on_retry()
//!                            ▼  │
//!                         Error(message)
//! ```
//!
//! A screen never holds partial data: a transition replaces the whole value.

/// Exactly one of the three phases holds at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Error(String),
    Ready(T),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

/// What a screen should draw, borrowed from its state.
#[derive(Debug, PartialEq)]
pub enum ScreenView<'a, T> {
    Spinner,
    Failed { message: &'a str },
    Content(&'a T),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FetchState::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Projects the state to the view it should produce. Never mutates.
    pub fn view(&self) -> ScreenView<'_, T> {
        match self {
            FetchState::Loading => ScreenView::Spinner,
            FetchState::Error(message) => ScreenView::Failed { message },
            FetchState::Ready(data) => ScreenView::Content(data),
        }
    }

    /// Applies the outcome of one fetch: `Some` becomes `Ready`, `None` becomes
    /// `Error(message)`.
    pub(crate) fn settle(&mut self, outcome: Option<T>, message: &str) {
        *self = match outcome {
            Some(data) => FetchState::Ready(data),
            None => FetchState::Error(message.to_string()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        let state: FetchState<u8> = FetchState::default();
        assert!(state.is_loading());
        assert_eq!(state.view(), ScreenView::Spinner);
    }

    #[test]
    fn test_view_projects_each_variant() {
        let failed: FetchState<u8> = FetchState::Error("falhou".to_string());
        assert_eq!(failed.view(), ScreenView::Failed { message: "falhou" });
        assert_eq!(failed.error_message(), Some("falhou"));
        assert!(failed.data().is_none());

        let ready = FetchState::Ready(3u8);
        assert_eq!(ready.view(), ScreenView::Content(&3));
        assert_eq!(ready.data(), Some(&3));
    }

    #[test]
    fn test_settle_replaces_whole_state() {
        let mut state = FetchState::Ready(vec![1, 2]);
        state.settle(None, "sem dados");
        assert_eq!(state, FetchState::Error("sem dados".to_string()));

        state.settle(Some(vec![5]), "sem dados");
        assert_eq!(state, FetchState::Ready(vec![5]));
    }
}
