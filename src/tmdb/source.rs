use std::fmt;

use async_trait::async_trait;
use log::warn;

use super::types::{MovieDetail, MovieSummary};

/// Why a request to the movie database did not produce a record.
///
/// Callers of the sentinel methods never see these; they exist so the
/// precise API can still be used (and logged) when the distinction matters.
#[derive(Debug)]
pub enum FetchError {
    /// No usable response: DNS, connection refused, timeout, body cut short.
    Transport(String),
    /// The API answered with a non-success status.
    Upstream { status: u16 },
    /// The body was not the JSON shape we expect.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "transport error: {msg}"),
            FetchError::Upstream { status } => write!(f, "upstream returned HTTP {status}"),
            FetchError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Where the screens get their movies from.
///
/// `TmdbClient` is the production implementation; tests script their own.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// First page of popular movies.
    async fn popular(&self) -> Result<Vec<MovieSummary>, FetchError>;

    /// Full record for a single movie.
    async fn details(&self, id: u64) -> Result<MovieDetail, FetchError>;

    /// Popular movies, or an empty list on any failure.
    async fn fetch_popular(&self) -> Vec<MovieSummary> {
        match self.popular().await {
            Ok(movies) => movies,
            Err(e) => {
                warn!("Error fetching popular movies: {e}");
                Vec::new()
            }
        }
    }

    /// Movie details, or `None` on any failure (including unknown ids).
    async fn fetch_detail(&self, id: u64) -> Option<MovieDetail> {
        match self.details(id).await {
            Ok(detail) => Some(detail),
            Err(e) => {
                warn!("Error fetching movie details for {id}: {e}");
                None
            }
        }
    }
}
