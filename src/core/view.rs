//! # View Projections
//!
//! Plain data shaped for display, built from API records. Both the TUI and
//! the print commands render these, so formatting decisions (dates, ratings,
//! runtimes, image fallbacks) live here and nowhere else.

use chrono::{Datelike, NaiveDate};

use crate::core::strings::{SYNOPSIS_UNAVAILABLE, UNKNOWN_DATE, UNKNOWN_YEAR};
use crate::tmdb::{MovieDetail, MovieSummary, build_image_url};

const MONTHS_PT_BR: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// One cell of the popular grid.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCard {
    pub id: u64,
    pub title: String,
    pub year: String,
    pub rating: String,
    pub poster_url: String,
}

impl MovieCard {
    pub fn from_summary(movie: &MovieSummary, image_size: &str) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            year: release_year(&movie.release_date)
                .map(|y| y.to_string())
                .unwrap_or_else(|| UNKNOWN_YEAR.to_string()),
            rating: format_rating(movie.vote_average),
            poster_url: build_image_url(movie.poster_path.as_deref(), image_size),
        }
    }
}

/// Everything the detail screen shows, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailLayout {
    pub title: String,
    pub tagline: Option<String>,
    pub release_date: String,
    pub rating: String,
    pub vote_count: u64,
    pub runtime: Option<String>,
    pub genres: Vec<String>,
    pub overview: String,
    pub poster_url: String,
    pub backdrop_url: String,
}

impl DetailLayout {
    pub fn from_detail(detail: &MovieDetail, image_size: &str) -> Self {
        let movie = &detail.summary;
        let overview = if movie.overview.trim().is_empty() {
            SYNOPSIS_UNAVAILABLE.to_string()
        } else {
            movie.overview.clone()
        };

        Self {
            title: movie.title.clone(),
            tagline: detail
                .tagline
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
            release_date: format_release_date(&movie.release_date),
            rating: format_rating(movie.vote_average),
            vote_count: detail.vote_count,
            runtime: format_runtime(detail.runtime_minutes),
            genres: detail.genres.iter().map(|g| g.name.clone()).collect(),
            overview,
            poster_url: build_image_url(movie.poster_path.as_deref(), image_size),
            backdrop_url: build_image_url(movie.backdrop_path.as_deref(), image_size),
        }
    }
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

pub fn release_year(date: &str) -> Option<i32> {
    parse_date(date).map(|d| d.year())
}

/// Long pt-BR date (`15 de março de 2024`), or the unknown-date label when
/// the date is empty or unparsable.
pub fn format_release_date(date: &str) -> String {
    match parse_date(date) {
        Some(d) => format!(
            "{} de {} de {}",
            d.day(),
            MONTHS_PT_BR[d.month0() as usize],
            d.year()
        ),
        None => UNKNOWN_DATE.to_string(),
    }
}

/// One decimal place, clamped to the 0-10 scale.
pub fn format_rating(vote_average: f64) -> String {
    format!("{:.1}", vote_average.clamp(0.0, 10.0))
}

/// `2h 15min`, `45min`, or `None` when the runtime is unknown (0).
pub fn format_runtime(minutes: u32) -> Option<String> {
    match (minutes / 60, minutes % 60) {
        (0, 0) => None,
        (0, m) => Some(format!("{m}min")),
        (h, 0) => Some(format!("{h}h")),
        (h, m) => Some(format!("{h}h {m}min")),
    }
}
