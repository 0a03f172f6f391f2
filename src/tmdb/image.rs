//! Image URL construction for the TMDB CDN. No network I/O happens here.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const IMAGE_CDN_BASE: &str = "https://image.tmdb.org/t/p/";
pub const DEFAULT_IMAGE_SIZE: &str = "w500";
/// Shown wherever a movie has no poster or backdrop.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/500x750?text=FMDB";

/// Size tokens the CDN accepts for posters.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PosterSize {
    W92,
    W154,
    W185,
    W342,
    #[default]
    W500,
    W780,
    Original,
}

impl PosterSize {
    pub fn token(self) -> &'static str {
        match self {
            PosterSize::W92 => "w92",
            PosterSize::W154 => "w154",
            PosterSize::W185 => "w185",
            PosterSize::W342 => "w342",
            PosterSize::W500 => "w500",
            PosterSize::W780 => "w780",
            PosterSize::Original => "original",
        }
    }
}

/// Full CDN URL for an image path, or the placeholder when there is none.
///
/// An empty path counts as missing, for every size.
pub fn build_image_url(path: Option<&str>, size: &str) -> String {
    match path {
        Some(p) if !p.is_empty() => format!("{IMAGE_CDN_BASE}{size}{p}"),
        _ => PLACEHOLDER_IMAGE_URL.to_string(),
    }
}
