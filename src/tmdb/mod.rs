pub mod client;
pub mod image;
pub mod source;
pub mod types;

pub use client::TmdbClient;
pub use image::{PosterSize, build_image_url};
pub use source::{FetchError, MovieSource};
pub use types::{Genre, MovieDetail, MovieSummary, PopularPage};
