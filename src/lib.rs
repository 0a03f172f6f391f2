//! FMDB library exports for testing

pub mod core;
pub mod tmdb;
pub mod tui;

#[cfg(test)]
pub mod test_support;
