//! HTTP client for The Movie Database v3 API.
//!
//! Two endpoints are used, both plain GETs with the same fixed query:
//!
//! ```text
//! GET {base}/movie/popular?api_key={key}&language={language}
//! GET {base}/movie/{id}?api_key={key}&language={language}
//! ```
//!
//! The client keeps nothing between calls besides its configuration.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::source::{FetchError, MovieSource};
use super::types::{MovieDetail, MovieSummary, PopularPage};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LANGUAGE: &str = "pt-BR";

pub struct TmdbClient {
    api_key: String,
    base_url: String,
    language: String,
    client: reqwest::Client,
}

impl TmdbClient {
    /// Creates a client against the public API with the default locale.
    pub fn new(api_key: String) -> Self {
        Self::with_options(api_key, DEFAULT_BASE_URL.to_string(), DEFAULT_LANGUAGE.to_string())
    }

    /// Creates a client with a custom endpoint and locale (tests point this at a mock server).
    pub fn with_options(api_key: String, base_url: String, language: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            language,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Performs one GET under the base URL and decodes the body as `T`.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        // Never log the key itself
        debug!("GET {} (language={})", url, self.language);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("language", self.language.as_str())])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        debug!("{} -> {}", path, status);
        if !status.is_success() {
            warn!("TMDB returned HTTP {} for {}", status.as_u16(), path);
            return Err(FetchError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.without_url().to_string()))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl MovieSource for TmdbClient {
    async fn popular(&self) -> Result<Vec<MovieSummary>, FetchError> {
        let page: PopularPage = self.get_json("/movie/popular").await?;
        info!("Fetched {} popular movies", page.results.len());
        Ok(page.results)
    }

    async fn details(&self, id: u64) -> Result<MovieDetail, FetchError> {
        let detail: MovieDetail = self.get_json(&format!("/movie/{id}")).await?;
        info!("Fetched details for movie {} ({})", id, detail.summary.title);
        Ok(detail)
    }
}
