//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.fmdb/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::tmdb::PosterSize;
use crate::tmdb::client::{DEFAULT_BASE_URL, DEFAULT_LANGUAGE};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FmdbConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub language: Option<String>,
    pub poster_size: Option<PosterSize>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TmdbConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Empty when nothing configured one; requests then fail upstream with 401.
    pub api_key: String,
    pub base_url: String,
    pub language: String,
    pub poster_size: PosterSize,
    pub log_level: LevelFilter,
}

/// Values that came from the command line. `None` = flag not given.
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub language: Option<&'a str>,
    pub poster_size: Option<PosterSize>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.fmdb/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".fmdb").join("config.toml"))
}

/// Load config from `~/.fmdb/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FmdbConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FmdbConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FmdbConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<FmdbConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(FmdbConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FmdbConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    // Debug output would include the api key
    debug!(
        "Config: language={:?}, poster_size={:?}, base_url={:?}, api_key set: {}",
        config.general.language,
        config.general.poster_size,
        config.tmdb.base_url,
        config.tmdb.api_key.is_some()
    );
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# FMDB Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# language = "pt-BR"                 # Or set FMDB_LANGUAGE env var
# poster_size = "w500"               # w92, w154, w185, w342, w500, w780, original
# log_level = "debug"                # error, warn, info, debug, trace, off

# [tmdb]
# api_key = "..."                    # Or set TMDB_API_KEY env var
# base_url = "https://api.themoviedb.org/3"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FmdbConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    resolve_with_env(config, cli, |name| std::env::var(name).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &FmdbConfig,
    cli: &CliOverrides<'_>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // API key: env → config
    let api_key = env("TMDB_API_KEY")
        .or_else(|| config.tmdb.api_key.clone())
        .unwrap_or_default();

    // Base URL: env → config → default
    let base_url = env("TMDB_BASE_URL")
        .or_else(|| config.tmdb.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Language: CLI → env → config → default
    let language = cli
        .language
        .map(|s| s.to_string())
        .or_else(|| env("FMDB_LANGUAGE"))
        .or_else(|| config.general.language.clone())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    // Poster size: CLI → config → default
    let poster_size = cli
        .poster_size
        .or(config.general.poster_size)
        .unwrap_or_default();

    let log_level = match config.general.log_level.as_deref() {
        None => LevelFilter::Debug,
        Some(level) => level.parse().unwrap_or_else(|_| {
            warn!("Unknown log_level {level:?}, using debug");
            LevelFilter::Debug
        }),
    };

    ResolvedConfig {
        api_key,
        base_url,
        language,
        poster_size,
        log_level,
    }
}
