//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.koob/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::google_books::DEFAULT_BASE_URL;
use crate::core::query::MAX_RESULTS;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct KoobConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub display_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CatalogConfig {
    pub base_url: Option<String>,
    pub max_results: Option<u32>,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub delay_ms: Option<u64>,
    pub max_results: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DISPLAY_DELAY_MS: u64 = 6000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub max_results: u32,
    pub display_delay: Duration,
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

/// Returns the path to `~/.koob/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".koob").join("config.toml"))
}

/// Load config from `~/.koob/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `KoobConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<KoobConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(KoobConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(KoobConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<KoobConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# koob configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# display_delay_ms = 6000            # Pause before results appear (KOOB_DISPLAY_DELAY_MS)

# [catalog]
# base_url = "https://www.googleapis.com/books/v1/volumes"   # KOOB_BASE_URL
# max_results = 40                   # 1..=40 (KOOB_MAX_RESULTS)
"#;

fn generate_default_config(path: &PathBuf) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid number", key, raw);
            None
        }
    }
}

fn clamp_max_results(requested: u32) -> u32 {
    let clamped = requested.clamp(1, MAX_RESULTS);
    if clamped != requested {
        warn!(
            "max_results {} out of range, using {} (catalog accepts 1..={})",
            requested, clamped, MAX_RESULTS
        );
    }
    clamped
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &KoobConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let base_url = cli
        .endpoint
        .clone()
        .or_else(|| std::env::var("KOOB_BASE_URL").ok())
        .or_else(|| config.catalog.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let max_results = cli
        .max_results
        .or_else(|| env_parsed("KOOB_MAX_RESULTS"))
        .or(config.catalog.max_results)
        .map(clamp_max_results)
        .unwrap_or(MAX_RESULTS);

    let delay_ms = cli
        .delay_ms
        .or_else(|| env_parsed("KOOB_DISPLAY_DELAY_MS"))
        .or(config.general.display_delay_ms)
        .unwrap_or(DEFAULT_DISPLAY_DELAY_MS);

    ResolvedConfig {
        base_url,
        max_results,
        display_delay: Duration::from_millis(delay_ms),
    }
}
