//! Configuration types for docdex.
//!
//! [`Config::load`] reads `~/.config/docdex/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist, then applies `DOCDEX_*`
//! environment overrides. Nested keys are joined with `__`, so
//! `DOCDEX_OUTPUT__LIMIT=5` sets `[output] limit`. [`Config::defaults`]
//! returns the same defaults without touching the filesystem (useful in
//! tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[index]
# Bucket files, canonical JSON tables, or generator search/ directories.
paths = []

[output]
limit = 50
json  = false
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/docdex/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[index]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexConfig {
    /// Used when no `--index` is given on the command line.
    #[serde(default)]
    pub paths: Vec<PathBuf>,
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Maximum number of hits printed per query.
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub json: bool,
}

fn default_limit() -> usize { 50 }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            json: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/docdex/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load from an explicit file, layered on top of the built-in defaults.
    /// A missing file leaves the defaults in place.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        Self::load_layered(path, environment())
    }

    fn load_layered(path: &Path, env: config::Environment) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .add_source(env)
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path and environment helpers
// ---------------------------------------------------------------------------

/// `DOCDEX_` prefix, `__` between nested keys.
fn environment() -> config::Environment {
    config::Environment::with_prefix("DOCDEX")
        .prefix_separator("_")
        .separator("__")
}

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("docdex")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
