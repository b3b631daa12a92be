//! Configuration types for bioastra.
//!
//! [`Config::load`] layers an optional TOML file and `BIOASTRA_*` environment
//! variables over the embedded defaults. [`Config::defaults`] returns the
//! defaults alone without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
bind        = "127.0.0.1:8000"
cors_origin = "http://localhost:3000"

[query]
search_default_limit  = 20
studies_default_limit = 10
max_limit             = 100
suggestion_limit      = 10
related_limit         = 5

[store]
"#;

const ENV_PREFIX: &str = "BIOASTRA";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// `[server]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Single origin allowed by CORS. `"*"` allows any.
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_bind() -> String { "127.0.0.1:8000".to_string() }
fn default_cors_origin() -> String { "http://localhost:3000".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            cors_origin: default_cors_origin(),
        }
    }
}

/// `[query]` section: paging defaults and result caps.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_search_limit")]
    pub search_default_limit: usize,
    #[serde(default = "default_studies_limit")]
    pub studies_default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
}

fn default_search_limit() -> usize { 20 }
fn default_studies_limit() -> usize { 10 }
fn default_max_limit() -> usize { 100 }
fn default_suggestion_limit() -> usize { 10 }
fn default_related_limit() -> usize { 5 }

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            search_default_limit: default_search_limit(),
            studies_default_limit: default_studies_limit(),
            max_limit: default_max_limit(),
            suggestion_limit: default_suggestion_limit(),
            related_limit: default_related_limit(),
        }
    }
}

/// `[store]` section. Without `data_path` the embedded sample is served.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub data_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load defaults, then `path` (or the per-user config file when `None`),
    /// then the process environment. A missing file is not an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
        Self::layered(&path, None)
    }

    /// As [`Config::load`] but reading environment overrides from `env`
    /// instead of the process environment.
    pub fn load_with_env(path: &Path, env: HashMap<String, String>) -> anyhow::Result<Self> {
        Self::layered(path, Some(env))
    }

    fn layered(path: &Path, env: Option<HashMap<String, String>>) -> anyhow::Result<Self> {
        tracing::debug!(path = %path.display(), "loading config");
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
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
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("bioastra")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
