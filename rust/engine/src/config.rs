//! Selection of the randomness source.
//!
//! Values are layered: built-in default, then the TOML file named by
//! `MONTYHALL_CONFIG`, then the `MONTYHALL_SEED` environment variable.
//!
//! ```toml
//! # montyhall.toml
//! seed = 42
//! ```

use serde::{Deserialize, Serialize};
use std::fs;

use crate::errors::ConfigError;

pub const CONFIG_ENV: &str = "MONTYHALL_CONFIG";
pub const SEED_ENV: &str = "MONTYHALL_SEED";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngConfig {
    /// Seed for a reproducible ChaCha20 stream; `None` uses OS entropy
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    #[default]
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigSources {
    pub seed: ValueSource,
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: RngConfig,
    pub sources: ConfigSources,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
}

pub fn load() -> Result<RngConfig, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = RngConfig::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.is_empty() {
            let f = parse_file(&fs::read_to_string(&path)?)?;
            if let Some(v) = f.seed {
                cfg.seed = Some(v);
                sources.seed = ValueSource::File;
            }
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV) {
        if !seed.is_empty() {
            cfg.seed = Some(parse_seed(&seed)?);
            sources.seed = ValueSource::Env;
        }
    }

    tracing::debug!(seed = ?cfg.seed, source = ?sources.seed, "resolved rng configuration");
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn parse_file(s: &str) -> Result<FileConfig, ConfigError> {
    Ok(toml::from_str(s)?)
}

fn parse_seed(s: &str) -> Result<u64, ConfigError> {
    s.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("seed must be an unsigned integer, got {s:?}")))
}
