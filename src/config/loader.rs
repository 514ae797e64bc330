//! Configuration loader with environment variable support

use super::Config;
use crate::error::Result;
use config::{Environment, File};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `ITEM_CALC__BENCHMARK__SEED=7`
pub const ENV_PREFIX: &str = "ITEM_CALC";

/// Variable naming the configuration file
pub const CONFIG_PATH_VAR: &str = "ITEM_CALC_CONFIG";

/// File looked up when [`CONFIG_PATH_VAR`] is unset
pub const DEFAULT_CONFIG_FILE: &str = "item-calculator.toml";

/// Where the configuration file lives and whether it must exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    /// Set for explicitly named files, so a mistyped path is an error
    pub required: bool,
}

impl ConfigLocation {
    /// Location from [`CONFIG_PATH_VAR`], falling back to [`DEFAULT_CONFIG_FILE`]
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(CONFIG_PATH_VAR).ok())
    }

    pub fn resolve(explicit: Option<String>) -> Self {
        match explicit {
            Some(path) => Self {
                path: PathBuf::from(path),
                required: true,
            },
            None => Self {
                path: PathBuf::from(DEFAULT_CONFIG_FILE),
                required: false,
            },
        }
    }
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let config = config::Config::builder()
        .add_source(File::from(path.as_ref()))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    Ok(cfg)
}

/// Load configuration from a TOML file with environment variable overrides.
/// When `required` is false a missing file leaves the defaults in place.
pub fn load_config_with_env<P: AsRef<Path>>(path: P, required: bool) -> Result<Config> {
    let config = config::Config::builder()
        .add_source(File::from(path.as_ref()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
        )
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    Ok(cfg)
}
