//! Optional `tocsv.toml` configuration
//!
//! Only diagnostics are configurable here: the default log filter and
//! whether stdout messages are colored. Paths, header and row format are
//! fixed.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up in the working directory
pub const CONFIG_FILE: &str = "tocsv.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log filter (e.g. "info", "debug") when no `-v` is given
    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Color user-facing messages when stdout supports it
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

/// Load `tocsv.toml` from `dir`
///
/// Falls back to defaults if the file doesn't exist. A file that exists but
/// fails to parse is an error.
pub fn load_config(dir: &Path) -> Result<Config> {
    let config_path = dir.join(CONFIG_FILE);

    if !config_path.exists() {
        log::debug!("No {} found, using default config", CONFIG_FILE);
        return Ok(Config::default());
    }

    let config_str = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    let config: Config = toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    log::debug!("Loaded config from {}: {:?}", config_path.display(), config);
    Ok(config)
}
