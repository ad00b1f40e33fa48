//! CLI configuration stored in `campus.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use serde::Deserialize;
use tracing::debug;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "campus.toml";

/// How `university show` prints a roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full information blocks.
    #[default]
    Text,
    /// One summary label per line.
    Label,
    /// Pretty-printed JSON array.
    Json,
}

/// Campus configuration (TOML).
///
/// Missing fields fall back to defaults so a partial file stays valid.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CampusConfig {
    /// Width of the `=` rule under the demonstration heading.
    pub banner_width: usize,

    /// Output format used by `show` when `--format` is not given.
    pub format: OutputFormat,
}

impl Default for CampusConfig {
    fn default() -> Self {
        Self {
            banner_width: 50,
            format: OutputFormat::Text,
        }
    }
}

impl CampusConfig {
    pub fn validate(&self) -> Result<()> {
        if self.banner_width == 0 {
            return Err(anyhow!("banner_width must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `CampusConfig::default()`.
pub fn load_config(path: &Path) -> Result<CampusConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = CampusConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CampusConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    debug!(path = %path.display(), ?cfg, "config loaded");
    Ok(cfg)
}
