//! Named defaults, optionally overridden by a JSON or TOML config file.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::resize::{DEFAULT_CHAR_ASPECT, MIN_CHAR_ASPECT};

pub const DEFAULT_COLUMNS: u32 = 100;
pub const DEFAULT_OUTPUT: &str = "ascii_art.txt";

fn default_columns() -> u32 {
    DEFAULT_COLUMNS
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

fn default_char_aspect() -> f64 {
    DEFAULT_CHAR_ASPECT
}

/// Application defaults, passed explicitly to the converter and the CLI.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Width in characters used when the user accepts the default.
    #[serde(default = "default_columns")]
    pub default_columns: u32,
    /// File the art is saved to when the user accepts the default.
    #[serde(default = "default_output")]
    pub default_output: String,
    /// Character cell height-to-width ratio.
    #[serde(default = "default_char_aspect")]
    pub char_aspect: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_columns: DEFAULT_COLUMNS,
            default_output: DEFAULT_OUTPUT.to_string(),
            char_aspect: DEFAULT_CHAR_ASPECT,
        }
    }
}

impl AppConfig {
    /// Parse a config file; `.toml` files are read as TOML, anything else as JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let cfg: AppConfig = if path.extension().is_some_and(|e| e == "toml") {
            toml::from_str(&text).context("parsing config toml")?
        } else {
            serde_json::from_str(&text).context("parsing config json")?
        };
        cfg.validate()
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(cfg)
    }

    /// Resolve the active configuration.
    ///
    /// An explicit path must exist. Otherwise the app data directory and then
    /// the current directory are searched for `asciigen.json` / `asciigen.toml`,
    /// falling back to the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(p) = explicit {
            log::info!("loading config from {}", p.display());
            return Self::from_file(p);
        }

        for p in search_paths() {
            if p.exists() {
                log::info!("loading config from {}", p.display());
                return Self::from_file(&p);
            }
        }

        log::debug!("no config file found, using built-in defaults");
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_columns == 0 {
            return Err(anyhow!("default_columns must be a positive integer"));
        }
        if !self.char_aspect.is_finite() || self.char_aspect < MIN_CHAR_ASPECT {
            return Err(anyhow!(
                "char_aspect must be a finite number >= {}, got {}",
                MIN_CHAR_ASPECT,
                self.char_aspect
            ));
        }
        if self.default_output.trim().is_empty() {
            return Err(anyhow!("default_output cannot be empty"));
        }
        Ok(())
    }
}

fn search_paths() -> Vec<PathBuf> {
    let mut tried: Vec<PathBuf> = Vec::new();
    if let Some(mut d) = dirs::data_dir() {
        d.push("asciigen");
        tried.push(d.join("asciigen.json"));
        tried.push(d.join("asciigen.toml"));
    }
    tried.push(PathBuf::from("asciigen.json"));
    tried.push(PathBuf::from("asciigen.toml"));
    tried
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.default_columns, 100);
        assert_eq!(cfg.default_output, "ascii_art.txt");
        assert_eq!(cfg.char_aspect, 1.65);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("asciigen.json");
        fs::write(&p, r#"{"default_columns": 60}"#).unwrap();
        let cfg = AppConfig::from_file(&p).unwrap();
        assert_eq!(cfg.default_columns, 60);
        assert_eq!(cfg.default_output, DEFAULT_OUTPUT);
        assert_eq!(cfg.char_aspect, DEFAULT_CHAR_ASPECT);
    }

    #[test]
    fn toml_file() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("asciigen.toml");
        fs::write(&p, "default_output = \"out.txt\"\nchar_aspect = 2.0\n").unwrap();
        let cfg = AppConfig::from_file(&p).unwrap();
        assert_eq!(cfg.default_output, "out.txt");
        assert_eq!(cfg.char_aspect, 2.0);
        assert_eq!(cfg.default_columns, DEFAULT_COLUMNS);
    }

    #[test]
    fn rejects_zero_columns() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("asciigen.json");
        fs::write(&p, r#"{"default_columns": 0}"#).unwrap();
        assert!(AppConfig::from_file(&p).is_err());
    }

    #[test]
    fn rejects_bad_aspect() {
        let cfg = AppConfig {
            char_aspect: 0.0,
            ..AppConfig::default()
        };
        assert!(cfg.validate().is_err());

        let tiny = AppConfig {
            char_aspect: 1e-300,
            ..AppConfig::default()
        };
        assert!(tiny.validate().is_err());

        let lowest = AppConfig {
            char_aspect: MIN_CHAR_ASPECT,
            ..AppConfig::default()
        };
        assert!(lowest.validate().is_ok());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(AppConfig::load(Some(&dir.path().join("nope.json"))).is_err());
    }
}
