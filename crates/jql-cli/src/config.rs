//! `jql.toml` configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "jql.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding saved filters.
    pub filters_dir: PathBuf,
    /// Jira base URL used by `jql url` when `--base` is omitted.
    pub base_url: Option<String>,
    /// `field[:asc|desc]` applied by `jql build` when no `--order-by` is given.
    pub default_order: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filters_dir: PathBuf::from(".jql").join("filters"),
            base_url: None,
            default_order: None,
        }
    }
}

impl Config {
    /// Load `explicit` if given (it must exist), otherwise `jql.toml` in the
    /// working directory if present, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    debug!("no {DEFAULT_CONFIG_FILE}, using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self =
            toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.filters_dir, PathBuf::from(".jql/filters"));
        assert!(config.base_url.is_none());
        assert!(config.default_order.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config: Config = toml::from_str("base_url = \"https://jira.example.com\"").unwrap();
        assert_eq!(config.base_url.as_deref(), Some("https://jira.example.com"));
        assert_eq!(config.filters_dir, Config::default().filters_dir);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<Config>("colour = \"blue\"").is_err());
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());

        let path = dir.path().join("jql.toml");
        std::fs::write(&path, "filters_dir = \"saved\"\ndefault_order = \"created:desc\"\n")
            .unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.filters_dir, PathBuf::from("saved"));
        assert_eq!(config.default_order.as_deref(), Some("created:desc"));
    }
}
