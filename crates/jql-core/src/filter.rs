//! Saved filters: named JQL queries persisted as YAML files.
//!
//! A saved filter lives at `{root}/{name}.yaml`. Users can refer to a
//! filter by name instead of re-typing the query.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{JqlError, Result};

/// A saved JQL query with metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedFilter {
    /// Unique name (used as filename: `{name}.yaml`)
    pub name: String,
    /// Optional human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The rendered JQL
    pub jql: String,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

impl SavedFilter {
    /// Create a filter stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`JqlError::InvalidArgument`] if the name is not usable as a
    /// file name.
    pub fn new(
        name: impl Into<String>,
        jql: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            description,
            jql: jql.into(),
            created_at: Utc::now().to_rfc3339(),
        })
    }
}

/// Names are restricted to ASCII alphanumerics, `-` and `_`.
fn validate_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(JqlError::invalid_argument(format!(
            "invalid filter name '{name}': use letters, digits, '-' or '_'"
        )))
    }
}

/// Directory of saved filters.
#[derive(Debug, Clone)]
pub struct FilterStore {
    root: PathBuf,
}

impl FilterStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.root.join(format!("{name}.yaml")))
    }

    /// Write a filter, replacing any existing filter with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`JqlError::Io`] if the directory or file cannot be written.
    pub fn save(&self, filter: &SavedFilter) -> Result<PathBuf> {
        let path = self.path_for(&filter.name)?;
        fs::create_dir_all(&self.root)?;
        let yaml = serde_yaml::to_string(filter)?;
        fs::write(&path, yaml)?;
        debug!(name = %filter.name, path = %path.display(), "saved filter");
        Ok(path)
    }

    /// Read a filter by name.
    ///
    /// # Errors
    ///
    /// Returns [`JqlError::FilterNotFound`] if no such filter exists.
    pub fn load(&self, name: &str) -> Result<SavedFilter> {
        let path = self.path_for(name)?;
        if !path.exists() {
            return Err(JqlError::FilterNotFound(name.to_string()));
        }
        let yaml = fs::read_to_string(&path)?;
        Ok(serde_yaml::from_str(&yaml)?)
    }

    /// All saved filters, sorted by name. A missing directory is empty.
    ///
    /// # Errors
    ///
    /// Returns [`JqlError::Io`] or [`JqlError::Serialization`] if a filter
    /// file cannot be read.
    pub fn list(&self) -> Result<Vec<SavedFilter>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut filters = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            let yaml = fs::read_to_string(&path)?;
            filters.push(serde_yaml::from_str::<SavedFilter>(&yaml)?);
        }
        filters.sort_by(|a, b| a.name.cmp(&b.name));
        debug!(count = filters.len(), root = %self.root.display(), "listed filters");
        Ok(filters)
    }

    /// Delete a filter by name.
    ///
    /// # Errors
    ///
    /// Returns [`JqlError::FilterNotFound`] if no such filter exists.
    pub fn remove(&self, name: &str) -> Result<()> {
        let path = self.path_for(name)?;
        if !path.exists() {
            return Err(JqlError::FilterNotFound(name.to_string()));
        }
        fs::remove_file(&path)?;
        debug!(name, "removed filter");
        Ok(())
    }
}
