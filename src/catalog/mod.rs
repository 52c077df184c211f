//! Tag catalog: the store's numeric tag IDs mapped to display names.
//!
//! Loaded once at startup from a JSON object such as
//! `{"19": "Action", "492": "Strategy"}` and never modified afterwards.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::ConfigError;

#[derive(Debug, Clone, Default)]
pub struct TagCatalog {
    tags: HashMap<String, String>,
}

impl TagCatalog {
    /// Load the catalog from a JSON file. A missing file or anything other
    /// than an object of string values is a configuration error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let tags: HashMap<String, String> =
            serde_json::from_str(&content).map_err(|e| ConfigError::Catalog {
                path: path.to_path_buf(),
                source: e,
            })?;

        tracing::debug!(path = %path.display(), count = tags.len(), "Loaded tag catalog");
        Ok(Self { tags })
    }

    pub fn from_map(tags: HashMap<String, String>) -> Self {
        Self { tags }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.tags.get(id).map(String::as_str)
    }

    /// Names for the given IDs in input order. Unknown IDs are skipped.
    pub fn resolve<S: AsRef<str>>(&self, ids: &[S]) -> Vec<String> {
        ids.iter()
            .filter_map(|id| self.get(id.as_ref()))
            .map(String::from)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
