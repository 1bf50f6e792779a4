//! History Configuration
//!
//! Controls how revision histories are assembled: sort direction and
//! whether deletion revisions are kept.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{HistoryError, HistoryResult};
use crate::observability::{log_event_with_fields, Event};

/// Direction in which a history lists its revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevisionSort {
    /// Oldest revision first
    #[default]
    Asc,
    /// Newest revision first
    Desc,
}

/// History assembly configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Sort direction (default: asc)
    #[serde(default)]
    pub sort: RevisionSort,

    /// Keep revisions that recorded a deletion (default: true)
    #[serde(default = "default_include_deletions")]
    pub include_deletions: bool,
}

fn default_include_deletions() -> bool {
    true
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            sort: RevisionSort::default(),
            include_deletions: default_include_deletions(),
        }
    }
}

impl HistoryConfig {
    /// Create a config with the given sort direction
    pub fn with_sort(sort: RevisionSort) -> Self {
        Self {
            sort,
            ..Default::default()
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> HistoryResult<Self> {
        serde_json::from_str(json).map_err(|e| HistoryError::Config(e.to_string()))
    }

    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> HistoryResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| HistoryError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json_str(&contents)?;

        let path_str = path.display().to_string();
        log_event_with_fields(Event::ConfigLoaded, &[("path", &path_str)]);
        Ok(config)
    }
}
