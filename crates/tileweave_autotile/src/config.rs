//! Autotile configuration
//!
//! Project-level container for [`WangSet`]s and its JSON persistence. Map
//! data itself is not persisted here; only the catalog definitions are.

use crate::wangset::WangSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when loading or saving an [`AutotileConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialize error: {0}")]
    Serialize(String),
}

/// Configuration for autotiling in a project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutotileConfig {
    /// All wang sets defined in the project
    pub wang_sets: Vec<WangSet>,
}

impl AutotileConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a wang set
    pub fn add_wang_set(&mut self, wang_set: WangSet) {
        self.wang_sets.push(wang_set);
    }

    /// Get wang set by ID
    pub fn get_wang_set(&self, id: Uuid) -> Option<&WangSet> {
        self.wang_sets.iter().find(|ws| ws.id == id)
    }

    /// Get mutable wang set by ID
    pub fn get_wang_set_mut(&mut self, id: Uuid) -> Option<&mut WangSet> {
        self.wang_sets.iter_mut().find(|ws| ws.id == id)
    }

    /// Remove wang set by ID
    pub fn remove_wang_set(&mut self, id: Uuid) -> Option<WangSet> {
        if let Some(pos) = self.wang_sets.iter().position(|ws| ws.id == id) {
            Some(self.wang_sets.remove(pos))
        } else {
            None
        }
    }

    /// Get all wang sets for a specific tileset
    pub fn wang_sets_for_tileset(&self, tileset_id: Uuid) -> Vec<&WangSet> {
        self.wang_sets
            .iter()
            .filter(|ws| ws.tileset_id == tileset_id)
            .collect()
    }
}

/// Load a config from a JSON file
pub fn load_config(path: &Path) -> Result<AutotileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
    parse_config(&content)
}

/// Parse a config from a JSON string
pub fn parse_config(json: &str) -> Result<AutotileConfig, ConfigError> {
    serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Save a config to a JSON file
pub fn save_config(config: &AutotileConfig, path: &Path) -> Result<(), ConfigError> {
    let content =
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::Serialize(e.to_string()))?;
    std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))
}
