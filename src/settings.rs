//! Puzzle settings
//!
//! Loaded from a JSON file by the binary; missing fields fall back to the
//! defaults (an 11×20 puzzle in a 1366×768 workspace).

use std::fs;
use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::board::GridModel;
use crate::consts::MAX_WORKSPACE_EXTENT;
use crate::error::{ConfigurationError, PuzzleError};

/// Puzzle construction settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Grid rows
    pub rows: usize,
    /// Grid columns
    pub cols: usize,
    /// Workspace width in pixels
    pub workspace_width: i32,
    /// Workspace height in pixels
    pub workspace_height: i32,
    /// Scatter seed (None picks a fresh one)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: 11,
            cols: 20,
            workspace_width: 1366,
            workspace_height: 768,
            seed: None,
        }
    }
}

impl Settings {
    /// Workspace size as a vector
    pub fn workspace(&self) -> IVec2 {
        IVec2::new(self.workspace_width, self.workspace_height)
    }

    /// Piece count (rows × cols), rejected when empty or past the id range
    pub fn piece_count(&self) -> Result<usize, ConfigurationError> {
        GridModel::slot_count(self.rows, self.cols)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.piece_count()?;
        let extent = 1..=MAX_WORKSPACE_EXTENT;
        if !extent.contains(&self.workspace_width) || !extent.contains(&self.workspace_height) {
            return Err(ConfigurationError::WorkspaceOutOfRange {
                width: self.workspace_width,
                height: self.workspace_height,
                max: MAX_WORKSPACE_EXTENT,
            });
        }
        Ok(())
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PuzzleError> {
        let json = fs::read_to_string(path.as_ref())?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PuzzleError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}
