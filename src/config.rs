use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::command::DEFAULT_CAPACITY;
use crate::tools::{ToolSettings, MAX_THICKNESS, MIN_THICKNESS};

/// Errors that can occur while loading an [`EngineConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Everything fixed for the lifetime of a canvas session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing keys fall back to the defaults below
pub struct EngineConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Color of a cleared canvas and of the eraser
    pub background: Color,
    /// Maximum number of undo snapshots
    pub history_capacity: usize,
    pub min_thickness: u32,
    pub max_thickness: u32,
    /// Tool, color, thickness and style at startup
    pub initial: ToolSettings,
    /// Where the Save button writes the PNG
    pub export_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1000,
            canvas_height: 658,
            background: Color::WHITE,
            history_capacity: DEFAULT_CAPACITY,
            min_thickness: MIN_THICKNESS,
            max_thickness: MAX_THICKNESS,
            initial: ToolSettings::default(),
            export_path: PathBuf::from("my_drawing.png"),
        }
    }
}

impl EngineConfig {
    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let config: EngineConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas must not be empty, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::Invalid(
                "history_capacity must be at least 1".to_owned(),
            ));
        }
        if self.min_thickness == 0 || self.min_thickness > self.max_thickness {
            return Err(ConfigError::Invalid(format!(
                "thickness bounds {}..={} are not valid",
                self.min_thickness, self.max_thickness
            )));
        }
        Ok(())
    }
}
