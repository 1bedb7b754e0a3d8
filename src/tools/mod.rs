use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;

pub use crate::primitives::{ParseStyleError, ShapeStyle};

mod controller;
pub use controller::{GestureState, ToolController};

pub mod preview;
pub use preview::Overlay;

/// Initial brush thickness
pub const DEFAULT_THICKNESS: u32 = 2;
/// Default lower bound for the brush thickness
pub const MIN_THICKNESS: u32 = 1;
/// Default upper bound for the brush thickness
pub const MAX_THICKNESS: u32 = 20;

/// Every tool the canvas understands.
///
/// Pen and eraser are continuous: they paint on every pointer move. Line,
/// rectangle and circle are discrete: they only preview until pointer-up.
/// Fill acts once on pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Pen,
    Line,
    Rect,
    Circle,
    Eraser,
    Fill,
}

impl Tool {
    /// Toolbar order
    pub const ALL: [Tool; 6] = [
        Tool::Pen,
        Tool::Line,
        Tool::Rect,
        Tool::Circle,
        Tool::Eraser,
        Tool::Fill,
    ];

    /// Machine name, as used in configuration files
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pen => "pen",
            Tool::Line => "line",
            Tool::Rect => "rect",
            Tool::Circle => "circle",
            Tool::Eraser => "eraser",
            Tool::Fill => "fill",
        }
    }

    /// Button caption
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Line => "Line",
            Tool::Rect => "Rect",
            Tool::Circle => "Circle",
            Tool::Eraser => "Eraser",
            Tool::Fill => "Fill",
        }
    }

    pub fn is_freehand(&self) -> bool {
        matches!(self, Tool::Pen | Tool::Eraser)
    }

    pub fn is_shape(&self) -> bool {
        matches!(self, Tool::Line | Tool::Rect | Tool::Circle)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tool `{0}`")]
pub struct ParseToolError(pub String);

impl FromStr for Tool {
    type Err = ParseToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name() == wanted)
            .ok_or_else(|| ParseToolError(s.to_owned()))
    }
}

/// The user's current tool choices. Persisted between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub tool: Tool,
    pub color: Color,
    pub thickness: u32,
    pub shape_style: ShapeStyle,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: Tool::Pen,
            color: Color::BLACK,
            thickness: DEFAULT_THICKNESS,
            shape_style: ShapeStyle::Outline,
        }
    }
}
