mod history;

use thiserror::Error;

use crate::color::Color;
use crate::error::CanvasError;
use crate::tools::{ShapeStyle, Tool};

pub use history::{History, DEFAULT_CAPACITY};

/// Requests the UI can make of the canvas outside of pointer gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetTool(Tool),
    SetColor(Color),
    /// Clamped to the configured thickness bounds
    SetThickness(u32),
    /// Step the thickness up or down, clamped to the configured bounds
    AdjustThickness(i32),
    SetShapeStyle(ShapeStyle),
    /// Paint the canvas with the background color and commit
    Clear,
    Undo,
    Redo,
}

/// Result type for command operations
pub type CommandResult = Result<(), CommandError>;

/// Errors that can occur during command execution
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Canvas(#[from] CanvasError),
}
