//! The canvas engine: one pixel buffer, its history and the tool controller.
//!
//! The engine is the only owner of mutable canvas state. Front-ends feed it
//! [`InputEvent`]s and [`Command`]s and read back [`Snapshot`]s and preview
//! [`Overlay`]s; they never get a mutable handle to the pixels.

use crate::buffer::{PixelBuffer, Snapshot};
use crate::command::{Command, CommandResult, History};
use crate::config::EngineConfig;
use crate::error::CanvasError;
use crate::input::InputEvent;
use crate::tools::{GestureState, Overlay, ToolController, ToolSettings};

#[derive(Debug, Clone)]
pub struct CanvasEngine {
    buffer: PixelBuffer,
    history: History,
    controller: ToolController,
    config: EngineConfig,
    /// Bumped whenever the canvas or its overlays may look different
    revision: u64,
}

impl CanvasEngine {
    /// Create a cleared canvas whose history starts with that blank state.
    pub fn new(config: EngineConfig) -> Self {
        let buffer = PixelBuffer::new(config.canvas_width, config.canvas_height, config.background);
        let history = History::new(buffer.copy(), config.history_capacity);
        let controller = ToolController::new(
            config.initial,
            config.background,
            config.min_thickness,
            config.max_thickness,
        );
        log::info!(
            "canvas created: {}x{}, history capacity {}",
            config.canvas_width,
            config.canvas_height,
            history.capacity()
        );
        Self {
            buffer,
            history,
            controller,
            config,
            revision: 0,
        }
    }

    /// A default-configured canvas of the given size
    pub fn with_size(width: u32, height: u32) -> Self {
        Self::new(EngineConfig {
            canvas_width: width,
            canvas_height: height,
            ..EngineConfig::default()
        })
    }

    /// Feed one pointer event to the active tool.
    pub fn handle_input(&mut self, event: InputEvent) -> Result<(), CanvasError> {
        self.controller.handle(event, &mut self.buffer, &mut self.history)?;
        self.revision += 1;
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> CommandResult {
        log::debug!("executing {:?}", command);
        match command {
            Command::SetTool(tool) => self.controller.set_tool(tool),
            Command::SetColor(color) => self.controller.set_color(color),
            Command::SetThickness(thickness) => self.controller.set_thickness(thickness),
            Command::AdjustThickness(step) => self.controller.adjust_thickness(step),
            Command::SetShapeStyle(style) => self.controller.set_shape_style(style),
            Command::Clear => self.clear(),
            Command::Undo => {
                self.undo()?;
            }
            Command::Redo => {
                self.redo()?;
            }
        }
        if !matches!(command, Command::Clear | Command::Undo | Command::Redo) {
            // The brush cursor follows the tool settings
            self.revision += 1;
        }
        Ok(())
    }

    /// Commit whatever the active gesture has drawn so far and go idle.
    ///
    /// Clear, undo and redo call this first so that a gesture interrupted by
    /// them lands in the history as a whole.
    pub fn finish_gesture(&mut self) {
        if *self.controller.state() != GestureState::Idle {
            self.controller.finish_gesture(&mut self.buffer, &mut self.history);
            self.revision += 1;
        }
    }

    /// Paint the whole canvas with the background color and commit.
    pub fn clear(&mut self) {
        self.finish_gesture();
        self.buffer.fill(self.config.background);
        self.history.commit(&self.buffer);
        self.revision += 1;
        log::info!("canvas cleared");
    }

    /// Returns `Ok(false)` when there was nothing to undo.
    pub fn undo(&mut self) -> Result<bool, CanvasError> {
        self.finish_gesture();
        let moved = self.history.undo(&mut self.buffer)?;
        self.revision += moved as u64;
        Ok(moved)
    }

    /// Returns `Ok(false)` when there was nothing to redo.
    pub fn redo(&mut self) -> Result<bool, CanvasError> {
        self.finish_gesture();
        let moved = self.history.redo(&mut self.buffer)?;
        self.revision += moved as u64;
        Ok(moved)
    }

    /// Read-only copy of the pixels as they are right now
    pub fn snapshot(&self) -> Snapshot {
        self.buffer.copy()
    }

    /// Ephemeral overlays to draw over [`Self::snapshot`], bottom first
    pub fn overlays(&self) -> Vec<Overlay> {
        let (width, height) = self.buffer.dimensions();
        self.controller
            .shape_preview(width, height)
            .into_iter()
            .chain(self.controller.cursor_preview(width, height))
            .collect()
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn settings(&self) -> &ToolSettings {
        self.controller.settings()
    }

    pub fn gesture_state(&self) -> &GestureState {
        self.controller.state()
    }

    /// Restore tool settings from a previous session
    pub fn apply_settings(&mut self, settings: ToolSettings) {
        self.controller.apply_settings(settings);
    }

    pub fn thickness_bounds(&self) -> (u32, u32) {
        self.controller.thickness_bounds()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}
