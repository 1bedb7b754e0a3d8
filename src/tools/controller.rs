use crate::buffer::{PixelBuffer, Surface};
use crate::color::Color;
use crate::command::History;
use crate::error::CanvasError;
use crate::flood_fill::flood_fill;
use crate::geometry::Point;
use crate::input::InputEvent;
use crate::primitives;

use super::preview::{self, Overlay, ShapePreview};
use super::{ShapeStyle, Tool, ToolSettings};

/// Where the controller is within a pointer gesture.
///
/// The tool is captured when the gesture starts so that a settings change in
/// the middle of a drag cannot turn a pen stroke into a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Pen or eraser held down
    StrokeActive { tool: Tool, last: Point },
    /// Line, rect or circle between pointer-down and pointer-up
    ShapePending {
        tool: Tool,
        start: Point,
        current: Point,
    },
}

impl GestureState {
    pub fn name(&self) -> &'static str {
        match self {
            GestureState::Idle => "Idle",
            GestureState::StrokeActive { .. } => "StrokeActive",
            GestureState::ShapePending { .. } => "ShapePending",
        }
    }
}

/// Turns pointer gestures into pixel edits and history commits.
#[derive(Debug, Clone)]
pub struct ToolController {
    settings: ToolSettings,
    background: Color,
    min_thickness: u32,
    max_thickness: u32,
    state: GestureState,
    /// Last pointer position seen over the canvas, for the brush cursor
    hover: Option<Point>,
}

impl ToolController {
    pub fn new(settings: ToolSettings, background: Color, min_thickness: u32, max_thickness: u32) -> Self {
        let min_thickness = min_thickness.max(1);
        let max_thickness = max_thickness.max(min_thickness);
        Self {
            settings: ToolSettings {
                thickness: settings.thickness.clamp(min_thickness, max_thickness),
                ..settings
            },
            background,
            min_thickness,
            max_thickness,
            state: GestureState::Idle,
            hover: None,
        }
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn thickness_bounds(&self) -> (u32, u32) {
        (self.min_thickness, self.max_thickness)
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.settings.tool != tool {
            log::info!("tool changed: {} -> {}", self.settings.tool, tool);
            self.settings.tool = tool;
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.settings.color = color;
    }

    /// Set the brush thickness, clamped to the configured bounds.
    pub fn set_thickness(&mut self, thickness: u32) {
        self.settings.thickness = thickness.clamp(self.min_thickness, self.max_thickness);
    }

    /// Grow or shrink the brush by `step`, clamped to the configured bounds.
    pub fn adjust_thickness(&mut self, step: i32) {
        let wanted = (self.settings.thickness as i64 + step as i64)
            .clamp(self.min_thickness as i64, self.max_thickness as i64);
        self.settings.thickness = wanted as u32;
    }

    pub fn set_shape_style(&mut self, style: ShapeStyle) {
        self.settings.shape_style = style;
    }

    /// Replace all settings at once, e.g. when restoring a previous session.
    pub fn apply_settings(&mut self, settings: ToolSettings) {
        self.settings = settings;
        self.set_thickness(settings.thickness);
    }

    /// Color a freehand tool paints with
    fn ink(&self, tool: Tool) -> Color {
        match tool {
            Tool::Eraser => self.background,
            _ => self.settings.color,
        }
    }

    /// Feed one pointer event through the state machine.
    pub fn handle(
        &mut self,
        event: InputEvent,
        buffer: &mut PixelBuffer,
        history: &mut History,
    ) -> Result<(), CanvasError> {
        match event {
            InputEvent::PointerDown(pos) => self.pointer_down(pos, buffer, history),
            InputEvent::PointerMove(pos) => {
                self.pointer_move(pos, buffer);
                Ok(())
            }
            InputEvent::PointerUp(pos) => {
                self.pointer_up(pos, buffer, history);
                Ok(())
            }
            InputEvent::PointerLeave => {
                self.hover = None;
                Ok(())
            }
        }
    }

    pub fn pointer_down(
        &mut self,
        pos: Point,
        buffer: &mut PixelBuffer,
        history: &mut History,
    ) -> Result<(), CanvasError> {
        if !buffer.contains(pos.x, pos.y) {
            log::debug!("ignoring pointer-down outside the canvas at {:?}", pos);
            return Ok(());
        }
        self.hover = Some(pos);

        // A second press without a release means the release was lost.
        self.finish_gesture(buffer, history);

        let settings = self.settings;
        match settings.tool {
            Tool::Pen | Tool::Eraser => {
                primitives::stamp(buffer, pos, self.ink(settings.tool), settings.thickness / 2);
                self.state = GestureState::StrokeActive {
                    tool: settings.tool,
                    last: pos,
                };
            }
            Tool::Fill => {
                if flood_fill(buffer, pos, settings.color)? {
                    history.commit(buffer);
                } else {
                    log::debug!("fill at {:?} is a no-op", pos);
                }
            }
            Tool::Line | Tool::Rect | Tool::Circle => {
                self.state = GestureState::ShapePending {
                    tool: settings.tool,
                    start: pos,
                    current: pos,
                };
            }
        }
        Ok(())
    }

    pub fn pointer_move(&mut self, pos: Point, buffer: &mut PixelBuffer) {
        self.hover = buffer.contains(pos.x, pos.y).then_some(pos);

        match self.state {
            GestureState::Idle => {}
            GestureState::StrokeActive { tool, last } => {
                primitives::stroke(buffer, last, pos, self.ink(tool), self.settings.thickness);
                self.state = GestureState::StrokeActive { tool, last: pos };
            }
            GestureState::ShapePending { tool, start, .. } => {
                self.state = GestureState::ShapePending {
                    tool,
                    start,
                    current: pos,
                };
            }
        }
    }

    pub fn pointer_up(&mut self, pos: Point, buffer: &mut PixelBuffer, history: &mut History) {
        match std::mem::take(&mut self.state) {
            GestureState::Idle => {}
            GestureState::StrokeActive { .. } => history.commit(buffer),
            GestureState::ShapePending { tool, start, .. } => {
                let (width, height) = buffer.dimensions();
                let end = pos.clamp_to(width, height);
                let ToolSettings {
                    color,
                    thickness,
                    shape_style,
                    ..
                } = self.settings;
                let drawn = match tool {
                    Tool::Line => primitives::stroke(buffer, start, end, color, thickness),
                    Tool::Rect => {
                        primitives::rectangle(buffer, start, end, color, shape_style, thickness)
                    }
                    Tool::Circle => {
                        primitives::circle(buffer, start, end, color, shape_style, thickness)
                    }
                    Tool::Pen | Tool::Eraser | Tool::Fill => false,
                };
                if drawn {
                    history.commit(buffer);
                } else {
                    log::debug!("{} from {:?} to {:?} is empty, not committed", tool, start, end);
                }
            }
        }
    }

    /// End any active gesture at its last known point, as if the pointer had
    /// been released there. Does nothing while idle.
    pub fn finish_gesture(&mut self, buffer: &mut PixelBuffer, history: &mut History) {
        if let Some(last) = self.last_point() {
            log::debug!("finishing {} at {:?}", self.state.name(), last);
            self.pointer_up(last, buffer, history);
        }
    }

    /// Last known pointer position of the active gesture
    fn last_point(&self) -> Option<Point> {
        match self.state {
            GestureState::Idle => None,
            GestureState::StrokeActive { last, .. } => Some(last),
            GestureState::ShapePending { current, .. } => Some(current),
        }
    }

    /// Overlay for the shape being dragged, if any.
    pub fn shape_preview(&self, width: u32, height: u32) -> Option<Overlay> {
        match self.state {
            GestureState::ShapePending {
                tool,
                start,
                current,
            } => preview::shape_overlay(
                &ShapePreview {
                    tool,
                    start,
                    current,
                    style: self.settings.shape_style,
                    color: self.settings.color,
                    thickness: self.settings.thickness,
                },
                width,
                height,
            ),
            _ => None,
        }
    }

    /// Brush footprint under the pointer for pen and eraser.
    pub fn cursor_preview(&self, width: u32, height: u32) -> Option<Overlay> {
        let tool = self.settings.tool;
        let position = self.hover?;
        preview::brush_cursor(
            tool,
            position,
            self.ink(tool),
            self.settings.thickness,
            width,
            height,
        )
    }
}
