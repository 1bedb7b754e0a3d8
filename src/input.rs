use egui::{Context, Pos2, Rect};

use crate::geometry::Point;

/// Pointer input in canvas-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown(Point),
    /// Pointer moved, with or without the button held
    PointerMove(Point),
    /// Primary button released; may lie outside the canvas
    PointerUp(Point),
    /// Pointer is no longer over the canvas
    PointerLeave,
}

impl InputEvent {
    pub fn position(&self) -> Option<Point> {
        match self {
            InputEvent::PointerDown(pos) | InputEvent::PointerMove(pos) | InputEvent::PointerUp(pos) => {
                Some(*pos)
            }
            InputEvent::PointerLeave => None,
        }
    }
}

/// The primary pointer as observed in one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerSample {
    /// Window position, `None` once the pointer left the window
    pub position: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
}

/// Converts raw egui pointer input into canvas [`InputEvent`]s.
///
/// Presses outside the canvas rectangle are dropped. Once a gesture started on
/// the canvas, its moves and its release are forwarded even when the pointer
/// wanders off, so shapes can be clamped to the edge.
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
    last_pointer_pos: Option<Pos2>,
    gesture_active: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pointer_pos: None,
            gesture_active: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture_active
    }

    /// Window position to canvas pixel
    pub fn to_canvas(&self, pos: Pos2) -> Point {
        Point::from_pos2((pos - self.canvas_rect.min).to_pos2())
    }

    /// Read this frame's pointer state from egui
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let sample = ctx.input(|input| PointerSample {
            position: input.pointer.latest_pos(),
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
        });
        self.process_pointer(sample)
    }

    pub fn process_pointer(&mut self, sample: PointerSample) -> Vec<InputEvent> {
        let mut events = Vec::new();

        match sample.position {
            Some(pos) if Some(pos) != self.last_pointer_pos => {
                if self.gesture_active || self.canvas_rect.contains(pos) {
                    events.push(InputEvent::PointerMove(self.to_canvas(pos)));
                } else if self
                    .last_pointer_pos
                    .is_some_and(|last| self.canvas_rect.contains(last))
                {
                    events.push(InputEvent::PointerLeave);
                }
            }
            None if self.last_pointer_pos.is_some() && !self.gesture_active => {
                events.push(InputEvent::PointerLeave);
            }
            _ => {}
        }

        let position = sample.position.or(self.last_pointer_pos);

        if sample.pressed && !self.gesture_active {
            if let Some(pos) = position.filter(|pos| self.canvas_rect.contains(*pos)) {
                events.push(InputEvent::PointerDown(self.to_canvas(pos)));
                self.gesture_active = true;
            }
        }

        if sample.released && self.gesture_active {
            if let Some(pos) = position {
                events.push(InputEvent::PointerUp(self.to_canvas(pos)));
            }
            self.gesture_active = false;
        }

        if sample.position.is_some() {
            self.last_pointer_pos = sample.position;
        } else if !self.gesture_active {
            self.last_pointer_pos = None;
        }

        events
    }
}
