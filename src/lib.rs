#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod buffer;
pub mod color;
pub mod command;
pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod flood_fill;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod primitives;
pub mod renderer;
pub mod tools;

pub use app::PaintApp;
pub use buffer::{PixelBuffer, Snapshot, Surface};
pub use color::Color;
pub use command::{Command, CommandError, CommandResult, History};
pub use config::{ConfigError, EngineConfig};
pub use engine::CanvasEngine;
pub use error::CanvasError;
pub use flood_fill::flood_fill;
pub use geometry::Point;
pub use input::{InputEvent, InputHandler};
pub use renderer::CanvasRenderer;
pub use tools::{GestureState, Overlay, ShapeStyle, Tool, ToolController, ToolSettings};
