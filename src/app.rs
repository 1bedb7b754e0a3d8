use crate::command::Command;
use crate::config::EngineConfig;
use crate::engine::CanvasEngine;
use crate::export;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::CanvasRenderer;
use crate::tools::ToolSettings;

/// The drawing application: a toolbar above one canvas.
pub struct PaintApp {
    engine: CanvasEngine,
    input: InputHandler,
    renderer: CanvasRenderer,
    /// Outcome of the last save, shown in the toolbar
    status: Option<String>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: EngineConfig) -> Self {
        let mut app = Self::from_config(config);

        // Restore the tool settings of the previous session
        if let Some(storage) = cc.storage {
            if let Some(settings) = eframe::get_value::<ToolSettings>(storage, eframe::APP_KEY) {
                log::info!("restoring tool settings: {:?}", settings);
                app.engine.apply_settings(settings);
            }
        }
        app
    }

    pub fn from_config(config: EngineConfig) -> Self {
        Self {
            engine: CanvasEngine::new(config),
            input: InputHandler::new(egui::Rect::NOTHING),
            renderer: CanvasRenderer::new(),
            status: None,
        }
    }

    pub fn engine(&self) -> &CanvasEngine {
        &self.engine
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Run a toolbar command. Failures are logged; the session carries on.
    pub fn execute(&mut self, command: Command) {
        if let Err(err) = self.engine.execute(command) {
            log::error!("{:?} failed: {}", command, err);
        }
    }

    /// Export the canvas to the configured PNG path.
    pub fn save_drawing(&mut self) {
        let path = self.engine.config().export_path.clone();
        self.status = Some(match export::save_png(&self.engine.snapshot(), &path) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(err) => format!("Save failed: {}", err),
        });
    }

    /// Translate this frame's pointer and keyboard input into engine calls.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.input.set_canvas_rect(canvas_rect);
        for event in self.input.process_input(ctx) {
            if let Err(err) = self.engine.handle_input(event) {
                log::error!("{:?} failed: {}", event, err);
            }
        }

        let (undo, redo) = ctx.input(|i| {
            let z = i.modifiers.command && i.key_pressed(egui::Key::Z);
            (
                z && !i.modifiers.shift,
                (z && i.modifiers.shift) || (i.modifiers.command && i.key_pressed(egui::Key::Y)),
            )
        });
        if undo {
            self.execute(Command::Undo);
        }
        if redo {
            self.execute(Command::Redo);
        }
    }

    pub fn paint_canvas(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect) {
        self.renderer.render(ctx, painter, rect, &self.engine);
    }
}

impl eframe::App for PaintApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.engine.settings());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
