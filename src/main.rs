#![warn(clippy::all, rust_2018_idioms)]

use raster_paint::config::EngineConfig;
use raster_paint::panels::TOOLBAR_HEIGHT;
use raster_paint::PaintApp;

/// Config file used when no path is given on the command line
const DEFAULT_CONFIG_PATH: &str = "raster_paint.json";

fn load_config() -> EngineConfig {
    let explicit = std::env::args().nth(1);
    let path = explicit.clone().unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());

    match EngineConfig::load(&path) {
        Ok(config) => {
            log::info!("loaded config from {}", path);
            config
        }
        // Only complain about a missing file if the user asked for it
        Err(err) if explicit.is_some() => {
            log::warn!("{}; falling back to defaults", err);
            EngineConfig::default()
        }
        Err(_) => EngineConfig::default(),
    }
}

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config();
    let inner_size = [
        config.canvas_width as f32,
        config.canvas_height as f32 + TOOLBAR_HEIGHT,
    ];
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(inner_size)
            .with_resizable(false)
            .with_title("Drawing App"),
        ..Default::default()
    };

    eframe::run_native(
        "Drawing App",
        native_options,
        Box::new(move |cc| Ok(Box::new(PaintApp::new(cc, config)))),
    )
}
