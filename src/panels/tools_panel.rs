use crate::app::PaintApp;
use crate::color::Color;
use crate::command::Command;
use crate::components::{ColorSwatch, ToolButton};
use crate::tools::{ShapeStyle, Tool, ToolSettings};

/// Height reserved above the canvas: three rows of 30px buttons with 8px gaps
/// and some slack.
pub const TOOLBAR_HEIGHT: f32 = 3.0 * 30.0 + 4.0 * 8.0 + 20.0;

const TOOLBAR_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(60, 60, 60);

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar")
        .exact_height(TOOLBAR_HEIGHT)
        .frame(egui::Frame::none().fill(TOOLBAR_BACKGROUND).inner_margin(8.0))
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
            let settings = *app.engine().settings();

            // Row 1: palette
            ui.horizontal(|ui| {
                for color in Color::PALETTE {
                    if ColorSwatch::new(color, settings.color == color).show(ui).clicked() {
                        app.execute(Command::SetColor(color));
                    }
                }
            });

            // Row 2: tools
            ui.horizontal(|ui| {
                for tool in Tool::ALL {
                    if ToolButton::new(tool.label(), settings.tool == tool).show(ui).clicked() {
                        log::info!("Tool selected from UI: {}", tool);
                        app.execute(Command::SetTool(tool));
                    }
                }
            });

            // Row 3: size, style, history, file
            ui.horizontal(|ui| {
                if ToolButton::new("Size -", false).show(ui).clicked() {
                    app.execute(Command::AdjustThickness(-1));
                }
                if ToolButton::new("Size +", false).show(ui).clicked() {
                    app.execute(Command::AdjustThickness(1));
                }
                for (style, label) in [(ShapeStyle::Outline, "Outline"), (ShapeStyle::Filled, "Fill")] {
                    if ToolButton::new(label, settings.shape_style == style).show(ui).clicked() {
                        app.execute(Command::SetShapeStyle(style));
                    }
                }

                let history = app.engine().history();
                let (can_undo, can_redo) = (history.can_undo(), history.can_redo());
                if ui
                    .add_enabled_ui(can_undo, |ui| ToolButton::new("Undo", false).show(ui))
                    .inner
                    .clicked()
                {
                    app.execute(Command::Undo);
                }
                if ui
                    .add_enabled_ui(can_redo, |ui| ToolButton::new("Redo", false).show(ui))
                    .inner
                    .clicked()
                {
                    app.execute(Command::Redo);
                }

                if ToolButton::new("Save", false).show(ui).clicked() {
                    app.save_drawing();
                }
                if ToolButton::new("Clear", false).show(ui).clicked() {
                    app.execute(Command::Clear);
                }

                // One line, right-aligned, cut short rather than spilling out of the row
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(readout(&settings, app.status()))
                                .color(egui::Color32::WHITE),
                        )
                        .truncate(),
                    );
                });
            });
        });
}

/// Text shown at the end of the last toolbar row.
fn readout(settings: &ToolSettings, status: Option<&str>) -> String {
    let mut text = format!("Size: {}   Fill: {}", settings.thickness, settings.shape_style);
    if let Some(status) = status {
        text.push_str("   ");
        text.push_str(status);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readout_is_a_single_line() {
        let settings = ToolSettings {
            thickness: 7,
            shape_style: ShapeStyle::Filled,
            ..ToolSettings::default()
        };
        assert_eq!(readout(&settings, None), "Size: 7   Fill: Filled");

        let text = readout(&settings, Some("Saved my_drawing.png"));
        assert_eq!(text, "Size: 7   Fill: Filled   Saved my_drawing.png");
        assert!(!text.contains('\n'));
    }
}
