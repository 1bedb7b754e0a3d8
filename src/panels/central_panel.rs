use crate::app::PaintApp;

const WINDOW_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(50, 50, 50);

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(WINDOW_BACKGROUND))
        .show(ctx, |ui| {
            let (width, height) = app.engine().dimensions();
            let (response, painter) = ui.allocate_painter(
                egui::vec2(width as f32, height as f32),
                egui::Sense::click_and_drag(),
            );

            // Handle input, then draw the result of this frame's events
            app.handle_input(ctx, response.rect);
            app.paint_canvas(ctx, &painter, response.rect);

            if response.hovered() && app.engine().settings().tool.is_freehand() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }
        });
}
