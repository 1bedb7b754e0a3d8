use eframe::egui;

use crate::color::Color;

const BUTTON_SIZE: egui::Vec2 = egui::vec2(70.0, 30.0);
const HIGHLIGHT: egui::Color32 = egui::Color32::from_rgb(255, 255, 0);

/// A labelled toolbar button that draws a yellow ring while selected.
pub struct ToolButton<'a> {
    pub label: &'a str,
    pub selected: bool,
}

impl<'a> ToolButton<'a> {
    pub fn new(label: &'a str, selected: bool) -> Self {
        Self { label, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(BUTTON_SIZE, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.hovered() {
                egui::Color32::from_gray(220)
            } else {
                egui::Color32::from_gray(200)
            };
            ui.painter().rect_filled(rect, 5.0, bg_color);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(16.0),
                egui::Color32::BLACK,
            );

            if self.selected {
                ui.painter()
                    .rect_stroke(rect.expand(2.0), 5.0, egui::Stroke::new(2.0, HIGHLIGHT));
            }
        }

        response
    }
}

/// A plain color swatch; the active color gets a light ring.
pub struct ColorSwatch {
    pub color: Color,
    pub selected: bool,
}

impl ColorSwatch {
    pub fn new(color: Color, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(BUTTON_SIZE, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            ui.painter().rect_filled(rect, 5.0, self.color);
            if self.selected {
                ui.painter().rect_stroke(
                    rect.expand(2.0),
                    5.0,
                    egui::Stroke::new(2.0, egui::Color32::LIGHT_GRAY),
                );
            }
        }

        response.on_hover_text(format!("rgb({}, {}, {})", self.color.r, self.color.g, self.color.b))
    }
}
