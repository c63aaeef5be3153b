use eframe::egui;

use crate::state::Mode;

/// Square toolbar button for one interaction mode, highlighted when active
pub struct ModeButton {
    pub mode: Mode,
    pub selected: bool,
}

impl ModeButton {
    pub fn new(mode: Mode, selected: bool) -> Self {
        Self { mode, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(32.0, 32.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(144, 202, 249)
            } else if response.hovered() {
                egui::Color32::from_gray(215)
            } else {
                egui::Color32::from_gray(235)
            };
            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = if self.selected {
                egui::Color32::WHITE
            } else {
                egui::Color32::BLACK
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.mode.icon(),
                egui::FontId::proportional(20.0),
                text_color,
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response.on_hover_text(self.mode.name())
    }
}
