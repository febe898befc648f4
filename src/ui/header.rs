//! Header panel UI rendering
//!
//! Draws the brand bar: the logo when it loaded, then the window title.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use s2w::assets::LOGO_SIZE;

/// Height of the brand bar.
pub const HEADER_HEIGHT: f32 = 80.0;
const TITLE_SIZE: f32 = 24.0;

/// Renders the header contents inside the top panel.
pub fn render_header(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal_centered(|ui| {
        if let Some(texture) = state.logo.texture() {
            ui.add_space(15.0);
            ui.add(egui::Image::new(texture).fit_to_exact_size(egui::vec2(LOGO_SIZE, LOGO_SIZE)));
        }

        ui.add_space(10.0);
        ui.label(
            RichText::new(state.window_title())
                .size(TITLE_SIZE)
                .strong()
                .color(state.brand.header_text),
        );
    });
}
