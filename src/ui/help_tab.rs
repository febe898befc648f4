//! Help tab UI rendering

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::ui::widgets::{card, BODY_SIZE};

/// Renders the static instructions, left-justified.
pub fn render_help_tab(ui: &mut egui::Ui, state: &AppState) {
    card(state.brand.card_background).show(ui, |ui| {
        ui.set_min_size(ui.available_size());
        ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
            ui.label(
                RichText::new(s2w::help_text())
                    .size(BODY_SIZE)
                    .color(state.brand.text),
            );
        });
    });
}
