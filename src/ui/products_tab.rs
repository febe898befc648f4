//! Products tab UI rendering

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::ui::panel_manager::PlaceholderAction;
use crate::ui::widgets::{brand_button, card, heading};

const BUTTON_SIZE: egui::Vec2 = egui::vec2(180.0, 32.0);

/// Renders the Products tab: a heading and the fetch/migrate buttons stacked.
pub fn render_products_tab(ui: &mut egui::Ui, state: &AppState) -> Option<PlaceholderAction> {
    let mut action = None;
    let brand = &state.brand;

    card(brand.card_background).show(ui, |ui| {
        ui.set_min_size(ui.available_size());

        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label(heading("Products Area", brand.text));
            ui.add_space(20.0);

            for (button, fill) in [
                (PlaceholderAction::FetchProducts, brand.primary),
                (PlaceholderAction::MigrateProducts, brand.muted_teal),
            ] {
                let text = RichText::new(button.label()).color(brand.header_text);
                if brand_button(ui, text, fill, brand.accent_teal, BUTTON_SIZE).clicked() {
                    action = Some(button);
                }
                ui.add_space(10.0);
            }
        });
    });

    action
}
