//! Credentials tab UI rendering
//!
//! A soft gray card with one labeled input per store credential and the
//! two connection test buttons.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::ui::panel_manager::PlaceholderAction;
use crate::ui::widgets::{brand_button, card, heading, BODY_SIZE};
use s2w::CredentialField;

const INPUT_WIDTH: f32 = 400.0;
const BUTTON_SIZE: egui::Vec2 = egui::vec2(150.0, 32.0);

/// Stable widget id of the input for `field`.
pub fn input_id(field: CredentialField) -> egui::Id {
    egui::Id::new(("credential_input", field))
}

/// Renders the Credentials tab.
///
/// # Returns
/// * `Option<PlaceholderAction>` - A test button the user clicked
pub fn render_credentials_tab(ui: &mut egui::Ui, state: &mut AppState) -> Option<PlaceholderAction> {
    let mut action = None;
    let brand = state.brand.clone();

    card(brand.soft_gray).show(ui, |ui| {
        ui.set_min_size(ui.available_size());

        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            ui.label(heading("Enter Shopify & WooCommerce Credentials", brand.text));
            ui.add_space(20.0);

            egui::Grid::new("credentials_grid")
                .num_columns(2)
                .spacing([40.0, 20.0])
                .show(ui, |ui| {
                    for field in CredentialField::ALL {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(RichText::new(field.label()).size(BODY_SIZE).color(brand.text));
                        });

                        ui.add(
                            egui::TextEdit::singleline(state.credentials.value_mut(field))
                                .id(input_id(field))
                                .password(field.is_secret())
                                .desired_width(INPUT_WIDTH),
                        );
                        ui.end_row();
                    }
                });

            ui.add_space(30.0);

            ui.horizontal(|ui| {
                let total = BUTTON_SIZE.x * 2.0 + 30.0;
                ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));

                for (button, fill) in [
                    (PlaceholderAction::TestShopify, brand.primary),
                    (PlaceholderAction::TestWooCommerce, brand.muted_teal),
                ] {
                    let text = RichText::new(button.label()).color(brand.header_text);
                    if brand_button(ui, text, fill, brand.accent_teal, BUTTON_SIZE).clicked() {
                        action = Some(button);
                    }
                    ui.add_space(30.0 - ui.spacing().item_spacing.x);
                }
            });
        });
    });

    action
}
