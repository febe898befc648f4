//! Segmented tab bar
//!
//! One button per tab, centered. The selected tab is muted teal, the others
//! soft gray, and any hovered tab accent teal.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::ui::widgets::brand_button;
use s2w::Tab;

const TAB_BUTTON_SIZE: egui::Vec2 = egui::vec2(160.0, 45.0);
const TAB_FONT_SIZE: f32 = 14.0;

/// Renders the tab bar.
///
/// # Returns
/// * `Option<Tab>` - The tab the user clicked, if any
pub fn render_tab_bar(ui: &mut egui::Ui, state: &AppState) -> Option<Tab> {
    let mut clicked = None;
    let brand = &state.brand;

    ui.horizontal(|ui| {
        let spacing = ui.spacing().item_spacing.x;
        let count = Tab::ALL.len() as f32;
        let total = TAB_BUTTON_SIZE.x * count + spacing * (count - 1.0);
        ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));

        for tab in Tab::ALL {
            let fill = if state.tabs.is_selected(tab) {
                brand.muted_teal
            } else {
                brand.soft_gray
            };

            let text = RichText::new(tab.label())
                .size(TAB_FONT_SIZE)
                .strong()
                .color(brand.text);

            if brand_button(ui, text, fill, brand.accent_teal, TAB_BUTTON_SIZE).clicked() {
                clicked = Some(tab);
            }
        }
    });

    clicked
}
