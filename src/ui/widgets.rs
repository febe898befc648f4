//! Brand-styled widgets shared by the tabs.

use eframe::egui;
use egui::{Color32, RichText};

/// Font size for tab headings.
pub const HEADING_SIZE: f32 = 18.0;
/// Font size for labels and body text.
pub const BODY_SIZE: f32 = 13.0;

/// Adds a button filled with `fill` that turns `hover` under the pointer.
///
/// egui's `Button::fill` ignores hover state, so the colors are set on the
/// widget visuals of a child scope instead.
pub fn brand_button(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
    fill: Color32,
    hover: Color32,
    min_size: egui::Vec2,
) -> egui::Response {
    ui.scope(|ui| {
        let widgets = &mut ui.visuals_mut().widgets;
        widgets.inactive.weak_bg_fill = fill;
        widgets.hovered.weak_bg_fill = hover;
        widgets.active.weak_bg_fill = hover;

        ui.add(egui::Button::new(text).min_size(min_size))
    })
    .inner
}

/// Rounded card filling the tab with a 20pt margin on every side.
pub fn card(fill: Color32) -> egui::Frame {
    egui::Frame::default()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(10))
        .outer_margin(egui::Margin::same(20))
        .inner_margin(egui::Margin::same(20))
}

pub fn heading(text: &str, color: Color32) -> RichText {
    RichText::new(text).size(HEADING_SIZE).strong().color(color)
}
