//! Brand palette for the S2W migration window
//!
//! The window uses a single light, branded look: a blue header, teal
//! highlights for the selected tab and hovered buttons, and a soft gray
//! for the credentials card and unselected tabs.
//!
//! # Examples
//!
//! ```
//! use s2w::theme::BrandPalette;
//!
//! let brand = BrandPalette::new();
//! let mut visuals = egui::Visuals::light();
//! brand.apply(&mut visuals);
//! assert_eq!(visuals.panel_fill, egui::Color32::WHITE);
//! ```

use egui::Color32;

pub const PRIMARY_HEX: &str = "#4A90E2";
pub const MUTED_TEAL_HEX: &str = "#3BA99C";
pub const ACCENT_TEAL_HEX: &str = "#5ED0BD";
pub const SOFT_GRAY_HEX: &str = "#A0A0A0";

/// Named brand colors used across the header, tab bar and panels
#[derive(Debug, Clone, PartialEq)]
pub struct BrandPalette {
    // Brand colors
    pub primary: Color32,
    pub muted_teal: Color32,
    pub accent_teal: Color32,
    pub soft_gray: Color32,

    // Surface colors
    pub window_background: Color32,
    pub card_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub header_text: Color32,
}

impl BrandPalette {
    /// Creates the palette from the brand hex codes
    pub fn new() -> Self {
        Self {
            primary: hex_to_color32(PRIMARY_HEX),
            muted_teal: hex_to_color32(MUTED_TEAL_HEX),
            accent_teal: hex_to_color32(ACCENT_TEAL_HEX),
            soft_gray: hex_to_color32(SOFT_GRAY_HEX),

            window_background: Color32::WHITE,
            card_background: Color32::WHITE,

            text: Color32::BLACK,
            header_text: Color32::WHITE,
        }
    }

    /// Applies the palette to egui visuals
    pub fn apply(&self, visuals: &mut egui::Visuals) {
        // Background colors
        visuals.panel_fill = self.window_background;
        visuals.window_fill = self.window_background;
        visuals.extreme_bg_color = self.window_background;
        visuals.faint_bg_color = with_alpha(self.soft_gray, 40);

        // Text
        visuals.override_text_color = Some(self.text);

        // Selection
        visuals.selection.bg_fill = self.muted_teal;
        visuals.selection.stroke.color = self.primary;

        // Widgets
        visuals.widgets.inactive.weak_bg_fill = self.soft_gray;
        visuals.widgets.hovered.weak_bg_fill = self.accent_teal;
        visuals.widgets.hovered.bg_fill = self.accent_teal;
        visuals.widgets.active.bg_fill = self.muted_teal;
        visuals.widgets.active.weak_bg_fill = self.muted_teal;

        visuals.hyperlink_color = self.primary;
    }
}

impl Default for BrandPalette {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a hex color string (like "#4A90E2") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
