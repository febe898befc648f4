//! Applies the brand palette to the egui context.

use crate::app::AppState;

/// Coordinates window styling.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Applies brand visuals to the context.
    ///
    /// Called every frame so the look survives any visuals reset.
    pub fn apply_brand(ctx: &egui::Context, state: &AppState) {
        ctx.set_theme(egui::Theme::Light);

        let mut visuals = egui::Visuals::light();
        state.brand.apply(&mut visuals);
        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_applied_to_context() {
        let ctx = egui::Context::default();
        let state = AppState::default();

        ThemeCoordinator::apply_brand(&ctx, &state);

        let visuals = ctx.style().visuals.clone();
        assert!(!visuals.dark_mode);
        assert_eq!(visuals.panel_fill, egui::Color32::WHITE);
        assert_eq!(visuals.selection.bg_fill, state.brand.muted_teal);
    }
}
