//! Panel orchestration and layout management.
//!
//! Lays out the brand header and the tab view, and collects interactions
//! for the application coordinator.

use crate::app::AppState;
use crate::ui::{credentials_tab, header, help_tab, products_tab, tab_bar};
use s2w::Tab;

/// Buttons that exist in the window but have no behavior attached yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderAction {
    TestShopify,
    TestWooCommerce,
    FetchProducts,
    MigrateProducts,
}

impl PlaceholderAction {
    pub const ALL: [PlaceholderAction; 4] = [
        PlaceholderAction::TestShopify,
        PlaceholderAction::TestWooCommerce,
        PlaceholderAction::FetchProducts,
        PlaceholderAction::MigrateProducts,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlaceholderAction::TestShopify => "Test Shopify",
            PlaceholderAction::TestWooCommerce => "Test WooCommerce",
            PlaceholderAction::FetchProducts => "Fetch Products",
            PlaceholderAction::MigrateProducts => "Migrate Products",
        }
    }
}

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelInteraction {
    /// User clicked a tab button
    TabSelected(Tab),
    /// User clicked one of the placeholder buttons
    PlaceholderAction(PlaceholderAction),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let header_frame = egui::Frame::default()
            .fill(state.brand.primary)
            .inner_margin(egui::Margin::ZERO);

        // Brand bar at the top
        egui::TopBottomPanel::top("header")
            .exact_height(header::HEADER_HEIGHT)
            .resizable(false)
            .frame(header_frame)
            .show(ctx, |ui| {
                header::render_header(ui, state);
            });

        let body_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(10))
            .fill(state.brand.window_background);

        // Tab view fills the rest
        egui::CentralPanel::default()
            .frame(body_frame)
            .show(ctx, |ui| {
                if let Some(tab) = tab_bar::render_tab_bar(ui, state) {
                    interaction = Some(PanelInteraction::TabSelected(tab));
                }

                ui.add_space(4.0);

                let action = match state.tabs.selected() {
                    Tab::Credentials => credentials_tab::render_credentials_tab(ui, state),
                    Tab::Products => products_tab::render_products_tab(ui, state),
                    Tab::Help => {
                        help_tab::render_help_tab(ui, state);
                        None
                    }
                };

                if let Some(action) = action {
                    interaction = Some(PanelInteraction::PlaceholderAction(action));
                }
            });

        interaction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::credentials_tab::input_id;
    use s2w::CredentialField;

    fn run_frame(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            interaction = PanelManager::render_all_panels(ctx, state);
        });
        interaction
    }

    /// Runs a few frames (grids need a sizing pass) and returns every painted string.
    fn rendered_text(ctx: &egui::Context, state: &mut AppState) -> Vec<String> {
        fn collect(shape: &egui::Shape, out: &mut Vec<String>) {
            match shape {
                egui::Shape::Text(text) => out.push(text.galley.text().to_string()),
                egui::Shape::Vec(shapes) => shapes.iter().for_each(|s| collect(s, out)),
                _ => {}
            }
        }

        let mut output = None;
        for _ in 0..3 {
            output = Some(ctx.run(egui::RawInput::default(), |ctx| {
                PanelManager::render_all_panels(ctx, state);
            }));
        }

        let mut texts = Vec::new();
        for clipped in output.map(|o| o.shapes).unwrap_or_default() {
            collect(&clipped.shape, &mut texts);
        }
        texts
    }

    #[test]
    fn test_credentials_tab_renders_five_inputs() {
        let ctx = egui::Context::default();
        let mut state = AppState::default();

        rendered_text(&ctx, &mut state);

        for field in CredentialField::ALL {
            assert!(
                ctx.read_response(input_id(field)).is_some(),
                "no input rendered for {}",
                field.label()
            );
        }
    }

    #[test]
    fn test_three_tab_buttons_rendered() {
        let ctx = egui::Context::default();
        let mut state = AppState::default();

        let texts = rendered_text(&ctx, &mut state);

        for tab in Tab::ALL {
            assert!(texts.iter().any(|t| t == tab.label()), "missing tab {}", tab.label());
        }
        assert_eq!(texts.iter().filter(|t| Tab::ALL.iter().any(|tab| tab.label() == t.as_str())).count(), 3);
    }

    #[test]
    fn test_secret_inputs_are_masked() {
        let ctx = egui::Context::default();
        let mut state = AppState::default();
        state.credentials.set(CredentialField::ShopifyStoreUrl, "shop.example.com");
        state.credentials.set(CredentialField::ShopifyAccessToken, "shpat_token_value");
        state.credentials.set(CredentialField::WooCommerceConsumerKey, "ck_key_value");
        state.credentials.set(CredentialField::WooCommerceConsumerSecret, "cs_secret_value");

        let texts = rendered_text(&ctx, &mut state);

        assert!(texts.iter().any(|t| t.contains("shop.example.com")));
        assert!(texts.iter().any(|t| t.contains("ck_key_value")));
        assert!(!texts.iter().any(|t| t.contains("shpat_token_value")));
        assert!(!texts.iter().any(|t| t.contains("cs_secret_value")));
    }

    #[test]
    fn test_every_tab_renders_without_interaction() {
        let ctx = egui::Context::default();
        let mut state = AppState::default();

        for tab in Tab::ALL {
            state.tabs.select(tab);
            assert_eq!(run_frame(&ctx, &mut state), None);
        }
    }

    #[test]
    fn test_rendering_does_not_touch_credentials() {
        let ctx = egui::Context::default();
        let mut state = AppState::default();
        state.credentials.set(CredentialField::WooCommerceConsumerSecret, "cs_abc");

        run_frame(&ctx, &mut state);
        run_frame(&ctx, &mut state);

        assert_eq!(state.credentials.value(CredentialField::WooCommerceConsumerSecret), "cs_abc");
        assert_eq!(state.credentials.len(), 5);
    }

    #[test]
    fn test_placeholder_labels() {
        let labels: Vec<&str> = PlaceholderAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["Test Shopify", "Test WooCommerce", "Fetch Products", "Migrate Products"]);
    }
}
