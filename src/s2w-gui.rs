//! S2W Product Migration GUI Application
//!
//! A branded egui window for a Shopify-to-WooCommerce product migration tool.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! The window features:
//! - A brand header with the optional logo and the window title
//! - A Credentials tab collecting both stores' connection details
//! - A Products tab with fetch/migrate buttons
//! - A Help tab with step-by-step instructions
//!
//! The store action buttons are placeholders; clicking them is only logged.
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - Tab selection and logo state
//! - `ui/` - Panel rendering and layout

use eframe::egui;
use tracing_subscriber::EnvFilter;

mod app;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, InteractionOutcome, SettingsCoordinator, ThemeCoordinator};
use s2w::AppConfig;
use state::LogoState;
use ui::panel_manager::PanelManager;

/// Main application entry point that initializes logging and launches the window.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    tracing::info!("Starting '{}' at {}", config.title, config.geometry);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.inner_size())
            .with_title(&config.title),
        ..Default::default()
    };

    let app_name = config.title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| Ok(Box::new(MigrationApp::new(cc, config)))),
    )
}

/// The migration window.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` applies panel interactions to state
/// - `ThemeCoordinator` applies the brand visuals
/// - `PanelManager` lays out and renders the panels
struct MigrationApp {
    state: AppState,
}

impl MigrationApp {
    /// Creates the window state, restoring the selected tab and loading the logo.
    fn new(cc: &eframe::CreationContext, config: AppConfig) -> Self {
        let selected_tab = SettingsCoordinator::load_selected_tab(cc.storage);
        let logo = LogoState::load(&cc.egui_ctx, &config.logo_path);

        Self {
            state: AppState::with_selected_tab_and_logo(config, selected_tab, logo),
        }
    }
}

impl eframe::App for MigrationApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_preferences(storage, &self.state);
    }

    /// Applies the brand, renders the panels and handles their interactions.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_brand(ctx, &self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            let outcome = ApplicationCoordinator::handle_interaction(&mut self.state, interaction);

            // Persist tab changes immediately for crash resilience
            if outcome == InteractionOutcome::TabChanged {
                if let Some(storage) = frame.storage_mut() {
                    SettingsCoordinator::save_preferences(storage, &self.state);
                }
            }
        }
    }
}
