//! Centralized application state for the migration window.
//!
//! Composes focused state components so panels can borrow the piece they
//! need without holding the whole state.

use crate::state::{LogoState, TabState};
use s2w::{AppConfig, BrandPalette, CredentialForm, Tab};

/// Main application state.
#[derive(Debug)]
pub struct AppState {
    /// Window configuration (title, size, logo path)
    pub config: AppConfig,

    /// Brand colors used by every panel
    pub brand: BrandPalette,

    /// Selected page of the tab view
    pub tabs: TabState,

    /// Text typed into the credential inputs
    pub credentials: CredentialForm,

    /// Header logo, when it could be loaded
    pub logo: LogoState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    /// Creates state with an empty form, no logo and the Credentials tab selected.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            brand: BrandPalette::new(),
            tabs: TabState::new(),
            credentials: CredentialForm::new(),
            logo: LogoState::none(),
        }
    }

    /// Creates state with the tab selection restored from storage and a loaded logo.
    pub fn with_selected_tab_and_logo(config: AppConfig, selected: Tab, logo: LogoState) -> Self {
        Self {
            tabs: TabState::with_selected(selected),
            logo,
            ..Self::new(config)
        }
    }

    /// Window title as configured.
    pub fn window_title(&self) -> &str {
        &self.config.title
    }
}
