//! Application-level coordination.
//!
//! Routes panel interactions to state changes. The store action buttons
//! are placeholders: they are logged and nothing else happens.

use crate::app::AppState;
use crate::ui::panel_manager::PanelInteraction;

/// What handling an interaction changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// The selected tab changed and should be persisted
    TabChanged,
    /// Nothing to persist
    Unchanged,
}

/// Coordinates application-level operations.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Applies a panel interaction to the application state.
    pub fn handle_interaction(state: &mut AppState, interaction: PanelInteraction) -> InteractionOutcome {
        match interaction {
            PanelInteraction::TabSelected(tab) => {
                if state.tabs.select(tab) {
                    tracing::debug!("Switched to tab {:?}", tab);
                    InteractionOutcome::TabChanged
                } else {
                    InteractionOutcome::Unchanged
                }
            }
            PanelInteraction::PlaceholderAction(action) => {
                tracing::info!("'{}' clicked; no action is attached yet", action.label());
                InteractionOutcome::Unchanged
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::panel_manager::PlaceholderAction;
    use s2w::{CredentialField, Tab};

    #[test]
    fn test_tab_selection() {
        let mut state = AppState::default();

        let outcome = ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::TabSelected(Tab::Products));
        assert_eq!(outcome, InteractionOutcome::TabChanged);
        assert_eq!(state.tabs.selected(), Tab::Products);

        let outcome = ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::TabSelected(Tab::Products));
        assert_eq!(outcome, InteractionOutcome::Unchanged);
    }

    #[test]
    fn test_placeholders_leave_state_alone() {
        let mut state = AppState::default();
        state.credentials.set(CredentialField::ShopifyStoreUrl, "shop.example");
        let before = state.credentials.clone();

        for action in PlaceholderAction::ALL {
            let outcome = ApplicationCoordinator::handle_interaction(
                &mut state,
                PanelInteraction::PlaceholderAction(action),
            );
            assert_eq!(outcome, InteractionOutcome::Unchanged);
        }

        assert_eq!(state.credentials, before);
        assert_eq!(state.tabs.selected(), Tab::Credentials);
    }
}
