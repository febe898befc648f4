//! The three tabs of the migration window.

use serde::{Deserialize, Serialize};

/// A page of the main tab view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Credentials,
    Products,
    Help,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 3] = [Tab::Credentials, Tab::Products, Tab::Help];

    /// Label shown on the segmented tab button.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Credentials => "🔑 Credentials",
            Tab::Products => "📦 Products",
            Tab::Help => "❓ Help",
        }
    }
}
