//! State management modules for the S2W migration window.
//!
//! This module contains state-only logic (no UI concerns):
//! - Tab state (which page of the tab view is showing)
//! - Logo state (header logo texture, if it loaded)

mod tab_state;
mod logo_state;

pub use tab_state::TabState;
pub use logo_state::LogoState;
