//! UI panel rendering subsystem
//!
//! This module contains all UI rendering for the migration window:
//! - Header panel (logo and title on the brand bar)
//! - Tab bar (segmented buttons switching pages)
//! - Credentials, Products and Help tabs
//! - Shared brand widgets
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod tab_bar;
pub mod credentials_tab;
pub mod products_tab;
pub mod help_tab;
pub mod widgets;
pub mod panel_manager;
