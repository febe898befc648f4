//! Tab selection state.

use s2w::Tab;

/// Tracks the selected page of the tab view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabState {
    selected: Tab,
}

impl TabState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates tab state with a restored selection.
    pub fn with_selected(selected: Tab) -> Self {
        Self { selected }
    }

    pub fn selected(&self) -> Tab {
        self.selected
    }

    pub fn is_selected(&self, tab: Tab) -> bool {
        self.selected == tab
    }

    /// Selects `tab`. Returns true if the selection changed.
    pub fn select(&mut self, tab: Tab) -> bool {
        let changed = self.selected != tab;
        self.selected = tab;
        changed
    }
}
