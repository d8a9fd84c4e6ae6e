//! Selection and hover state management.

/// State related to the selected and hovered listings.
///
/// Indices refer to positions in the catalog, not in the ordered view,
/// so selection survives re-sorting.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Catalog index of the selected listing
    selected: Option<usize>,
    /// Catalog index of the listing under the cursor
    hovered: Option<usize>,
}

impl SelectionState {
    /// Creates a new selection state with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all selection and hover state.
    pub fn clear(&mut self) {
        self.selected = None;
        self.hovered = None;
    }

    // ===== Queries =====

    /// Returns the selected listing's catalog index, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the hovered listing's catalog index, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Returns true if the given catalog index is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    // ===== Mutations =====

    /// Selects a listing; selecting it again deselects it.
    pub fn toggle_select(&mut self, index: usize) {
        if self.selected == Some(index) {
            self.selected = None;
        } else {
            self.selected = Some(index);
        }
    }

    /// Updates the hovered listing.
    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_select_flips() {
        let mut sel = SelectionState::new();
        sel.toggle_select(2);
        assert!(sel.is_selected(2));
        sel.toggle_select(2);
        assert_eq!(sel.selected(), None);
    }

    #[test]
    fn test_selecting_other_listing_moves_selection() {
        let mut sel = SelectionState::new();
        sel.toggle_select(1);
        sel.toggle_select(3);
        assert!(sel.is_selected(3));
        assert!(!sel.is_selected(1));
    }
}
