use shared::PartId;

/// Single-part selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<PartId>,
}

impl SelectionState {
    /// Currently selected part
    pub fn selected(&self) -> Option<&PartId> {
        self.selected.as_ref()
    }

    /// Check if a part is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Select a part, or clear with `None` (click on empty space)
    pub fn select(&mut self, id: Option<PartId>) {
        self.selected = id;
    }

    /// Clear selection
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Drop the selection if it points at the removed part
    pub fn on_part_removed(&mut self, id: &str) {
        if self.is_selected(id) {
            self.selected = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_empty() {
        let s = SelectionState::default();
        assert!(s.selected().is_none());
    }

    #[test]
    fn test_select_replaces_previous() {
        let mut s = SelectionState::default();
        s.select(Some("a".to_string()));
        s.select(Some("b".to_string()));
        assert!(!s.is_selected("a"));
        assert!(s.is_selected("b"));
    }

    #[test]
    fn test_select_none_clears() {
        let mut s = SelectionState::default();
        s.select(Some("a".to_string()));
        s.select(None);
        assert!(s.selected().is_none());
    }

    #[test]
    fn test_removed_selected_part_clears() {
        let mut s = SelectionState::default();
        s.select(Some("a".to_string()));
        s.on_part_removed("a");
        assert!(s.selected().is_none());
    }

    #[test]
    fn test_removed_other_part_keeps_selection() {
        let mut s = SelectionState::default();
        s.select(Some("a".to_string()));
        s.on_part_removed("b");
        assert!(s.is_selected("a"));
    }
}
