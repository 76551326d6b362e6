/// Which item, if any, the page is showing in its detail viewer.
///
/// Owned by the page rather than the carousel: the carousel only reports
/// which item was tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected: Option<usize>,
    item_count: usize,
}

impl SelectionState {
    pub fn new(item_count: usize) -> Self {
        Self {
            selected: None,
            item_count,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Select `index`. Out-of-range indices are ignored and return false.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.item_count {
            log::warn!(
                "Selection: index {} out of range for {} items",
                index,
                self.item_count
            );
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Clear the selection, returning what was selected.
    pub fn clear(&mut self) -> Option<usize> {
        self.selected.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_and_clear() {
        let mut selection = SelectionState::new(5);
        assert!(!selection.is_open());
        assert!(selection.select(3));
        assert_eq!(selection.selected(), Some(3));
        assert!(selection.select(1));
        assert_eq!(selection.clear(), Some(1));
        assert_eq!(selection.clear(), None);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut selection = SelectionState::new(2);
        selection.select(0);
        assert!(!selection.select(2));
        assert_eq!(selection.selected(), Some(0));
    }
}
