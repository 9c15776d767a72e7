/// Selection and request-epoch state.
///
/// The epoch increments on every accepted item or tab change and is never
/// reused; async completions stamped with an older epoch are stale.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    active_item: Option<String>,
    active_tab: Option<String>,
    epoch: u64,
}

impl Selection {
    /// Create selection state with an optional initially active tab.
    pub(crate) fn new(initial_tab: Option<String>) -> Self {
        Self {
            active_item: None,
            active_tab: initial_tab,
            epoch: 0,
        }
    }

    /// Return the id of the currently selected item.
    pub fn active_item(&self) -> Option<&str> {
        self.active_item.as_deref()
    }

    /// Return the id of the currently active tab.
    pub fn active_tab(&self) -> Option<&str> {
        self.active_tab.as_deref()
    }

    /// Return the current request epoch.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Return whether a completion epoch still matches the live selection.
    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    /// Accept a new active item.
    ///
    /// Returns the fresh epoch, or `None` when the item is already active.
    pub(crate) fn select_item(&mut self, item_id: &str) -> Option<u64> {
        if self.active_item.as_deref() == Some(item_id) {
            return None;
        }

        self.active_item = Some(item_id.to_owned());
        self.epoch += 1;
        Some(self.epoch)
    }

    /// Accept a new active tab.
    ///
    /// Returns the fresh epoch, or `None` when the tab is already active.
    pub(crate) fn select_tab(&mut self, tab_id: &str) -> Option<u64> {
        if self.active_tab.as_deref() == Some(tab_id) {
            return None;
        }

        self.active_tab = Some(tab_id.to_owned());
        self.epoch += 1;
        Some(self.epoch)
    }
}

#[cfg(test)]
mod tests {
    use super::Selection;

    #[test]
    fn given_repeated_item_selection_when_applied_then_second_is_a_no_op() {
        let mut selection = Selection::new(None);

        assert_eq!(selection.select_item("a"), Some(1));
        assert_eq!(selection.select_item("a"), None);
        assert_eq!(selection.epoch(), 1);
    }

    #[test]
    fn given_interleaved_changes_when_applied_then_epoch_strictly_increases()
    {
        let mut selection = Selection::new(Some(String::from("info")));

        let epochs = [
            selection.select_item("a"),
            selection.select_tab("history"),
            selection.select_item("b"),
            selection.select_tab("info"),
        ];

        assert_eq!(epochs, [Some(1), Some(2), Some(3), Some(4)]);
        assert_eq!(selection.active_item(), Some("b"));
        assert_eq!(selection.active_tab(), Some("info"));
    }

    #[test]
    fn given_superseded_epoch_when_checked_then_it_is_not_current() {
        let mut selection = Selection::new(None);
        let first = selection.select_item("a").expect("epoch should advance");
        let second = selection.select_item("b").expect("epoch should advance");

        assert!(!selection.is_current(first));
        assert!(selection.is_current(second));
    }

    #[test]
    fn given_initial_tab_when_reselected_then_no_epoch_is_spent() {
        let mut selection = Selection::new(Some(String::from("info")));

        assert_eq!(selection.select_tab("info"), None);
        assert_eq!(selection.epoch(), 0);
    }
}
