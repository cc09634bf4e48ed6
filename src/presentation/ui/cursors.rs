//! Keyboard selection state for every view.

use std::collections::HashMap;

use crate::domain::view::View;
use crate::presentation::layout::step;

/// Focus zone on the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFocus {
    /// Hub tiles.
    #[default]
    Hub,
    /// Category chips.
    Chips,
    /// Search box.
    Search,
    /// Device list.
    Devices,
}

impl ListFocus {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Hub => Self::Chips,
            Self::Chips => Self::Search,
            Self::Search => Self::Devices,
            Self::Devices => Self::Hub,
        }
    }
}

/// Selected row (or scroll offset) per view, plus list-view focus.
#[derive(Debug, Default)]
pub struct Cursors {
    pub focus: ListFocus,
    pub hub: usize,
    pub chip: usize,
    rows: HashMap<View, usize>,
}

impl Cursors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Row selected in `view`.
    #[must_use]
    pub fn row(&self, view: View) -> usize {
        self.rows.get(&view).copied().unwrap_or(0)
    }

    /// Moves the selected row of `view` within `len` rows.
    pub fn move_row(&mut self, view: View, delta: isize, len: usize) {
        let row = step(self.row(view), delta, len);
        self.rows.insert(view, row);
    }

    /// Clamps the row of `view` after its content shrank.
    pub fn clamp_row(&mut self, view: View, len: usize) {
        if let Some(row) = self.rows.get_mut(&view) {
            *row = (*row).min(len.saturating_sub(1));
        }
    }

    pub fn reset_row(&mut self, view: View) {
        self.rows.remove(&view);
    }

    /// Updates cursors after a view change; forward moves start at the top.
    pub fn follow(&mut self, from: View, to: View) {
        if from != to && from.parent() != Some(to) {
            self.reset_row(to);
        }
    }

    /// Forgets everything, e.g. after a language change.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_through_all_zones() {
        let mut focus = ListFocus::default();
        let mut seen = vec![focus];
        for _ in 0..3 {
            focus = focus.next();
            seen.push(focus);
        }
        assert_eq!(focus.next(), ListFocus::Hub);
        assert_eq!(seen.len(), 4);
        assert!(seen.contains(&ListFocus::Search));
    }

    #[test]
    fn test_forward_navigation_resets_target_row() {
        let mut cursors = Cursors::new();
        cursors.move_row(View::BookDetails, 5, 10);

        cursors.follow(View::Books, View::BookDetails);

        assert_eq!(cursors.row(View::BookDetails), 0);
    }

    #[test]
    fn test_back_navigation_keeps_parent_row() {
        let mut cursors = Cursors::new();
        cursors.move_row(View::Books, 3, 10);

        cursors.follow(View::BookDetails, View::Books);

        assert_eq!(cursors.row(View::Books), 3);
    }

    #[test]
    fn test_clamp_after_filtering() {
        let mut cursors = Cursors::new();
        cursors.move_row(View::List, 7, 10);

        cursors.clamp_row(View::List, 3);

        assert_eq!(cursors.row(View::List), 2);
    }
}
