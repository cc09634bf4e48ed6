//! Layout helpers shared by widgets and screens.

use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};

use crate::domain::i18n::Language;

/// Text alignment for the reading direction of `language`.
#[must_use]
pub const fn alignment_for(language: Language) -> Alignment {
    if language.is_rtl() {
        Alignment::Right
    } else {
        Alignment::Left
    }
}

/// Rectangle of the given percentage size centered in `area`.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(vertical);
    rect
}

/// Moves `index` by `delta` inside `0..len`, clamping at both ends.
#[must_use]
pub fn step(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.saturating_add_signed(delta).min(len - 1)
}
