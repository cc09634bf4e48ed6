//! Borrowed state every screen renders from.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget},
};

use crate::application::store::CatalogState;
use crate::domain::i18n::{Language, TextKey, tr};
use crate::domain::view::View;
use crate::presentation::layout::alignment_for;
use crate::presentation::theme::Palette;
use crate::presentation::ui::cursors::Cursors;

#[derive(Clone, Copy)]
pub struct ScreenContext<'a> {
    pub catalog: &'a CatalogState,
    pub cursors: &'a Cursors,
    pub palette: &'a Palette,
}

impl<'a> ScreenContext<'a> {
    #[must_use]
    pub const fn new(catalog: &'a CatalogState, cursors: &'a Cursors, palette: &'a Palette) -> Self {
        Self {
            catalog,
            cursors,
            palette,
        }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.catalog.language()
    }

    #[must_use]
    pub const fn text(&self, key: TextKey) -> &'static str {
        tr(self.language(), key)
    }

    #[must_use]
    pub const fn alignment(&self) -> Alignment {
        alignment_for(self.language())
    }

    /// Scroll offset of a text view.
    #[must_use]
    pub fn scroll(&self, view: View) -> u16 {
        u16::try_from(self.cursors.row(view)).unwrap_or(u16::MAX)
    }

    /// Bordered block with a title on the reading-start side.
    #[must_use]
    pub fn block(&self, title: impl Into<String>, focused: bool) -> Block<'static> {
        let border = if focused {
            self.palette.focused_border_style
        } else {
            self.palette.border_style
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .style(self.palette.base_style)
            .title_alignment(self.alignment());
        let title = title.into();
        if title.is_empty() {
            return block;
        }
        block.title(Span::styled(format!(" {title} "), self.palette.title_style))
    }

    /// Heading line for a section.
    #[must_use]
    pub fn heading(&self, text: &'a str) -> Line<'a> {
        Line::from(Span::styled(text, self.palette.title_style))
    }

    /// `label: value` line.
    #[must_use]
    pub fn field(&self, label: &'static str, value: &'a str) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("{label}: "), self.palette.dimmed_style),
            Span::styled(value, self.palette.base_style),
        ])
    }

    /// List item made of several lines, aligned for the current language.
    #[must_use]
    pub fn item(&self, lines: Vec<Line<'a>>) -> ListItem<'a> {
        ListItem::new(Text::from(lines).alignment(self.alignment()))
    }

    #[must_use]
    pub fn strong(&self, text: &'a str) -> Line<'a> {
        Line::from(Span::styled(
            text,
            self.palette.base_style.add_modifier(Modifier::BOLD),
        ))
    }

    #[must_use]
    pub fn dimmed(&self, text: &'a str) -> Line<'a> {
        Line::from(Span::styled(text, self.palette.dimmed_style))
    }

    /// Renders a selectable list. `active` controls whether the selection is highlighted.
    pub fn render_list(
        &self,
        items: Vec<ListItem<'a>>,
        selected: usize,
        active: bool,
        block: Block<'a>,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let highlight = if active {
            self.palette.selection_style
        } else {
            Style::default()
        };
        let list = List::new(items)
            .block(block)
            .style(self.palette.base_style)
            .highlight_style(highlight)
            .highlight_symbol(if active { "▌ " } else { "  " });
        let mut state = ListState::default().with_selected(Some(selected));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
