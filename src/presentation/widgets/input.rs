//! Text input widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::presentation::theme::Palette;

/// Single-line text field. The cursor counts characters, not bytes.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    cursor: usize,
    focused: bool,
}

impl TextInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Clears value.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Inserts character at cursor.
    pub fn input_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes character before cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Deletes character at cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }
}

/// Renders a [`TextInput`] with label, placeholder and palette.
pub struct TextInputView<'a> {
    input: &'a TextInput,
    label: &'a str,
    placeholder: &'a str,
    palette: &'a Palette,
    alignment: Alignment,
}

impl<'a> TextInputView<'a> {
    #[must_use]
    pub const fn new(input: &'a TextInput, label: &'a str, palette: &'a Palette) -> Self {
        Self {
            input,
            label,
            placeholder: "",
            palette,
            alignment: Alignment::Left,
        }
    }

    #[must_use]
    pub const fn placeholder(mut self, text: &'a str) -> Self {
        self.placeholder = text;
        self
    }

    #[must_use]
    pub const fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl Widget for TextInputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.input.focused {
            self.palette.focused_border_style
        } else {
            self.palette.border_style
        };

        let (display, text_style): (&str, Style) = if self.input.value.is_empty() {
            (self.placeholder, self.palette.dimmed_style)
        } else {
            (self.input.value.as_str(), self.palette.base_style)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(self.palette.base_style)
            .title(self.label)
            .title_alignment(self.alignment);

        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(display)
            .style(text_style)
            .alignment(self.alignment)
            .render(inner, buf);

        if self.input.focused && inner.width > 0 && self.alignment == Alignment::Left {
            let before: String = self.input.value.chars().take(self.input.cursor).collect();
            let offset = u16::try_from(before.width()).unwrap_or(u16::MAX);
            let cursor_x = inner.x.saturating_add(offset);
            if cursor_x < inner.x + inner.width {
                buf[(cursor_x, inner.y)].set_style(self.palette.selection_style);
            }
        }
    }
}
