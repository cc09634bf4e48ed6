//! Loading and error panels shown in place of a view.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::theme::Palette;

const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Spinner with a loading message.
pub struct LoaderPanel<'a> {
    message: &'a str,
    frame: usize,
    palette: &'a Palette,
}

impl<'a> LoaderPanel<'a> {
    #[must_use]
    pub const fn new(message: &'a str, frame: usize, palette: &'a Palette) -> Self {
        Self {
            message,
            frame,
            palette,
        }
    }
}

impl Widget for LoaderPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);
        let spinner = SPINNER_FRAMES[self.frame % SPINNER_FRAMES.len()];

        Paragraph::new(Line::from(vec![
            Span::styled(spinner, self.palette.title_style),
            Span::raw(" "),
            Span::styled(self.message, self.palette.base_style),
        ]))
        .alignment(Alignment::Center)
        .render(row, buf);
    }
}

/// Generic failure message with a retry hint.
pub struct ErrorPanel<'a> {
    title: &'a str,
    message: &'a str,
    hint: Option<Line<'a>>,
    palette: &'a Palette,
}

impl<'a> ErrorPanel<'a> {
    #[must_use]
    pub const fn new(title: &'a str, message: &'a str, palette: &'a Palette) -> Self {
        Self {
            title,
            message,
            hint: None,
            palette,
        }
    }

    #[must_use]
    pub fn hint(mut self, hint: Line<'a>) -> Self {
        self.hint = Some(hint);
        self
    }
}

impl Widget for ErrorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [panel] = Layout::vertical([Constraint::Length(6)])
            .flex(Flex::Center)
            .areas(area);
        let [panel] = Layout::horizontal([Constraint::Max(70)])
            .flex(Flex::Center)
            .areas(panel);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.error_style)
            .style(self.palette.base_style)
            .title(Span::styled(format!(" {} ", self.title), self.palette.error_style))
            .title_alignment(Alignment::Center);

        let mut lines = vec![Line::from(self.message), Line::default()];
        if let Some(hint) = self.hint {
            lines.push(hint);
        }

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(panel, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_loader_cycles_frames() {
        let palette = Palette::default();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);

        LoaderPanel::new("Loading", SPINNER_FRAMES.len() + 1, &palette).render(area, &mut buf);

        let rendered = text(&buf);
        assert!(rendered.contains(SPINNER_FRAMES[1]));
        assert!(rendered.contains("Loading"));
    }

    #[test]
    fn test_error_panel_shows_message() {
        let palette = Palette::default();
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);

        ErrorPanel::new("Oops", "Failed to load", &palette)
            .hint(Line::from("r Retry"))
            .render(area, &mut buf);

        let rendered = text(&buf);
        assert!(rendered.contains("Oops"));
        assert!(rendered.contains("Failed to load"));
        assert!(rendered.contains("r Retry"));
    }
}
