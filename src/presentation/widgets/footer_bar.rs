use crate::domain::keybinding::Keybind;
use crate::presentation::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub struct FooterBarStyle {
    pub background: Style,
    pub label_style: Style,
    pub key_style: Style,
    pub info: Style,
}

impl FooterBarStyle {
    #[must_use]
    pub const fn from_palette(palette: &Palette) -> Self {
        Self {
            background: palette.base_style,
            label_style: palette.label_style,
            key_style: palette.key_style,
            info: palette.title_style,
        }
    }
}

/// Key hints on the left, status text on the right.
pub struct FooterBar<'a> {
    keybindings: &'a [Keybind],
    right_info: Option<&'a str>,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    #[must_use]
    pub fn new(keybindings: &'a [Keybind], palette: &Palette) -> Self {
        Self {
            keybindings,
            right_info: None,
            style: FooterBarStyle::from_palette(palette),
        }
    }

    #[must_use]
    pub const fn right_info(mut self, info: Option<&'a str>) -> Self {
        self.right_info = info;
        self
    }

    pub(crate) fn format_key(key: &KeyEvent) -> String {
        use std::fmt::Write;
        let mut s = String::new();
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("C-");
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("A-");
        }

        match key.code {
            KeyCode::Char(' ') => s.push_str("Space"),
            KeyCode::Char(c) => s.push(c),
            KeyCode::Enter => s.push_str("Enter"),
            KeyCode::Esc => s.push_str("Esc"),
            KeyCode::Tab => s.push_str("Tab"),
            KeyCode::Backspace => s.push_str("Bksp"),
            KeyCode::Up => s.push('↑'),
            KeyCode::Down => s.push('↓'),
            KeyCode::Left => s.push('←'),
            KeyCode::Right => s.push('→'),
            KeyCode::F(n) => {
                let _ = write!(s, "F{n}");
            }
            _ => {
                let _ = write!(s, "{:?}", key.code);
            }
        }
        s
    }

    fn build_left_spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::new();

        for (i, binding) in self.keybindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!(" {} ", binding.label),
                self.style.label_style,
            ));
            spans.push(Span::styled(
                format!(" {} ", Self::format_key(&binding.key)),
                self.style.key_style,
            ));
        }

        spans
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        buf.set_style(area, self.style.background);

        let right_width = self
            .right_info
            .map_or(0, |s| u16::try_from(s.width()).unwrap_or(u16::MAX));
        let left_width = area.width.saturating_sub(right_width.saturating_add(1));

        let left_area = Rect::new(area.x, area.y, left_width, 1);
        Paragraph::new(Line::from(self.build_left_spans())).render(left_area, buf);

        if let Some(info) = self.right_info
            && right_width < area.width
        {
            let right_x = area.right().saturating_sub(right_width);
            let right_area = Rect::new(right_x, area.y, right_width, 1);
            Paragraph::new(Line::from(Span::styled(info, self.style.info))).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keybinding::Action;

    #[test]
    fn test_format_key() {
        assert_eq!(
            FooterBar::format_key(&KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            "C-u"
        );
        assert_eq!(
            FooterBar::format_key(&KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE)),
            "F2"
        );
        assert_eq!(
            FooterBar::format_key(&KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
            "Bksp"
        );
    }

    #[test]
    fn test_renders_hints_and_status() {
        let palette = Palette::default();
        let bindings = [Keybind::new(
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE),
            Action::Retry,
            "Retry",
        )];
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);

        FooterBar::new(&bindings, &palette)
            .right_info(Some("Saved"))
            .render(area, &mut buf);

        let row: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(row.starts_with(" Retry  r "));
        assert!(row.ends_with("Saved"));
    }
}
