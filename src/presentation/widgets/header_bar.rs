use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::i18n::{Language, TextKey, tr};
use crate::domain::preferences::Theme;
use crate::presentation::layout::alignment_for;
use crate::presentation::theme::Palette;

/// Title row with language and theme indicators.
pub struct HeaderBar<'a> {
    language: Language,
    palette: &'a Palette,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub const fn new(language: Language, palette: &'a Palette) -> Self {
        Self { language, palette }
    }

    fn indicators(&self) -> String {
        let theme = match self.palette.theme {
            Theme::Light => tr(self.language, TextKey::ThemeLight),
            Theme::Dark => tr(self.language, TextKey::ThemeDark),
        };
        format!(
            " {} {} · {} ",
            tr(self.language, TextKey::Language),
            self.language.code().to_uppercase(),
            theme
        )
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_style(area, self.palette.base_style);

        let title = format!(" {} ", tr(self.language, TextKey::AppTitle));
        let indicators = self.indicators();
        let indicator_width = u16::try_from(indicators.width()).unwrap_or(0);
        let title_width = area.width.saturating_sub(indicator_width);

        // Title on the reading-start side, indicators on the other.
        let (title_x, indicator_x) = if self.language.is_rtl() {
            (area.x + indicator_width.min(area.width), area.x)
        } else {
            (area.x, area.x + title_width)
        };

        Paragraph::new(Line::from(Span::styled(title, self.palette.label_style)))
            .alignment(alignment_for(self.language))
            .render(Rect::new(title_x, area.y, title_width, 1), buf);

        if indicator_width < area.width {
            Paragraph::new(Line::from(Span::styled(indicators, self.palette.key_style)))
                .render(Rect::new(indicator_x, area.y, indicator_width, 1), buf);
        }

        if area.height > 1 {
            let subtitle_area = Rect::new(area.x, area.y + 1, area.width, 1);
            Paragraph::new(Span::styled(
                tr(self.language, TextKey::AppSubtitle),
                self.palette.dimmed_style,
            ))
            .alignment(alignment_for(self.language))
            .render(subtitle_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(language: Language) -> Buffer {
        let palette = Palette::default();
        let area = Rect::new(0, 0, 80, 2);
        let mut buf = Buffer::empty(area);
        HeaderBar::new(language, &palette).render(area, &mut buf);
        buf
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_english_title_on_left() {
        let buf = render(Language::En);
        let first = row(&buf, 0);

        assert!(first.starts_with(" Biomedical Engineering Guide"));
        assert!(first.contains("EN"));
    }

    #[test]
    fn test_arabic_indicators_on_left() {
        let buf = render(Language::Ar);
        let first = row(&buf, 0);

        assert!(first.trim_start().contains("AR"));
        assert!(first.find("AR") < first.find('د'));
    }
}
