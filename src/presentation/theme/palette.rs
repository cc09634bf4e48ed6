use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

use crate::domain::preferences::Theme;

const DEFAULT_ACCENT: Color = Color::Rgb(20, 184, 166);

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub theme: Theme,
    pub accent: Color,
    pub base_style: Style,
    pub title_style: Style,
    pub dimmed_style: Style,
    pub selection_style: Style,
    pub border_style: Style,
    pub focused_border_style: Style,
    pub error_style: Style,
    pub label_style: Style,
    pub key_style: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_color(Theme::Light, DEFAULT_ACCENT)
    }
}

impl Palette {
    pub fn new(theme: Theme, accent_color_str: &str) -> Self {
        Self::from_color(theme, parse_color(accent_color_str))
    }

    #[must_use]
    pub fn from_color(theme: Theme, accent: Color) -> Self {
        let (background, foreground, dimmed, surface) = match theme {
            Theme::Light => (
                Color::Rgb(248, 250, 252),
                Color::Rgb(15, 23, 42),
                Color::Rgb(100, 116, 139),
                Color::Rgb(226, 232, 240),
            ),
            Theme::Dark => (
                Color::Rgb(15, 23, 42),
                Color::Rgb(226, 232, 240),
                Color::Rgb(148, 163, 184),
                Color::Rgb(51, 65, 85),
            ),
        };

        let base_style = Style::default().bg(background).fg(foreground);

        Self {
            theme,
            accent,
            base_style,
            title_style: base_style.fg(accent).add_modifier(Modifier::BOLD),
            dimmed_style: base_style.fg(dimmed),
            selection_style: Style::default()
                .bg(accent)
                .fg(background)
                .add_modifier(Modifier::BOLD),
            border_style: base_style.fg(dimmed),
            focused_border_style: base_style.fg(accent),
            error_style: base_style.fg(Color::Rgb(220, 38, 38)),
            label_style: Style::default()
                .bg(accent)
                .fg(background)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().bg(surface).fg(foreground),
        }
    }

    /// Same accent, other color scheme.
    #[must_use]
    pub fn with_theme(self, theme: Theme) -> Self {
        Self::from_color(theme, self.accent)
    }
}

#[must_use]
pub fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Ok((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => DEFAULT_ACCENT,
    }
}

fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), ()> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return Err(());
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| ());
    match s.len() {
        6 => Ok((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => Ok((
            channel(&s[0..1].repeat(2))?,
            channel(&s[1..2].repeat(2))?,
            channel(&s[2..3].repeat(2))?,
        )),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#FF0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Orange"), Color::Indexed(208));
        assert_eq!(parse_color("teal"), DEFAULT_ACCENT);
        assert_eq!(parse_color("Invalid"), DEFAULT_ACCENT);
    }

    #[test]
    fn test_themes_differ_but_share_accent() {
        let light = Palette::new(Theme::Light, "#14b8a6");
        let dark = light.with_theme(Theme::Dark);

        assert_eq!(light.accent, dark.accent);
        assert_ne!(light.base_style.bg, dark.base_style.bg);
        assert_eq!(dark.theme, Theme::Dark);
    }
}
