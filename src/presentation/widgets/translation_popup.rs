use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::application::services::TranslationPhase;
use crate::presentation::layout::centered_rect;
use crate::presentation::theme::Palette;

/// Overlay showing a lecture translation. Arabic text is right-aligned.
pub struct TranslationPopup<'a> {
    title: &'a str,
    phase: &'a TranslationPhase,
    loading_text: &'a str,
    scroll: u16,
    palette: &'a Palette,
}

impl<'a> TranslationPopup<'a> {
    #[must_use]
    pub const fn new(
        title: &'a str,
        phase: &'a TranslationPhase,
        loading_text: &'a str,
        palette: &'a Palette,
    ) -> Self {
        Self {
            title,
            phase,
            loading_text,
            scroll: 0,
            palette,
        }
    }

    #[must_use]
    pub const fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for TranslationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(70, 60, area);
        if popup.area() == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.focused_border_style)
            .style(self.palette.base_style)
            .title(Span::styled(format!(" {} ", self.title), self.palette.title_style))
            .title_alignment(Alignment::Right);

        let paragraph = match self.phase {
            TranslationPhase::Loading => Paragraph::new(Span::styled(
                self.loading_text,
                self.palette.dimmed_style,
            ))
            .alignment(Alignment::Center),
            TranslationPhase::Ready(text) => Paragraph::new(text.as_str())
                .alignment(Alignment::Right)
                .scroll((self.scroll, 0)),
            TranslationPhase::Failed(message) => {
                Paragraph::new(Span::styled(message.as_str(), self.palette.error_style))
                    .alignment(Alignment::Center)
            }
        };

        Clear.render(popup, buf);
        paragraph
            .block(block)
            .wrap(Wrap { trim: false })
            .render(popup, buf);
    }
}
