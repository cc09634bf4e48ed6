//! Device principle of operation and troubleshooting table.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::domain::i18n::TextKey;
use crate::domain::view::View;
use crate::presentation::ui::context::ScreenContext;

pub struct DetailsScreen<'a> {
    ctx: ScreenContext<'a>,
}

impl<'a> DetailsScreen<'a> {
    #[must_use]
    pub const fn new(ctx: ScreenContext<'a>) -> Self {
        Self { ctx }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let ctx = self.ctx;
        let Some(details) = ctx.catalog.device_details() else {
            return Vec::new();
        };
        let mut lines = Vec::new();

        if let Some(device) = ctx.catalog.selected_device() {
            lines.push(ctx.dimmed(device.category_name.as_str()));
            if !device.image_url.is_empty() {
                lines.push(ctx.field(ctx.text(TextKey::ImageLink), device.image_url.as_str()));
            }
            lines.push(Line::default());
        }

        lines.push(ctx.heading(ctx.text(TextKey::PrincipleOfOperation)));
        lines.extend(details.principle.lines().map(Line::from));
        lines.push(Line::default());

        lines.push(ctx.heading(ctx.text(TextKey::CommonMalfunctions)));
        for malfunction in &details.malfunctions {
            lines.push(Line::from(vec![
                Span::styled("• ", ctx.palette.title_style),
                Span::styled(
                    format!("{}: ", ctx.text(TextKey::Fault)),
                    ctx.palette.error_style,
                ),
                Span::raw(malfunction.fault.as_str()),
            ]));
            lines.push(ctx.field(ctx.text(TextKey::Solution), malfunction.solution.as_str()));
            lines.push(Line::default());
        }
        lines
    }
}

impl Widget for DetailsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = self
            .ctx
            .catalog
            .device_details()
            .map(|d| d.name.clone())
            .unwrap_or_default();
        let block = self.ctx.block(title, true);

        Paragraph::new(self.lines())
            .block(block)
            .alignment(self.ctx.alignment())
            .wrap(Wrap { trim: false })
            .scroll((self.ctx.scroll(View::Details), 0))
            .render(area, buf);
    }
}
