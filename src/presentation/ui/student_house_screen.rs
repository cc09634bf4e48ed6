//! Student resources: lectures, projects and career paths.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::domain::i18n::TextKey;
use crate::domain::view::View;
use crate::presentation::ui::context::ScreenContext;

/// Sections in display order; only the first opens anything.
pub const STUDENT_HOUSE_SECTIONS: usize = 3;
pub const LECTURES_SECTION: usize = 0;

pub struct StudentHouseScreen<'a> {
    ctx: ScreenContext<'a>,
}

impl<'a> StudentHouseScreen<'a> {
    #[must_use]
    pub const fn new(ctx: ScreenContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Widget for StudentHouseScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ctx = self.ctx;
        let bullet = |key| {
            Line::from(vec![
                Span::styled("• ", ctx.palette.title_style),
                Span::raw(ctx.text(key)),
            ])
        };

        let items = vec![
            ctx.item(vec![
                ctx.strong(ctx.text(TextKey::LecturesSectionTitle)),
                ctx.dimmed(ctx.text(TextKey::LecturesSectionDescription)),
                Line::default(),
            ]),
            ctx.item(vec![
                ctx.strong(ctx.text(TextKey::ProjectsSectionTitle)),
                ctx.dimmed(ctx.text(TextKey::ComingSoon)),
                Line::default(),
            ]),
            ctx.item(vec![
                ctx.strong(ctx.text(TextKey::CareerSectionTitle)),
                bullet(TextKey::Career1),
                bullet(TextKey::Career2),
                bullet(TextKey::Career3),
            ]),
        ];

        let title = format!(
            "{} · {}",
            ctx.text(TextKey::StudentHouseTitle),
            ctx.text(TextKey::StudentHouseSubtitle)
        );
        ctx.render_list(
            items,
            ctx.cursors.row(View::StudentHouse),
            true,
            ctx.block(title, true),
            area,
            buf,
        );
    }
}
