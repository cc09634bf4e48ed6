//! Stage picker and lecture list.

use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

use crate::domain::entities::{Lecture, Stage, lectures_for_stage};
use crate::domain::i18n::{TextKey, tr_with};
use crate::domain::view::View;
use crate::presentation::ui::context::ScreenContext;

pub struct StagesScreen<'a> {
    ctx: ScreenContext<'a>,
}

impl<'a> StagesScreen<'a> {
    #[must_use]
    pub const fn new(ctx: ScreenContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Widget for StagesScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ctx = self.ctx;
        let items = Stage::ALL
            .iter()
            .map(|stage| {
                let count = lectures_for_stage(*stage).len().to_string();
                ctx.item(vec![
                    ctx.strong(ctx.text(TextKey::stage(*stage))),
                    Line::from(count).style(ctx.palette.dimmed_style),
                ])
            })
            .collect();
        let block = ctx.block(ctx.text(TextKey::LecturesListTitle), true);
        ctx.render_list(
            items,
            ctx.cursors.row(View::LecturesStages),
            true,
            block,
            area,
            buf,
        );
    }
}

/// Lectures of the selected stage, in display order.
#[must_use]
pub fn visible_lectures(stage: Option<Stage>) -> Vec<&'static Lecture> {
    stage.map(lectures_for_stage).unwrap_or_default()
}

pub struct LecturesListScreen<'a> {
    ctx: ScreenContext<'a>,
}

impl<'a> LecturesListScreen<'a> {
    #[must_use]
    pub const fn new(ctx: ScreenContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Widget for LecturesListScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ctx = self.ctx;
        let stage = ctx.catalog.selected_stage();
        let items = visible_lectures(stage)
            .into_iter()
            .map(|lecture| {
                ctx.item(vec![
                    ctx.strong(ctx.text(TextKey::LectureTitle(lecture.id))),
                    ctx.dimmed(ctx.text(TextKey::LectureDescription(lecture.id))),
                    Line::from(lecture.file_name).style(ctx.palette.dimmed_style),
                    Line::default(),
                ])
            })
            .collect();

        let title = stage.map_or_else(String::new, |stage| {
            tr_with(
                ctx.language(),
                TextKey::LecturesForStage,
                &[("stage", ctx.text(TextKey::stage(stage)))],
            )
        });
        ctx.render_list(
            items,
            ctx.cursors.row(View::LecturesList),
            true,
            ctx.block(title, true),
            area,
            buf,
        );
    }
}
