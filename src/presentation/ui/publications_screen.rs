//! Article and conference lists.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::Widget,
};

use crate::domain::i18n::TextKey;
use crate::domain::view::View;
use crate::presentation::ui::context::ScreenContext;

pub struct ArticlesScreen<'a> {
    ctx: ScreenContext<'a>,
}

impl<'a> ArticlesScreen<'a> {
    #[must_use]
    pub const fn new(ctx: ScreenContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Widget for ArticlesScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ctx = self.ctx;
        let items = ctx
            .catalog
            .articles()
            .iter()
            .map(|article| {
                ctx.item(vec![
                    ctx.strong(article.title.as_str()),
                    ctx.field(ctx.text(TextKey::ArticleAuthors), article.authors.as_str()),
                    ctx.field(ctx.text(TextKey::ArticleJournal), article.journal.as_str()),
                    Line::from(article.summary.as_str()),
                    ctx.dimmed(article.url.as_str()),
                    Line::default(),
                ])
            })
            .collect();
        let block = ctx.block(ctx.text(TextKey::GlobalArticlesTitle), true);
        ctx.render_list(items, ctx.cursors.row(View::Articles), true, block, area, buf);
    }
}

pub struct ConferencesScreen<'a> {
    ctx: ScreenContext<'a>,
}

impl<'a> ConferencesScreen<'a> {
    #[must_use]
    pub const fn new(ctx: ScreenContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Widget for ConferencesScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ctx = self.ctx;
        let items = ctx
            .catalog
            .conferences()
            .iter()
            .map(|conference| {
                ctx.item(vec![
                    ctx.strong(conference.name.as_str()),
                    ctx.field(
                        ctx.text(TextKey::ConferenceLocation),
                        conference.location.as_str(),
                    ),
                    ctx.field(ctx.text(TextKey::ConferenceDate), conference.date.as_str()),
                    Line::from(conference.description.as_str()),
                    ctx.dimmed(conference.url.as_str()),
                    Line::default(),
                ])
            })
            .collect();
        let block = ctx.block(ctx.text(TextKey::ConferencesAndExhibitionsTitle), true);
        ctx.render_list(items, ctx.cursors.row(View::Conferences), true, block, area, buf);
    }
}
