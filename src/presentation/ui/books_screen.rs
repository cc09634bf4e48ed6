//! Book list and book summary.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::domain::i18n::TextKey;
use crate::domain::view::View;
use crate::presentation::ui::context::ScreenContext;

pub struct BooksScreen<'a> {
    ctx: ScreenContext<'a>,
}

impl<'a> BooksScreen<'a> {
    #[must_use]
    pub const fn new(ctx: ScreenContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Widget for BooksScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ctx = self.ctx;
        let items = ctx
            .catalog
            .books()
            .iter()
            .map(|book| {
                ctx.item(vec![
                    ctx.strong(book.title.as_str()),
                    ctx.field(ctx.text(TextKey::BookAuthor), book.author.as_str()),
                    ctx.dimmed(book.description.as_str()),
                    Line::default(),
                ])
            })
            .collect();
        let block = ctx.block(ctx.text(TextKey::ScientificBooksTitle), true);
        ctx.render_list(items, ctx.cursors.row(View::Books), true, block, area, buf);
    }
}

pub struct BookDetailsScreen<'a> {
    ctx: ScreenContext<'a>,
}

impl<'a> BookDetailsScreen<'a> {
    #[must_use]
    pub const fn new(ctx: ScreenContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Widget for BookDetailsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ctx = self.ctx;
        let Some(details) = ctx.catalog.book_details() else {
            return;
        };

        let mut lines = vec![
            ctx.field(ctx.text(TextKey::BookAuthor), details.book.author.as_str()),
            ctx.dimmed(details.book.description.as_str()),
            Line::default(),
            ctx.heading(ctx.text(TextKey::BookSummary)),
        ];
        lines.extend(details.summary.lines().map(Line::from));

        Paragraph::new(lines)
            .block(ctx.block(details.book.title.clone(), true))
            .alignment(ctx.alignment())
            .wrap(Wrap { trim: false })
            .scroll((ctx.scroll(View::BookDetails), 0))
            .render(area, buf);
    }
}
