//! Hub tiles, category chips, search box and device list.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Tabs, Widget},
};

use crate::domain::i18n::TextKey;
use crate::domain::view::{HubEntry, View};
use crate::presentation::ui::context::ScreenContext;
use crate::presentation::ui::cursors::ListFocus;
use crate::presentation::widgets::{TextInput, TextInputView};

#[must_use]
pub const fn hub_label(entry: HubEntry) -> TextKey {
    match entry {
        HubEntry::ScientificBooks => TextKey::ScientificBooks,
        HubEntry::GlobalArticles => TextKey::GlobalArticles,
        HubEntry::ConferencesAndExhibitions => TextKey::ConferencesAndExhibitions,
        HubEntry::StudentHouse => TextKey::StudentHouse,
    }
}

pub struct ListScreen<'a> {
    ctx: ScreenContext<'a>,
    search: &'a TextInput,
}

impl<'a> ListScreen<'a> {
    #[must_use]
    pub const fn new(ctx: ScreenContext<'a>, search: &'a TextInput) -> Self {
        Self { ctx, search }
    }

    /// Horizontal selector; right-to-left languages list entries from the right.
    fn tabs(&self, titles: Vec<Line<'a>>, selected: usize, active: bool, block: Block<'a>) -> Tabs<'a> {
        let len = titles.len();
        let (titles, selected) = if self.ctx.language().is_rtl() {
            (
                titles.into_iter().rev().collect(),
                len.saturating_sub(1).saturating_sub(selected),
            )
        } else {
            (titles, selected)
        };
        let highlight = if active {
            self.ctx.palette.selection_style
        } else {
            self.ctx.palette.title_style
        };
        Tabs::new(titles)
            .block(block)
            .style(self.ctx.palette.base_style)
            .highlight_style(highlight)
            .select(selected)
            .divider(Span::styled(" │ ", self.ctx.palette.dimmed_style))
    }

    fn render_hub(&self, area: Rect, buf: &mut Buffer) {
        let ctx = &self.ctx;
        let titles = HubEntry::ALL
            .iter()
            .map(|entry| Line::from(ctx.text(hub_label(*entry))))
            .collect();
        let active = ctx.cursors.focus == ListFocus::Hub;
        let block = ctx.block("", active);
        self.tabs(titles, ctx.cursors.hub, active, block)
            .render(area, buf);
    }

    fn render_chips(&self, area: Rect, buf: &mut Buffer) {
        let ctx = &self.ctx;
        let titles = std::iter::once(Line::from(ctx.text(TextKey::All)))
            .chain(
                ctx.catalog
                    .categories()
                    .iter()
                    .map(|category| Line::from(category.name.as_str())),
            )
            .collect();
        let active = ctx.cursors.focus == ListFocus::Chips;
        let block = ctx.block(ctx.text(TextKey::Devices), active);
        self.tabs(titles, ctx.cursors.chip, active, block)
            .render(area, buf);
    }

    fn render_devices(&self, area: Rect, buf: &mut Buffer) {
        let ctx = &self.ctx;
        let devices = ctx.catalog.filtered_devices();
        let active = ctx.cursors.focus == ListFocus::Devices;
        let title = format!("{} ({})", ctx.text(TextKey::Devices), devices.len());
        let block = ctx.block(title, active);

        if devices.is_empty() {
            Paragraph::new(Span::styled(
                ctx.text(TextKey::NoDevices),
                ctx.palette.dimmed_style,
            ))
            .alignment(ctx.alignment())
            .block(block)
            .render(area, buf);
            return;
        }

        let items = devices
            .into_iter()
            .map(|device| {
                ctx.item(vec![Line::from(vec![
                    Span::styled(device.name.as_str(), ctx.palette.base_style),
                    Span::styled(" · ", ctx.palette.dimmed_style),
                    Span::styled(device.category_name.as_str(), ctx.palette.dimmed_style),
                ])])
            })
            .collect();
        ctx.render_list(items, ctx.cursors.row(View::List), active, block, area, buf);
    }
}

impl Widget for ListScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.ctx.palette.base_style);
        let [hub, chips, search, devices] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .areas(area);

        self.render_hub(hub, buf);
        self.render_chips(chips, buf);
        TextInputView::new(
            self.search,
            self.ctx.text(TextKey::Search),
            self.ctx.palette,
        )
        .placeholder(self.ctx.text(TextKey::SearchPlaceholder))
        .alignment(self.ctx.alignment())
        .render(search, buf);
        self.render_devices(devices, buf);
    }
}
