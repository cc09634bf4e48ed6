//! Main application orchestrator.

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyModifiers};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Block,
};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::application::services::{PreferencesService, TranslationModal, TranslationPhase};
use crate::application::store::{CatalogState, FetchCommand, Intent, RequestId, reduce};
use crate::application::use_cases::LoadContentUseCase;
use crate::domain::entities::{Lecture, Stage};
use crate::domain::errors::ContentError;
use crate::domain::filter::CategoryFilter;
use crate::domain::i18n::{Language, TextKey, tr, tr_with};
use crate::domain::keybinding::{Action, Keybind};
use crate::domain::view::{HubEntry, View};
use crate::infrastructure::lectures::{LectureLibrary, LibraryError};
use crate::infrastructure::links::{book_search_url, open_url};
use crate::presentation::commands::CommandRegistry;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::layout::step;
use crate::presentation::theme::Palette;
use crate::presentation::ui::books_screen::{BookDetailsScreen, BooksScreen};
use crate::presentation::ui::context::ScreenContext;
use crate::presentation::ui::cursors::{Cursors, ListFocus};
use crate::presentation::ui::details_screen::DetailsScreen;
use crate::presentation::ui::lectures_screen::{LecturesListScreen, StagesScreen, visible_lectures};
use crate::presentation::ui::list_screen::ListScreen;
use crate::presentation::ui::publications_screen::{ArticlesScreen, ConferencesScreen};
use crate::presentation::ui::student_house_screen::{
    LECTURES_SECTION, STUDENT_HOUSE_SECTIONS, StudentHouseScreen,
};
use crate::presentation::widgets::{
    ErrorPanel, FooterBar, HeaderBar, LoaderPanel, TextInput, TranslationPopup,
};

const SPINNER_TICK_RATE: Duration = Duration::from_millis(100);
/// Rough characters per wrapped line when bounding text scroll.
const CHARS_PER_LINE: usize = 40;

#[derive(Debug)]
enum AppEvent {
    Loaded(Intent),
    Translated {
        request: RequestId,
        result: Result<String, ContentError>,
    },
    Downloaded {
        lecture: &'static Lecture,
        result: Result<PathBuf, LibraryError>,
    },
}

pub struct App {
    catalog: CatalogState,
    loader: LoadContentUseCase,
    preferences: PreferencesService,
    modal: TranslationModal,
    modal_scroll: u16,
    library: LectureLibrary,
    commands: CommandRegistry,
    palette: Palette,
    cursors: Cursors,
    search: TextInput,
    status: Option<String>,
    spinner_frame: usize,
    should_quit: bool,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    #[must_use]
    pub fn new(
        loader: LoadContentUseCase,
        preferences: PreferencesService,
        library: LectureLibrary,
        accent_color: &str,
    ) -> Self {
        let current = preferences.current();
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Self {
            catalog: CatalogState::new(current.language),
            loader,
            preferences,
            modal: TranslationModal::new(),
            modal_scroll: 0,
            library,
            commands: CommandRegistry::new(),
            palette: Palette::new(current.theme, accent_color),
            cursors: Cursors::new(),
            search: TextInput::new(),
            status: None,
            spinner_frame: 0,
            should_quit: false,
            event_tx,
            event_rx,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.dispatch(Intent::Mount);
        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut spinner_interval = interval(SPINNER_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while !self.should_quit {
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                Some(event) = self.event_rx.recv() => {
                    self.handle_app_event(event);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = spinner_interval.tick() => {
                    if self.is_busy() {
                        self.spinner_frame = self.spinner_frame.wrapping_add(1);
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                Some(Ok(event)) = terminal_event => {
                    if self.handle_terminal_event(event).await == EventResult::Exit {
                        self.should_quit = true;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    fn is_busy(&self) -> bool {
        self.catalog.is_loading() || matches!(self.modal.phase(), Some(TranslationPhase::Loading))
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Loaded(intent) => self.dispatch(intent),
            AppEvent::Translated { request, result } => {
                self.modal.complete(request, result, self.catalog.language());
            }
            AppEvent::Downloaded { lecture, result } => self.finish_download(lecture, result),
        }
    }

    /// Runs an intent through the reducer and starts the fetch it asks for.
    fn dispatch(&mut self, intent: Intent) {
        let before = self.catalog.view();
        if let Some(command) = reduce(&mut self.catalog, intent) {
            self.spawn_fetch(command);
        }
        let after = self.catalog.view();

        self.cursors.follow(before, after);
        self.cursors.chip = self.cursors.chip.min(self.catalog.categories().len());
        self.cursors
            .clamp_row(View::List, self.catalog.filtered_devices().len());
    }

    fn spawn_fetch(&self, command: FetchCommand) {
        let loader = self.loader.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let intent = loader.execute(command).await;
            if tx.send(AppEvent::Loaded(intent)).is_err() {
                debug!("Event loop closed before fetch finished");
            }
        });
    }

    async fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key).await,
            _ => EventResult::Continue,
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if !EventHandler::is_actionable(&key) {
            return EventResult::Continue;
        }
        if EventHandler::is_force_quit_event(&key) {
            return EventResult::Exit;
        }
        self.status = None;

        if self.modal.is_open() {
            return self.handle_modal_key(key);
        }
        if self.search.is_focused() && self.handle_search_key(key) {
            return EventResult::Consumed;
        }

        match self.commands.find_action(key) {
            Some(action) => self.handle_action(action).await,
            None => EventResult::Continue,
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) -> EventResult {
        match self.commands.find_action(key) {
            Some(Action::CloseModal | Action::Back | Action::Select | Action::Quit) => {
                self.modal.close();
                self.modal_scroll = 0;
            }
            Some(Action::NavigateDown) => {
                self.modal_scroll = self.modal_scroll.saturating_add(1).min(self.modal_scroll_limit());
            }
            Some(Action::NavigateUp) => self.modal_scroll = self.modal_scroll.saturating_sub(1),
            _ => {}
        }
        EventResult::Consumed
    }

    fn modal_scroll_limit(&self) -> u16 {
        let lines = match self.modal.phase() {
            Some(TranslationPhase::Ready(text)) => text.chars().count() / CHARS_PER_LINE,
            _ => 0,
        };
        u16::try_from(lines).unwrap_or(u16::MAX)
    }

    /// Edits the search box. Returns `false` for keys the registry should handle.
    fn handle_search_key(&mut self, key: KeyEvent) -> bool {
        if EventHandler::is_submit_event(&key) || key.code == KeyCode::Esc {
            self.set_focus(ListFocus::Devices);
            return true;
        }
        let before = self.search.value().to_string();
        match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.search.input_char(c);
            }
            KeyCode::Backspace => self.search.backspace(),
            KeyCode::Delete => self.search.delete(),
            KeyCode::Left => self.search.move_left(),
            KeyCode::Right => self.search.move_right(),
            KeyCode::Home => self.search.move_start(),
            KeyCode::End => self.search.move_end(),
            _ => return false,
        }
        if self.search.value() != before {
            self.apply_search();
        }
        true
    }

    fn apply_search(&mut self) {
        self.cursors.reset_row(View::List);
        self.dispatch(Intent::SetSearch(self.search.value().to_string()));
    }

    fn set_focus(&mut self, focus: ListFocus) {
        self.cursors.focus = focus;
        self.search.set_focused(focus == ListFocus::Search);
    }

    async fn handle_action(&mut self, action: Action) -> EventResult {
        let idle = !self.catalog.is_loading() && self.catalog.error().is_none();

        match action {
            Action::Quit => return EventResult::Exit,
            Action::Back | Action::CloseModal => self.dispatch(Intent::Back),
            Action::Retry => {
                if self.catalog.error().is_some() {
                    self.dispatch(Intent::Retry);
                }
            }
            Action::ToggleTheme => {
                let theme = self.preferences.toggle_theme().await;
                self.palette = self.palette.with_theme(theme);
            }
            Action::ToggleLanguage => self.change_language().await,
            Action::FocusNext if idle && self.catalog.view() == View::List => {
                self.set_focus(self.cursors.focus.next());
            }
            Action::FocusSearch if idle && self.catalog.view() == View::List => {
                self.set_focus(ListFocus::Search);
            }
            Action::ClearSearch if self.catalog.view() == View::List => {
                self.search.clear();
                self.apply_search();
            }
            Action::NavigateUp
            | Action::NavigateDown
            | Action::NavigateLeft
            | Action::NavigateRight
                if idle =>
            {
                self.navigate(action);
            }
            Action::Select if idle => self.select(),
            Action::OpenLink if idle => self.open_link(),
            Action::Download if idle => self.download_lecture(),
            Action::Translate if idle => self.translate_lecture(),
            _ => return EventResult::Continue,
        }
        EventResult::Consumed
    }

    async fn change_language(&mut self) {
        let language = self.preferences.toggle_language().await;
        self.cursors.reset();
        self.search.clear();
        self.search.set_focused(false);
        self.modal.close();
        self.dispatch(Intent::LanguageChanged(language));
    }

    fn navigate(&mut self, action: Action) {
        let vertical: isize = match action {
            Action::NavigateUp => -1,
            Action::NavigateDown => 1,
            _ => 0,
        };
        let mut horizontal: isize = match action {
            Action::NavigateLeft => -1,
            Action::NavigateRight => 1,
            _ => 0,
        };
        // Tabs are drawn mirrored in right-to-left languages.
        if self.catalog.language().is_rtl() {
            horizontal = -horizontal;
        }

        let view = self.catalog.view();
        if view != View::List {
            let len = self.row_count(view);
            self.cursors.move_row(view, vertical, len);
            return;
        }

        match self.cursors.focus {
            ListFocus::Hub if horizontal != 0 => {
                self.cursors.hub = step(self.cursors.hub, horizontal, HubEntry::ALL.len());
            }
            ListFocus::Hub if vertical > 0 => self.set_focus(ListFocus::Chips),
            ListFocus::Chips if horizontal != 0 => {
                let chips = self.catalog.categories().len() + 1;
                let chip = step(self.cursors.chip, horizontal, chips);
                if chip != self.cursors.chip {
                    self.cursors.chip = chip;
                    self.apply_chip();
                }
            }
            ListFocus::Chips if vertical > 0 => self.set_focus(ListFocus::Devices),
            ListFocus::Chips if vertical < 0 => self.set_focus(ListFocus::Hub),
            ListFocus::Devices if vertical < 0 && self.cursors.row(View::List) == 0 => {
                self.set_focus(ListFocus::Chips);
            }
            ListFocus::Devices => {
                let len = self.catalog.filtered_devices().len();
                self.cursors.move_row(View::List, vertical, len);
            }
            _ => {}
        }
    }

    fn apply_chip(&mut self) {
        let filter = match self
            .cursors
            .chip
            .checked_sub(1)
            .and_then(|index| self.catalog.categories().get(index))
        {
            Some(category) => CategoryFilter::Named(category.name.clone()),
            None => CategoryFilter::All,
        };
        self.cursors.reset_row(View::List);
        self.dispatch(Intent::SetFilter(filter));
    }

    /// Selectable rows, or scrollable lines for text views.
    fn row_count(&self, view: View) -> usize {
        match view {
            View::List => self.catalog.filtered_devices().len(),
            View::Details => self.catalog.device_details().map_or(0, |details| {
                details.principle.chars().count() / CHARS_PER_LINE + details.malfunctions.len() * 3 + 8
            }),
            View::Books => self.catalog.books().len(),
            View::BookDetails => self.catalog.book_details().map_or(0, |details| {
                (details.book.description.chars().count() + details.summary.chars().count())
                    / CHARS_PER_LINE
                    + 8
            }),
            View::Articles => self.catalog.articles().len(),
            View::Conferences => self.catalog.conferences().len(),
            View::StudentHouse => STUDENT_HOUSE_SECTIONS,
            View::LecturesStages => Stage::ALL.len(),
            View::LecturesList => visible_lectures(self.catalog.selected_stage()).len(),
        }
    }

    fn select(&mut self) {
        let view = self.catalog.view();
        let row = self.cursors.row(view);

        let intent = match view {
            View::List => match self.cursors.focus {
                ListFocus::Hub => HubEntry::ALL.get(self.cursors.hub).copied().map(Intent::SelectHub),
                ListFocus::Devices => self
                    .catalog
                    .filtered_devices()
                    .get(row)
                    .map(|device| Intent::SelectDevice((*device).clone())),
                ListFocus::Chips => {
                    self.set_focus(ListFocus::Devices);
                    None
                }
                ListFocus::Search => None,
            },
            View::Books => self.catalog.books().get(row).cloned().map(Intent::SelectBook),
            View::StudentHouse => (row == LECTURES_SECTION).then_some(Intent::OpenLectures),
            View::LecturesStages => Stage::ALL.get(row).copied().map(Intent::SelectStage),
            View::LecturesList => {
                self.open_lecture();
                None
            }
            View::Details | View::BookDetails | View::Articles | View::Conferences => {
                self.open_link();
                None
            }
        };

        if let Some(intent) = intent {
            self.dispatch(intent);
        }
    }

    fn selected_lecture(&self) -> Option<&'static Lecture> {
        visible_lectures(self.catalog.selected_stage())
            .get(self.cursors.row(View::LecturesList))
            .copied()
    }

    fn open_link(&mut self) {
        let row = self.cursors.row(self.catalog.view());
        let url = match self.catalog.view() {
            View::Details => self
                .catalog
                .selected_device()
                .map(|device| device.image_url.clone())
                .filter(|url| !url.is_empty()),
            View::BookDetails => self
                .catalog
                .book_details()
                .and_then(|details| book_search_url(details).ok())
                .map(|url| url.to_string()),
            View::Articles => self.catalog.articles().get(row).map(|a| a.url.clone()),
            View::Conferences => self.catalog.conferences().get(row).map(|c| c.url.clone()),
            View::LecturesList => {
                self.open_lecture();
                return;
            }
            _ => None,
        };

        if let Some(url) = url
            && let Err(e) = open_url(&url)
        {
            warn!(error = %e, %url, "Failed to open link");
            self.status = Some(url);
        }
    }

    fn open_lecture(&mut self) {
        let Some(lecture) = self.selected_lecture() else {
            return;
        };
        if let Err(e) = self.library.open(lecture) {
            warn!(error = %e, file = lecture.file_name, "Failed to open lecture");
            self.status = Some(tr(self.catalog.language(), TextKey::FileUnavailable).to_string());
        }
    }

    fn download_lecture(&self) {
        if self.catalog.view() != View::LecturesList {
            return;
        }
        let Some(lecture) = self.selected_lecture() else {
            return;
        };

        let library = self.library.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = library.download(lecture).await;
            if tx.send(AppEvent::Downloaded { lecture, result }).is_err() {
                debug!("Event loop closed before download finished");
            }
        });
    }

    fn finish_download(&mut self, lecture: &Lecture, result: Result<PathBuf, LibraryError>) {
        let language = self.catalog.language();
        self.status = Some(match result {
            Ok(path) => tr_with(
                language,
                TextKey::FileSaved,
                &[("path", &path.display().to_string())],
            ),
            Err(e) => {
                warn!(error = %e, file = lecture.file_name, "Failed to download lecture");
                tr(language, TextKey::FileUnavailable).to_string()
            }
        });
    }

    fn translate_lecture(&mut self) {
        if self.catalog.view() != View::LecturesList {
            return;
        }
        let Some(lecture) = self.selected_lecture() else {
            return;
        };
        let (request, text) = self.modal.open(lecture);
        self.modal_scroll = 0;

        let loader = self.loader.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = loader.translate(text).await;
            if tx.send(AppEvent::Translated { request, result }).is_err() {
                debug!("Event loop closed before translation finished");
            }
        });
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let language = self.catalog.language();
        frame.render_widget(Block::default().style(self.palette.base_style), area);

        let [header, body, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(HeaderBar::new(language, &self.palette), header);
        self.render_body(frame, body);

        let keybinds = self.keybinds();
        frame.render_widget(
            FooterBar::new(&keybinds, &self.palette).right_info(self.status.as_deref()),
            footer,
        );

        if let Some(phase) = self.modal.phase() {
            frame.render_widget(
                TranslationPopup::new(
                    tr(language, TextKey::TranslationModalTitle),
                    phase,
                    tr(language, TextKey::TranslatingMessage),
                    &self.palette,
                )
                .scroll(self.modal_scroll),
                area,
            );
        }
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        let language = self.catalog.language();

        if self.catalog.is_loading() {
            let message = self.catalog.loading_message();
            frame.render_widget(LoaderPanel::new(&message, self.spinner_frame, &self.palette), area);
            return;
        }

        if let Some(error) = self.catalog.error() {
            let panel = ErrorPanel::new(tr(language, TextKey::ErrorTitle), error, &self.palette)
                .hint(self.error_hint(language));
            frame.render_widget(panel, area);
            return;
        }

        let ctx = ScreenContext::new(&self.catalog, &self.cursors, &self.palette);
        match self.catalog.view() {
            View::List => frame.render_widget(ListScreen::new(ctx, &self.search), area),
            View::Details => frame.render_widget(DetailsScreen::new(ctx), area),
            View::Books => frame.render_widget(BooksScreen::new(ctx), area),
            View::BookDetails => frame.render_widget(BookDetailsScreen::new(ctx), area),
            View::Articles => frame.render_widget(ArticlesScreen::new(ctx), area),
            View::Conferences => frame.render_widget(ConferencesScreen::new(ctx), area),
            View::StudentHouse => frame.render_widget(StudentHouseScreen::new(ctx), area),
            View::LecturesStages => frame.render_widget(StagesScreen::new(ctx), area),
            View::LecturesList => frame.render_widget(LecturesListScreen::new(ctx), area),
        }
    }

    fn error_hint(&self, language: Language) -> Line<'static> {
        let mut spans = Vec::new();
        for (action, key) in [(Action::Retry, TextKey::Retry), (Action::Back, TextKey::BackToList)] {
            if let Some(event) = self.commands.get(action) {
                if !spans.is_empty() {
                    spans.push(Span::raw("   "));
                }
                spans.push(Span::styled(
                    format!(" {} ", FooterBar::format_key(&event)),
                    self.palette.key_style,
                ));
                spans.push(Span::styled(
                    format!(" {}", tr(language, key)),
                    self.palette.label_style,
                ));
            }
        }
        Line::from(spans)
    }

    fn keybinds(&self) -> Vec<Keybind> {
        let language = self.catalog.language();
        let view = self.catalog.view();

        let mut entries: Vec<(Action, TextKey)> = if self.modal.is_open() {
            vec![(Action::CloseModal, TextKey::Close), (Action::NavigateDown, TextKey::Scroll)]
        } else if self.catalog.error().is_some() {
            vec![(Action::Retry, TextKey::Retry), (Action::Back, TextKey::BackToList)]
        } else if self.catalog.is_loading() {
            vec![(Action::Back, TextKey::BackToList)]
        } else {
            match view {
                View::List => vec![
                    (Action::Select, TextKey::Select),
                    (Action::FocusSearch, TextKey::Search),
                ],
                View::Details => vec![
                    (Action::NavigateDown, TextKey::Scroll),
                    (Action::OpenLink, TextKey::ImageLink),
                    (Action::Back, TextKey::BackToList),
                ],
                View::BookDetails => vec![
                    (Action::NavigateDown, TextKey::Scroll),
                    (Action::OpenLink, TextKey::FindOnline),
                    (Action::Back, TextKey::BackToList),
                ],
                View::Articles => vec![
                    (Action::OpenLink, TextKey::ReadArticle),
                    (Action::Back, TextKey::BackToList),
                ],
                View::Conferences => vec![
                    (Action::OpenLink, TextKey::VisitWebsite),
                    (Action::Back, TextKey::BackToList),
                ],
                View::LecturesList => vec![
                    (Action::Select, TextKey::OpenFile),
                    (Action::Download, TextKey::DownloadFile),
                    (Action::Translate, TextKey::Translate),
                    (Action::Back, TextKey::BackToList),
                ],
                View::Books | View::StudentHouse | View::LecturesStages => vec![
                    (Action::Select, TextKey::Select),
                    (Action::Back, TextKey::BackToList),
                ],
            }
        };

        if !self.modal.is_open() {
            entries.extend([
                (Action::ToggleLanguage, TextKey::Language),
                (Action::ToggleTheme, TextKey::ToggleTheme),
                (Action::Quit, TextKey::Quit),
            ]);
        }

        entries
            .into_iter()
            .filter_map(|(action, key)| self.commands.keybind(action, tr(language, key)))
            .collect()
    }
}
