//! Catalog view state.

use crate::application::store::request::{RequestId, RequestSequence};
use crate::domain::entities::{
    Article, Book, BookDetails, Conference, Device, DeviceCategory, DeviceDetails, Stage,
};
use crate::domain::filter::{CategoryFilter, filter_devices};
use crate::domain::i18n::{Language, TextKey, tr, tr_with};
use crate::domain::view::{Slot, View};

/// Everything the catalog screens render from.
///
/// Mutated only by [`reduce`](crate::application::store::reduce).
#[derive(Debug, Default)]
pub struct CatalogState {
    pub(super) view: View,
    pub(super) language: Language,
    pub(super) loading: bool,
    pub(super) error: Option<String>,

    pub(super) categories: Vec<DeviceCategory>,
    pub(super) all_devices: Vec<Device>,
    pub(super) active_filter: CategoryFilter,
    pub(super) search_query: String,

    pub(super) selected_device: Option<Device>,
    pub(super) device_details: Option<DeviceDetails>,

    pub(super) books: Vec<Book>,
    pub(super) selected_book: Option<Book>,
    pub(super) book_details: Option<BookDetails>,

    pub(super) articles: Vec<Article>,
    pub(super) conferences: Vec<Conference>,

    pub(super) selected_stage: Option<Stage>,

    pub(super) requests: RequestSequence,
    /// Request whose response is still wanted.
    pub(super) awaiting: Option<RequestId>,
    /// View the in-flight or failed fetch leads to.
    pub(super) pending: Option<View>,
}

impl CatalogState {
    /// Creates an empty state in the given language.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// Current view.
    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    /// Content language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Localized error message of the last failed fetch.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Categories that survived the denylist.
    #[must_use]
    pub fn categories(&self) -> &[DeviceCategory] {
        &self.categories
    }

    /// Flattened device list.
    #[must_use]
    pub fn all_devices(&self) -> &[Device] {
        &self.all_devices
    }

    /// Active category chip.
    #[must_use]
    pub const fn active_filter(&self) -> &CategoryFilter {
        &self.active_filter
    }

    /// Current search text.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Devices passing the category chip and search text.
    #[must_use]
    pub fn filtered_devices(&self) -> Vec<&Device> {
        filter_devices(&self.all_devices, &self.active_filter, &self.search_query)
    }

    #[must_use]
    pub const fn selected_device(&self) -> Option<&Device> {
        self.selected_device.as_ref()
    }

    #[must_use]
    pub const fn device_details(&self) -> Option<&DeviceDetails> {
        self.device_details.as_ref()
    }

    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    #[must_use]
    pub const fn selected_book(&self) -> Option<&Book> {
        self.selected_book.as_ref()
    }

    #[must_use]
    pub const fn book_details(&self) -> Option<&BookDetails> {
        self.book_details.as_ref()
    }

    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    #[must_use]
    pub fn conferences(&self) -> &[Conference] {
        &self.conferences
    }

    #[must_use]
    pub const fn selected_stage(&self) -> Option<Stage> {
        self.selected_stage
    }

    /// Request whose response the state is waiting for.
    #[must_use]
    pub const fn awaiting(&self) -> Option<RequestId> {
        self.awaiting
    }

    /// View a retry would reload: the pending fetch target, else the current view.
    #[must_use]
    pub fn pending_view(&self) -> View {
        self.pending.unwrap_or(self.view)
    }

    /// Localized text for the loader.
    #[must_use]
    pub fn loading_message(&self) -> String {
        let lang = self.language;
        match (
            self.pending_view(),
            &self.selected_book,
            &self.selected_device,
        ) {
            (View::BookDetails, Some(book), _) => {
                tr_with(lang, TextKey::LoadingBookDetails, &[("title", &book.title)])
            }
            (View::Details, _, Some(device)) => {
                tr_with(lang, TextKey::LoadingDetails, &[("device", &device.name)])
            }
            (View::Books, ..) => tr(lang, TextKey::LoadingBooks).to_string(),
            (View::Articles, ..) => tr(lang, TextKey::LoadingArticles).to_string(),
            (View::Conferences, ..) => tr(lang, TextKey::LoadingConferences).to_string(),
            _ => tr(lang, TextKey::LoadingCategories).to_string(),
        }
    }

    pub(super) fn clear_slot(&mut self, slot: Slot) {
        match slot {
            Slot::SelectedDevice => self.selected_device = None,
            Slot::DeviceDetails => self.device_details = None,
            Slot::Books => self.books.clear(),
            Slot::SelectedBook => self.selected_book = None,
            Slot::BookDetails => self.book_details = None,
            Slot::Articles => self.articles.clear(),
            Slot::Conferences => self.conferences.clear(),
            Slot::SelectedStage => self.selected_stage = None,
        }
    }

    pub(super) fn reset(&mut self) {
        let language = self.language;
        let requests = std::mem::take(&mut self.requests);
        *self = Self {
            language,
            requests,
            ..Self::default()
        };
    }
}
