//! Events fed into the catalog reducer.

use crate::application::store::request::RequestId;
use crate::domain::entities::{
    Article, Book, BookDetails, Conference, Device, DeviceCategory, DeviceDetails, Stage,
};
use crate::domain::errors::ContentError;
use crate::domain::filter::CategoryFilter;
use crate::domain::i18n::Language;
use crate::domain::view::HubEntry;

/// A user action or a completed fetch.
#[derive(Debug)]
#[allow(missing_docs)]
pub enum Intent {
    /// Initial load: reset every view and fetch the catalog.
    Mount,
    /// Hub tile chosen on the list view.
    SelectHub(HubEntry),
    /// Device chosen in the device list.
    SelectDevice(Device),
    /// Book chosen in the book list.
    SelectBook(Book),
    /// Lectures entry chosen in the student house.
    OpenLectures,
    /// Stage chosen in the stage picker.
    SelectStage(Stage),
    /// Category chip chosen.
    SetFilter(CategoryFilter),
    /// Search text edited.
    SetSearch(String),
    /// Back navigation.
    Back,
    /// Retry after a failed fetch.
    Retry,
    /// Interface language switched; the catalog is reloaded.
    LanguageChanged(Language),

    /// Catalog fetch finished.
    CategoriesLoaded {
        request: RequestId,
        result: Result<Vec<DeviceCategory>, ContentError>,
    },
    /// Device details fetch finished.
    DeviceDetailsLoaded {
        request: RequestId,
        result: Result<DeviceDetails, ContentError>,
    },
    /// Book list fetch finished.
    BooksLoaded {
        request: RequestId,
        result: Result<Vec<Book>, ContentError>,
    },
    /// Book summary fetch finished.
    BookDetailsLoaded {
        request: RequestId,
        result: Result<BookDetails, ContentError>,
    },
    /// Article list fetch finished.
    ArticlesLoaded {
        request: RequestId,
        result: Result<Vec<Article>, ContentError>,
    },
    /// Conference list fetch finished.
    ConferencesLoaded {
        request: RequestId,
        result: Result<Vec<Conference>, ContentError>,
    },
}

impl Intent {
    /// Request id of a completion intent.
    #[must_use]
    pub const fn request(&self) -> Option<RequestId> {
        match self {
            Self::CategoriesLoaded { request, .. }
            | Self::DeviceDetailsLoaded { request, .. }
            | Self::BooksLoaded { request, .. }
            | Self::BookDetailsLoaded { request, .. }
            | Self::ArticlesLoaded { request, .. }
            | Self::ConferencesLoaded { request, .. } => Some(*request),
            _ => None,
        }
    }
}
