//! Runs fetch commands against the content service.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::store::{FetchCommand, FetchKind, Intent};
use crate::domain::errors::ContentError;
use crate::domain::ports::ContentPort;

/// Executes a [`FetchCommand`] and wraps the outcome as a completion intent.
#[derive(Clone)]
pub struct LoadContentUseCase {
    content: Arc<dyn ContentPort>,
}

impl LoadContentUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(content: Arc<dyn ContentPort>) -> Self {
        Self { content }
    }

    /// Performs the fetch. Never fails: errors travel inside the intent.
    pub async fn execute(&self, command: FetchCommand) -> Intent {
        let FetchCommand {
            request,
            kind,
            language,
        } = command;
        debug!(%request, kind = ?kind, %language, "Requesting content");

        let intent = match kind {
            FetchKind::Categories => Intent::CategoriesLoaded {
                request,
                result: self.content.device_categories(language).await,
            },
            FetchKind::DeviceDetails(device) => Intent::DeviceDetailsLoaded {
                request,
                result: self.content.device_details(&device.name, language).await,
            },
            FetchKind::Books => Intent::BooksLoaded {
                request,
                result: self.content.scientific_books(language).await,
            },
            FetchKind::BookDetails(book) => Intent::BookDetailsLoaded {
                request,
                result: self.content.scientific_book_details(&book, language).await,
            },
            FetchKind::Articles => Intent::ArticlesLoaded {
                request,
                result: self.content.global_articles(language).await,
            },
            FetchKind::Conferences => Intent::ConferencesLoaded {
                request,
                result: self.content.conferences_and_exhibitions(language).await,
            },
        };

        info!(%request, "Content request finished");
        intent
    }

    /// Translates lecture text into Arabic.
    ///
    /// # Errors
    /// Returns error if the content service fails.
    pub async fn translate(&self, text: &str) -> Result<String, ContentError> {
        debug!(chars = text.chars().count(), "Requesting translation");
        self.content.translate_text(text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::store::{CatalogState, reduce};
    use crate::domain::entities::Book;
    use crate::domain::i18n::Language;
    use crate::domain::ports::mocks::{ContentCall, MockContentPort};
    use crate::domain::view::{HubEntry, View};

    #[tokio::test]
    async fn test_mount_round_trip_filters_categories() {
        let port = Arc::new(MockContentPort::new(true));
        let use_case = LoadContentUseCase::new(port.clone());
        let mut state = CatalogState::new(Language::En);

        let command = reduce(&mut state, Intent::Mount).unwrap();
        let intent = use_case.execute(command).await;
        reduce(&mut state, intent);

        assert_eq!(port.calls().await, vec![ContentCall::Categories(Language::En)]);
        assert_eq!(state.categories().len(), 1);
        assert_eq!(state.all_devices()[0].name, "C-arm");
    }

    #[tokio::test]
    async fn test_failed_book_details_retry_calls_book_details_again() {
        let port = Arc::new(MockContentPort::new(true));
        let use_case = LoadContentUseCase::new(port.clone());
        let mut state = CatalogState::new(Language::Ar);

        let intent = use_case.execute(reduce(&mut state, Intent::Mount).unwrap()).await;
        reduce(&mut state, intent);
        let command = reduce(&mut state, Intent::SelectHub(HubEntry::ScientificBooks)).unwrap();
        let intent = use_case.execute(command).await;
        reduce(&mut state, intent);
        assert_eq!(state.view(), View::Books);

        let book: Book = state.books()[0].clone();
        port.set_should_succeed(false);
        let command = reduce(&mut state, Intent::SelectBook(book.clone())).unwrap();
        let intent = use_case.execute(command).await;
        reduce(&mut state, intent);
        assert!(state.error().is_some());

        port.set_should_succeed(true);
        let retry = reduce(&mut state, Intent::Retry).unwrap();
        let intent = use_case.execute(retry).await;
        reduce(&mut state, intent);

        let calls = port.calls().await;
        assert_eq!(
            &calls[calls.len() - 2..],
            &[
                ContentCall::BookDetails(book.title.clone(), Language::Ar),
                ContentCall::BookDetails(book.title.clone(), Language::Ar),
            ]
        );
        assert!(!calls[2..].contains(&ContentCall::Books(Language::Ar)));
        assert_eq!(state.view(), View::BookDetails);
    }

    #[tokio::test]
    async fn test_translate_passes_text_through() {
        let port = Arc::new(MockContentPort::new(true));
        let use_case = LoadContentUseCase::new(port.clone());

        let translated = use_case.translate("Patient safety").await.unwrap();

        assert!(translated.contains("Patient safety"));
        assert_eq!(
            port.calls().await,
            vec![ContentCall::Translate("Patient safety".to_string())]
        );
    }
}
