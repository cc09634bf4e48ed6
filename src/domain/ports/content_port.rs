//! Content service port definition.

use async_trait::async_trait;

use crate::domain::entities::{Article, Book, BookDetails, Conference, DeviceCategory, DeviceDetails};
use crate::domain::errors::ContentError;
use crate::domain::i18n::Language;

/// Port for the generative content service.
#[async_trait]
pub trait ContentPort: Send + Sync {
    /// Fetches the device catalog.
    async fn device_categories(
        &self,
        language: Language,
    ) -> Result<Vec<DeviceCategory>, ContentError>;

    /// Fetches principle of operation and malfunctions for a device.
    async fn device_details(
        &self,
        device_name: &str,
        language: Language,
    ) -> Result<DeviceDetails, ContentError>;

    /// Fetches recommended books.
    async fn scientific_books(&self, language: Language) -> Result<Vec<Book>, ContentError>;

    /// Fetches a summary for a book.
    async fn scientific_book_details(
        &self,
        book: &Book,
        language: Language,
    ) -> Result<BookDetails, ContentError>;

    /// Fetches recent articles.
    async fn global_articles(&self, language: Language) -> Result<Vec<Article>, ContentError>;

    /// Fetches upcoming conferences and exhibitions.
    async fn conferences_and_exhibitions(
        &self,
        language: Language,
    ) -> Result<Vec<Conference>, ContentError>;

    /// Translates English text into Arabic.
    async fn translate_text(&self, text: &str) -> Result<String, ContentError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::Mutex;

    use crate::domain::entities::{DeviceFromApi, Malfunction};

    /// Recorded call on the mock content port.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ContentCall {
        Categories(Language),
        DeviceDetails(String, Language),
        Books(Language),
        BookDetails(String, Language),
        Articles(Language),
        Conferences(Language),
        Translate(String),
    }

    /// Mock content port for testing.
    pub struct MockContentPort {
        should_succeed: Arc<AtomicBool>,
        categories: Vec<DeviceCategory>,
        calls: Mutex<Vec<ContentCall>>,
    }

    impl MockContentPort {
        /// Creates new mock.
        pub fn new(should_succeed: bool) -> Self {
            Self {
                should_succeed: Arc::new(AtomicBool::new(should_succeed)),
                categories: vec![
                    DeviceCategory::new("X-ray Devices", "Radiography")
                        .with_device(DeviceFromApi::new("C-arm", "https://img/carm.png")),
                    DeviceCategory::new("Dental Equipment (Dentistry)", "Dental")
                        .with_device(DeviceFromApi::new("Dental Chair", "https://img/chair.png")),
                ],
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Replaces the catalog returned by `device_categories`.
        pub fn with_categories(mut self, categories: Vec<DeviceCategory>) -> Self {
            self.categories = categories;
            self
        }

        /// Sets success behavior.
        pub fn set_should_succeed(&self, value: bool) {
            self.should_succeed.store(value, Ordering::SeqCst);
        }

        /// Returns recorded calls.
        pub async fn calls(&self) -> Vec<ContentCall> {
            self.calls.lock().await.clone()
        }

        async fn record(&self, call: ContentCall) -> Result<(), ContentError> {
            self.calls.lock().await.push(call);
            if self.should_succeed.load(Ordering::SeqCst) {
                Ok(())
            } else {
                Err(ContentError::network("mock failure"))
            }
        }
    }

    #[async_trait]
    impl ContentPort for MockContentPort {
        async fn device_categories(
            &self,
            language: Language,
        ) -> Result<Vec<DeviceCategory>, ContentError> {
            self.record(ContentCall::Categories(language)).await?;
            Ok(self.categories.clone())
        }

        async fn device_details(
            &self,
            device_name: &str,
            language: Language,
        ) -> Result<DeviceDetails, ContentError> {
            self.record(ContentCall::DeviceDetails(device_name.to_string(), language))
                .await?;
            Ok(DeviceDetails {
                name: device_name.to_string(),
                principle: "Converts X-ray photons into an image.".to_string(),
                malfunctions: vec![Malfunction::new("No image", "Check the detector cable")],
            })
        }

        async fn scientific_books(&self, language: Language) -> Result<Vec<Book>, ContentError> {
            self.record(ContentCall::Books(language)).await?;
            Ok(vec![Book::new(
                "Medical Instrumentation",
                "John G. Webster",
                "Application and design",
            )])
        }

        async fn scientific_book_details(
            &self,
            book: &Book,
            language: Language,
        ) -> Result<BookDetails, ContentError> {
            self.record(ContentCall::BookDetails(book.title.clone(), language))
                .await?;
            Ok(BookDetails::new(book.clone(), "A thorough summary."))
        }

        async fn global_articles(&self, language: Language) -> Result<Vec<Article>, ContentError> {
            self.record(ContentCall::Articles(language)).await?;
            Ok(vec![Article {
                title: "Wearable ECG".to_string(),
                authors: "A. Author".to_string(),
                journal: "IEEE TBME".to_string(),
                summary: "Continuous monitoring.".to_string(),
                url: "https://example.org/ecg".to_string(),
            }])
        }

        async fn conferences_and_exhibitions(
            &self,
            language: Language,
        ) -> Result<Vec<Conference>, ContentError> {
            self.record(ContentCall::Conferences(language)).await?;
            Ok(vec![Conference {
                name: "Arab Health".to_string(),
                location: "Dubai".to_string(),
                date: "January".to_string(),
                description: "Healthcare exhibition.".to_string(),
                url: "https://example.org/arabhealth".to_string(),
            }])
        }

        async fn translate_text(&self, text: &str) -> Result<String, ContentError> {
            self.record(ContentCall::Translate(text.to_string())).await?;
            Ok(format!("ترجمة: {text}"))
        }
    }
}
