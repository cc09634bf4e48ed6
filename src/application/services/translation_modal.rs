//! Lecture translation modal state.

use tracing::debug;

use crate::application::store::{RequestId, RequestSequence};
use crate::domain::entities::Lecture;
use crate::domain::errors::ContentError;
use crate::domain::i18n::{Language, TextKey, tr};

/// Progress of the open modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationPhase {
    /// Waiting for the content service.
    Loading,
    /// Translated text.
    Ready(String),
    /// Localized error message.
    Failed(String),
}

/// Modal-scoped translation state. Nothing survives `close`.
#[derive(Debug, Default)]
pub struct TranslationModal {
    requests: RequestSequence,
    open: Option<(RequestId, TranslationPhase)>,
}

impl TranslationModal {
    /// Creates a closed modal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the modal for a lecture and returns the request to run.
    ///
    /// Reopening for the same lecture issues a fresh request.
    pub fn open(&mut self, lecture: &Lecture) -> (RequestId, &'static str) {
        let request = self.requests.issue();
        debug!(%request, file = lecture.file_name, "Opening translation");
        self.open = Some((request, TranslationPhase::Loading));
        (request, lecture.content_en)
    }

    /// Applies a translation result if it belongs to the open modal.
    pub fn complete(
        &mut self,
        request: RequestId,
        result: Result<String, ContentError>,
        language: Language,
    ) {
        match &mut self.open {
            Some((open_request, phase)) if *open_request == request => {
                *phase = match result {
                    Ok(text) => TranslationPhase::Ready(text),
                    Err(e) => {
                        tracing::error!(error = %e, "Translation failed");
                        TranslationPhase::Failed(tr(language, TextKey::ErrorMessage).to_string())
                    }
                };
            }
            _ => debug!(%request, "Dropping translation for a closed modal"),
        }
    }

    /// Closes the modal and forgets its content.
    pub fn close(&mut self) {
        self.open = None;
    }

    /// Whether the modal is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Current phase, if open.
    #[must_use]
    pub fn phase(&self) -> Option<&TranslationPhase> {
        self.open.as_ref().map(|(_, phase)| phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LECTURES;

    #[test]
    fn test_open_complete_close() {
        let mut modal = TranslationModal::new();
        let (request, text) = modal.open(&LECTURES[0]);

        assert_eq!(text, LECTURES[0].content_en);
        assert_eq!(modal.phase(), Some(&TranslationPhase::Loading));

        modal.complete(request, Ok("نص".to_string()), Language::Ar);
        assert_eq!(modal.phase(), Some(&TranslationPhase::Ready("نص".to_string())));

        modal.close();
        assert!(!modal.is_open());
        assert!(modal.phase().is_none());
    }

    #[test]
    fn test_failure_shows_generic_message() {
        let mut modal = TranslationModal::new();
        let (request, _) = modal.open(&LECTURES[1]);

        modal.complete(request, Err(ContentError::network("down")), Language::En);

        assert_eq!(
            modal.phase(),
            Some(&TranslationPhase::Failed(
                tr(Language::En, TextKey::ErrorMessage).to_string()
            ))
        );
    }

    #[test]
    fn test_result_after_close_is_dropped() {
        let mut modal = TranslationModal::new();
        let (request, _) = modal.open(&LECTURES[2]);
        modal.close();

        modal.complete(request, Ok("late".to_string()), Language::Ar);

        assert!(!modal.is_open());
    }

    #[test]
    fn test_reopen_ignores_previous_request() {
        let mut modal = TranslationModal::new();
        let (first, _) = modal.open(&LECTURES[0]);
        modal.close();
        let (second, _) = modal.open(&LECTURES[0]);

        assert_ne!(first, second);
        modal.complete(first, Ok("old".to_string()), Language::Ar);
        assert_eq!(modal.phase(), Some(&TranslationPhase::Loading));

        modal.complete(second, Ok("new".to_string()), Language::Ar);
        assert_eq!(modal.phase(), Some(&TranslationPhase::Ready("new".to_string())));
    }
}
