//! Application services.

pub mod preferences_service;
pub mod translation_modal;

pub use preferences_service::PreferencesService;
pub use translation_modal::{TranslationModal, TranslationPhase};
