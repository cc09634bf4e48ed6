//! Application layer with the catalog store, services and use cases.

/// Session services.
pub mod services;
/// Catalog state and reducer.
pub mod store;
/// Use case implementations.
pub mod use_cases;

pub use services::{PreferencesService, TranslationModal, TranslationPhase};
pub use store::{CatalogState, FetchCommand, FetchKind, Intent, RequestId, reduce};
pub use use_cases::LoadContentUseCase;
