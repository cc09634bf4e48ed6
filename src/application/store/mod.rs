//! Catalog store: state, intents and the reducer that connects them.
//!
//! ```text
//! Intent ──→ reduce ──→ CatalogState ──→ screens
//!               │
//!               └──→ FetchCommand ──→ LoadContentUseCase ──→ *Loaded intent
//! ```

mod intent;
mod reducer;
mod request;
mod state;

pub use intent::Intent;
pub use reducer::reduce;
pub use request::{FetchCommand, FetchKind, RequestId, RequestSequence};
pub use state::CatalogState;
