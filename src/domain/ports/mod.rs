mod content_port;
mod preferences_port;

pub use content_port::ContentPort;
pub use preferences_port::PreferencesPort;

#[cfg(test)]
pub mod mocks {
    pub use super::content_port::mock::{ContentCall, MockContentPort};
    pub use super::preferences_port::MockPreferencesPort;
}
