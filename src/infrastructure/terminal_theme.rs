//! Terminal background detection.

use std::time::Duration;

use tracing::debug;

use crate::domain::preferences::Theme;

/// Detects whether the terminal has a light or dark background.
///
/// Must run before the terminal enters raw mode. Returns `None` when the
/// terminal does not answer within `timeout`.
#[must_use]
pub fn detect_terminal_theme(timeout: Duration) -> Option<Theme> {
    match termbg::theme(timeout) {
        Ok(termbg::Theme::Dark) => Some(Theme::Dark),
        Ok(termbg::Theme::Light) => Some(Theme::Light),
        Err(e) => {
            debug!(error = %e, "Terminal background detection failed");
            None
        }
    }
}
