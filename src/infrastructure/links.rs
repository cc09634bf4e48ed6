//! External links opened in the browser.

use reqwest::Url;
use tracing::debug;

use crate::domain::entities::BookDetails;

pub type UrlParseError = <Url as std::str::FromStr>::Err;

const BOOK_SEARCH_BASE: &str = "https://www.google.com/search";

/// Book search URL for the given details.
///
/// # Errors
/// Returns error if the base URL fails to parse.
pub fn book_search_url(details: &BookDetails) -> Result<Url, UrlParseError> {
    Url::parse_with_params(
        BOOK_SEARCH_BASE,
        [("tbm", "bks"), ("q", details.search_query().as_str())],
    )
}

/// Opens `url` in the default browser.
///
/// # Errors
/// Returns error if no browser could be launched.
pub fn open_url(url: &str) -> Result<(), opener::OpenError> {
    debug!(%url, "Opening link");
    opener::open_browser(url)
}
