//! List-only entities: articles and conferences.

use serde::{Deserialize, Serialize};

/// A journal article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article title.
    pub title: String,
    /// Author line.
    pub authors: String,
    /// Journal name.
    pub journal: String,
    /// Short summary.
    pub summary: String,
    /// Link to the article.
    pub url: String,
}

/// A conference or exhibition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conference {
    /// Event name.
    pub name: String,
    /// Location.
    pub location: String,
    /// Date, as free text.
    pub date: String,
    /// Short description.
    pub description: String,
    /// Event website.
    pub url: String,
}
