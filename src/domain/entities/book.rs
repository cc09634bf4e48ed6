//! Scientific book entities.

use serde::{Deserialize, Serialize};

/// A recommended reference book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    /// Book title.
    pub title: String,
    /// Author line.
    pub author: String,
    /// Short description.
    pub description: String,
}

impl Book {
    /// Creates a new book.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            description: description.into(),
        }
    }
}

/// A book together with its generated summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetails {
    /// The summarized book.
    #[serde(flatten)]
    pub book: Book,
    /// Generated summary.
    pub summary: String,
}

impl BookDetails {
    /// Creates details for a book.
    #[must_use]
    pub fn new(book: Book, summary: impl Into<String>) -> Self {
        Self {
            book,
            summary: summary.into(),
        }
    }

    /// Query used to look the book up online.
    #[must_use]
    pub fn search_query(&self) -> String {
        format!("intitle:{} inauthor:{}", self.book.title, self.book.author)
    }
}
