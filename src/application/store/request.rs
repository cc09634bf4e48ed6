//! Request identifiers for content fetches.

use std::fmt;

use crate::domain::entities::{Book, Device};
use crate::domain::i18n::Language;
use crate::domain::view::View;

/// Identifies one issued fetch. Later requests compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    /// Returns the underlying sequence number.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic source of [`RequestId`]s.
#[derive(Debug, Default)]
pub struct RequestSequence {
    last: u64,
}

impl RequestSequence {
    /// Issues the next identifier.
    pub fn issue(&mut self) -> RequestId {
        self.last += 1;
        RequestId(self.last)
    }
}

/// What a fetch asks the content service for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchKind {
    /// Device catalog.
    Categories,
    /// Details of one device.
    DeviceDetails(Device),
    /// Book list.
    Books,
    /// Summary of one book.
    BookDetails(Book),
    /// Article list.
    Articles,
    /// Conference list.
    Conferences,
}

impl FetchKind {
    /// View shown once the fetch succeeds.
    #[must_use]
    pub const fn target_view(&self) -> View {
        match self {
            Self::Categories => View::List,
            Self::DeviceDetails(_) => View::Details,
            Self::Books => View::Books,
            Self::BookDetails(_) => View::BookDetails,
            Self::Articles => View::Articles,
            Self::Conferences => View::Conferences,
        }
    }
}

/// Side effect requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCommand {
    /// Identifier the response must carry back.
    pub request: RequestId,
    /// What to fetch.
    pub kind: FetchKind,
    /// Language of the requested content.
    pub language: Language,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_strictly_increasing() {
        let mut sequence = RequestSequence::default();
        let first = sequence.issue();
        let second = sequence.issue();
        let third = sequence.issue();

        assert!(first < second && second < third);
        assert_eq!(first.as_u64(), 1);
        assert_eq!(format!("{third}"), "#3");
    }
}
