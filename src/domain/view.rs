//! Named views and their navigation table.

use std::fmt;

/// One screen the catalog can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// Hub tiles, category chips, search box and device list.
    #[default]
    List,
    /// Details of the selected device.
    Details,
    /// Scientific book list.
    Books,
    /// Summary of the selected book.
    BookDetails,
    /// Global article list.
    Articles,
    /// Conference and exhibition list.
    Conferences,
    /// Student resources.
    StudentHouse,
    /// Stage picker for lectures.
    LecturesStages,
    /// Lectures of the selected stage.
    LecturesList,
}

/// Single back target per view. `List` is the root and has none.
const PARENTS: [(View, View); 8] = [
    (View::Details, View::List),
    (View::Books, View::List),
    (View::BookDetails, View::Books),
    (View::Articles, View::List),
    (View::Conferences, View::List),
    (View::StudentHouse, View::List),
    (View::LecturesStages, View::StudentHouse),
    (View::LecturesList, View::LecturesStages),
];

/// Data slot owned by a view and cleared when leaving it backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Selected device.
    SelectedDevice,
    /// Fetched device details.
    DeviceDetails,
    /// Fetched book list.
    Books,
    /// Selected book.
    SelectedBook,
    /// Fetched book summary.
    BookDetails,
    /// Fetched article list.
    Articles,
    /// Fetched conference list.
    Conferences,
    /// Selected lecture stage.
    SelectedStage,
}

impl View {
    /// Every view.
    pub const ALL: [Self; 9] = [
        Self::List,
        Self::Details,
        Self::Books,
        Self::BookDetails,
        Self::Articles,
        Self::Conferences,
        Self::StudentHouse,
        Self::LecturesStages,
        Self::LecturesList,
    ];

    /// The view that back navigation leads to.
    #[must_use]
    pub fn parent(self) -> Option<Self> {
        PARENTS
            .iter()
            .find(|(child, _)| *child == self)
            .map(|(_, parent)| *parent)
    }

    /// Data slots cleared when this view is exited through back navigation.
    #[must_use]
    pub const fn owned_slots(self) -> &'static [Slot] {
        match self {
            Self::Details => &[Slot::SelectedDevice, Slot::DeviceDetails],
            Self::Books => &[Slot::Books],
            Self::BookDetails => &[Slot::SelectedBook, Slot::BookDetails],
            Self::Articles => &[Slot::Articles],
            Self::Conferences => &[Slot::Conferences],
            Self::LecturesList => &[Slot::SelectedStage],
            Self::List | Self::StudentHouse | Self::LecturesStages => &[],
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::List => "list",
            Self::Details => "details",
            Self::Books => "books",
            Self::BookDetails => "bookDetails",
            Self::Articles => "articles",
            Self::Conferences => "conferences",
            Self::StudentHouse => "studentHouse",
            Self::LecturesStages => "lecturesStages",
            Self::LecturesList => "lecturesList",
        };
        f.write_str(name)
    }
}

/// Tiles shown at the top of the `List` view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HubEntry {
    /// Opens the book list.
    ScientificBooks,
    /// Opens the article list.
    GlobalArticles,
    /// Opens the conference list.
    ConferencesAndExhibitions,
    /// Opens the student house.
    StudentHouse,
}

impl HubEntry {
    /// Tiles in display order.
    pub const ALL: [Self; 4] = [
        Self::ScientificBooks,
        Self::GlobalArticles,
        Self::ConferencesAndExhibitions,
        Self::StudentHouse,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(View::Details, View::List ; "details")]
    #[test_case(View::Books, View::List ; "books")]
    #[test_case(View::BookDetails, View::Books ; "book_details")]
    #[test_case(View::Articles, View::List ; "articles")]
    #[test_case(View::Conferences, View::List ; "conferences")]
    #[test_case(View::StudentHouse, View::List ; "student_house")]
    #[test_case(View::LecturesStages, View::StudentHouse ; "lecture_stages")]
    #[test_case(View::LecturesList, View::LecturesStages ; "lecture_list")]
    fn test_parent(view: View, parent: View) {
        assert_eq!(view.parent(), Some(parent));
    }

    #[test]
    fn test_list_is_root() {
        assert_eq!(View::List.parent(), None);
    }

    #[test]
    fn test_every_non_root_view_reaches_list() {
        for view in View::ALL {
            let mut current = view;
            let mut steps = 0;
            while let Some(parent) = current.parent() {
                current = parent;
                steps += 1;
                assert!(steps <= View::ALL.len());
            }
            assert_eq!(current, View::List);
        }
    }

    #[test]
    fn test_book_details_owns_selection_and_summary() {
        assert_eq!(
            View::BookDetails.owned_slots(),
            &[Slot::SelectedBook, Slot::BookDetails]
        );
        assert!(View::List.owned_slots().is_empty());
    }
}
