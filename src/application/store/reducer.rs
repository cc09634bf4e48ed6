//! Catalog state transitions.

use tracing::{debug, warn};

use crate::application::store::intent::Intent;
use crate::application::store::request::{FetchCommand, FetchKind, RequestId};
use crate::application::store::state::CatalogState;
use crate::domain::entities::flatten_devices;
use crate::domain::errors::ContentError;
use crate::domain::filter::filter_categories;
use crate::domain::i18n::{TextKey, tr};
use crate::domain::view::{HubEntry, Slot, View};

/// Applies an intent and returns the fetch it starts, if any.
///
/// Completion intents are only applied when their request is the one the
/// state is waiting for; anything else is a stale response and is dropped.
pub fn reduce(state: &mut CatalogState, intent: Intent) -> Option<FetchCommand> {
    if let Some(request) = intent.request()
        && state.awaiting != Some(request)
    {
        debug!(
            %request,
            awaiting = ?state.awaiting.map(RequestId::as_u64),
            "Discarding stale response"
        );
        return None;
    }

    match intent {
        Intent::Mount => {
            state.reset();
            Some(begin_fetch(state, FetchKind::Categories))
        }
        Intent::LanguageChanged(language) => {
            state.language = language;
            state.reset();
            Some(begin_fetch(state, FetchKind::Categories))
        }
        Intent::SelectHub(entry) => match entry {
            HubEntry::ScientificBooks => Some(begin_fetch(state, FetchKind::Books)),
            HubEntry::GlobalArticles => Some(begin_fetch(state, FetchKind::Articles)),
            HubEntry::ConferencesAndExhibitions => {
                Some(begin_fetch(state, FetchKind::Conferences))
            }
            HubEntry::StudentHouse => {
                state.view = View::StudentHouse;
                None
            }
        },
        Intent::SelectDevice(device) => Some(begin_fetch(state, FetchKind::DeviceDetails(device))),
        Intent::SelectBook(book) => Some(begin_fetch(state, FetchKind::BookDetails(book))),
        Intent::OpenLectures => {
            if state.view == View::StudentHouse {
                state.view = View::LecturesStages;
            }
            None
        }
        Intent::SelectStage(stage) => {
            if state.view == View::LecturesStages {
                state.selected_stage = Some(stage);
                state.view = View::LecturesList;
            }
            None
        }
        Intent::SetFilter(filter) => {
            state.active_filter = filter;
            None
        }
        Intent::SetSearch(query) => {
            state.search_query = query;
            None
        }
        Intent::Back => {
            go_back(state);
            None
        }
        Intent::Retry => retry(state),

        Intent::CategoriesLoaded { result, .. } => {
            if let Some(categories) = settle(state, result) {
                let categories = filter_categories(categories);
                state.all_devices = flatten_devices(&categories);
                state.categories = categories;
                state.view = View::List;
            }
            None
        }
        Intent::DeviceDetailsLoaded { result, .. } => {
            if let Some(details) = settle(state, result) {
                state.device_details = Some(details);
                state.view = View::Details;
            }
            None
        }
        Intent::BooksLoaded { result, .. } => {
            if let Some(books) = settle(state, result) {
                state.books = books;
                state.view = View::Books;
            }
            None
        }
        Intent::BookDetailsLoaded { result, .. } => {
            if let Some(details) = settle(state, result) {
                state.book_details = Some(details);
                state.view = View::BookDetails;
            }
            None
        }
        Intent::ArticlesLoaded { result, .. } => {
            if let Some(articles) = settle(state, result) {
                state.articles = articles;
                state.view = View::Articles;
            }
            None
        }
        Intent::ConferencesLoaded { result, .. } => {
            if let Some(conferences) = settle(state, result) {
                state.conferences = conferences;
                state.view = View::Conferences;
            }
            None
        }
    }
}

fn begin_fetch(state: &mut CatalogState, kind: FetchKind) -> FetchCommand {
    match &kind {
        FetchKind::Categories => {}
        FetchKind::DeviceDetails(device) => {
            state.selected_device = Some(device.clone());
            state.clear_slot(Slot::DeviceDetails);
            state.clear_slot(Slot::BookDetails);
        }
        FetchKind::Books => state.clear_slot(Slot::Books),
        FetchKind::BookDetails(book) => {
            state.selected_book = Some(book.clone());
            state.clear_slot(Slot::BookDetails);
            state.clear_slot(Slot::DeviceDetails);
        }
        FetchKind::Articles => state.clear_slot(Slot::Articles),
        FetchKind::Conferences => state.clear_slot(Slot::Conferences),
    }

    let request = state.requests.issue();
    state.awaiting = Some(request);
    state.pending = Some(kind.target_view());
    state.loading = true;
    state.error = None;

    debug!(%request, kind = ?kind, view = %state.view, "Fetch started");

    FetchCommand {
        request,
        kind,
        language: state.language,
    }
}

/// Finishes the awaited fetch; returns the payload on success.
///
/// On failure the pending target is kept so a retry knows what to reload.
fn settle<T>(state: &mut CatalogState, result: Result<T, ContentError>) -> Option<T> {
    state.loading = false;
    state.awaiting = None;
    match result {
        Ok(value) => {
            state.pending = None;
            Some(value)
        }
        Err(e) => {
            warn!(error = %e, pending = %state.pending_view(), "Content fetch failed");
            state.error = Some(tr(state.language, TextKey::ErrorMessage).to_string());
            None
        }
    }
}

fn go_back(state: &mut CatalogState) {
    // The root catalog load has nowhere to go back to.
    if state.view.parent().is_none() && state.pending_view() == state.view {
        return;
    }

    let pending = state.pending.take();
    state.awaiting = None;
    state.loading = false;
    state.error = None;

    // A pending or failed fetch is left first; the visible view stays.
    if let Some(target) = pending
        && target != state.view
    {
        for slot in target.owned_slots() {
            state.clear_slot(*slot);
        }
        debug!(abandoned = %target, view = %state.view, "Abandoning fetch");
        return;
    }

    let Some(parent) = state.view.parent() else {
        return;
    };
    for slot in state.view.owned_slots() {
        state.clear_slot(*slot);
    }
    debug!(from = %state.view, to = %parent, "Navigating back");
    state.view = parent;
}

fn retry(state: &mut CatalogState) -> Option<FetchCommand> {
    state.error.as_ref()?;

    let kind = match (
        state.pending_view(),
        state.selected_book.clone(),
        state.selected_device.clone(),
    ) {
        (View::BookDetails, Some(book), _) => FetchKind::BookDetails(book),
        (View::Books, ..) => FetchKind::Books,
        (View::Articles, ..) => FetchKind::Articles,
        (View::Conferences, ..) => FetchKind::Conferences,
        (View::Details, _, Some(device)) => FetchKind::DeviceDetails(device),
        _ => FetchKind::Categories,
    };
    debug!(kind = ?kind, "Retrying fetch");
    Some(begin_fetch(state, kind))
}
