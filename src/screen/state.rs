use crate::business::Business;
use crate::filter::{self, FilterState};
use crate::mvi::UiState;

/// Outcome of the session's single fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Failed {
        message: String,
    },
    Loaded,
}

/// Filter modal visibility. While open, edits go to `draft` and only reach
/// the applied filters on confirmation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterModal {
    #[default]
    Hidden,
    Open {
        draft: FilterState,
    },
}

/// What the list area should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListView<'a> {
    Loading,
    Error { message: &'a str },
    /// Fetch succeeded but nothing survives the current search/filters.
    Empty,
    Populated(&'a [Business]),
}

/// Session-scoped screen state.
///
/// Fields are only written by the reducer; `display` is always derived
/// from `businesses`, `search_text` and `filters`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScreenState {
    pub(super) status: LoadStatus,
    pub(super) businesses: Vec<Business>,
    pub(super) display: Vec<Business>,
    pub(super) search_text: String,
    pub(super) filters: FilterState,
    pub(super) modal: FilterModal,
}

impl UiState for ScreenState {}

impl ScreenState {
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Full list from the most recent fetch.
    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    /// Filtered/sorted subset currently shown.
    pub fn display(&self) -> &[Business] {
        &self.display
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Filters currently applied to the display list.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn modal(&self) -> &FilterModal {
        &self.modal
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(self.modal, FilterModal::Open { .. })
    }

    /// Filters being edited in the open modal.
    pub fn draft(&self) -> Option<&FilterState> {
        match &self.modal {
            FilterModal::Open { draft } => Some(draft),
            FilterModal::Hidden => None,
        }
    }

    pub fn view(&self) -> ListView<'_> {
        match &self.status {
            LoadStatus::Loading => ListView::Loading,
            LoadStatus::Failed { message } => ListView::Error {
                message: message.as_str(),
            },
            LoadStatus::Loaded if self.display.is_empty() => ListView::Empty,
            LoadStatus::Loaded => ListView::Populated(&self.display),
        }
    }

    pub(super) fn refresh_display(&mut self) {
        self.display = filter::apply(&self.businesses, &self.search_text, &self.filters);
    }
}
