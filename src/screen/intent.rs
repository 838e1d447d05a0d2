use crate::business::Business;
use crate::filter::{CuisineFilter, PriceFilter, SortKey};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ScreenIntent {
    FetchStarted,
    FetchSucceeded { businesses: Vec<Business> },
    FetchFailed { message: String },
    /// Search box contents changed. Applied immediately, no debounce.
    SearchChanged { text: String },
    OpenFilters,
    SelectSort(SortKey),
    SelectCuisine(CuisineFilter),
    SelectPrice(PriceFilter),
    /// Commit the draft filters and close the modal.
    ApplyFilters,
    /// Close the modal, discarding the draft.
    CloseFilters,
}

impl Intent for ScreenIntent {}
