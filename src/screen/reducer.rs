use crate::filter::FilterState;
use crate::mvi::Reducer;
use crate::screen::intent::ScreenIntent;
use crate::screen::state::{FilterModal, LoadStatus, ScreenState};

pub struct ScreenReducer;

impl Reducer for ScreenReducer {
    type State = ScreenState;
    type Intent = ScreenIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScreenIntent::FetchStarted => {
                state.status = LoadStatus::Loading;
                state.businesses.clear();
                state.display.clear();
            }
            ScreenIntent::FetchSucceeded { businesses } => {
                state.status = LoadStatus::Loaded;
                state.businesses = businesses;
                state.refresh_display();
            }
            ScreenIntent::FetchFailed { message } => {
                state.status = LoadStatus::Failed { message };
                state.businesses.clear();
                state.display.clear();
            }
            ScreenIntent::SearchChanged { text } => {
                state.search_text = text;
                state.refresh_display();
            }
            ScreenIntent::OpenFilters => {
                state.modal = FilterModal::Open {
                    draft: state.filters.clone(),
                };
            }
            ScreenIntent::SelectSort(sort_by) => {
                edit_draft(&mut state, |draft| draft.sort_by = sort_by);
            }
            ScreenIntent::SelectCuisine(cuisine) => {
                edit_draft(&mut state, |draft| draft.cuisine = cuisine);
            }
            ScreenIntent::SelectPrice(price) => {
                edit_draft(&mut state, |draft| draft.price = price);
            }
            ScreenIntent::ApplyFilters => {
                if let FilterModal::Open { draft } = std::mem::take(&mut state.modal) {
                    state.filters = draft;
                    state.refresh_display();
                }
            }
            ScreenIntent::CloseFilters => {
                state.modal = FilterModal::Hidden;
            }
        }
        state
    }
}

// Selections made while the modal is hidden are dropped.
fn edit_draft(state: &mut ScreenState, edit: impl FnOnce(&mut FilterState)) {
    if let FilterModal::Open { draft } = &mut state.modal {
        edit(draft);
    }
}
