use super::intent::Intent;
use super::state::UiState;

/// Folds one intent into a screen state.
///
/// Implementations take the previous state by value and return the next one;
/// network calls and logging stay in the session that drives the reducer.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
