use crate::client::BusinessSource;
use crate::mvi::Reducer;
use crate::screen::intent::ScreenIntent;
use crate::screen::reducer::ScreenReducer;
use crate::screen::state::ScreenState;

/// Owns one screen's state for its lifetime.
///
/// All mutation goes through [`ScreenSession::dispatch`]; the fetch runs at
/// most once per session.
#[derive(Debug, Default)]
pub struct ScreenSession {
    state: ScreenState,
    fetched: bool,
}

impl ScreenSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: ScreenIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = ScreenReducer::reduce(state, intent);
    }

    /// Run the session's single search and seed the full list.
    ///
    /// Later calls return without touching the network.
    pub async fn load<S: BusinessSource + ?Sized>(
        &mut self,
        source: &S,
        term: &str,
        location: &str,
    ) {
        if self.fetched {
            tracing::debug!("Session already fetched, skipping load");
            return;
        }
        self.fetched = true;

        self.dispatch(ScreenIntent::FetchStarted);
        match source.try_search(term, location).await {
            Ok(businesses) => {
                tracing::info!(count = businesses.len(), term, location, "Loaded businesses");
                self.dispatch(ScreenIntent::FetchSucceeded { businesses });
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    kind = e.error_type(),
                    term,
                    location,
                    "Error fetching businesses"
                );
                self.dispatch(ScreenIntent::FetchFailed {
                    message: e.to_string(),
                });
            }
        }
    }
}
