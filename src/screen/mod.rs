//! Restaurant-discovery screen session.
//!
//! Holds the fetched list, the search text, the applied filters and the
//! filter modal draft. Every change to search text or applied filters
//! re-derives the display list from the full list; nothing is re-fetched.

mod intent;
mod reducer;
mod session;
mod state;

pub use intent::ScreenIntent;
pub use reducer::ScreenReducer;
pub use session::ScreenSession;
pub use state::{FilterModal, ListView, LoadStatus, ScreenState};
