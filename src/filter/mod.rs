//! Local filter/sort engine over the fetched business list.
//!
//! The engine is a pure function of the full list, the search text and the
//! applied [`FilterState`]; it never touches the network.

mod engine;
pub mod options;
mod state;

pub use engine::apply;
pub use options::{FilterOption, OptionGroup};
pub use state::{CuisineFilter, FilterParseError, FilterState, PriceFilter, SortKey, ALL};
