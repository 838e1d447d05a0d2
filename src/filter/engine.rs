use std::cmp::Ordering;

use crate::business::Business;
use crate::filter::state::{CuisineFilter, FilterState, PriceFilter, SortKey};

/// Derive the display list from the full fetched list.
///
/// Runs the name, cuisine and price filters in that order, then sorts.
/// The result only ever contains clones of entries from `full`, and
/// `Vec::sort_by` is stable so fetch order breaks ties.
pub fn apply(full: &[Business], search_text: &str, filters: &FilterState) -> Vec<Business> {
    let needle = search_text.to_lowercase();

    let mut display: Vec<Business> = full
        .iter()
        .filter(|b| matches_name(b, &needle))
        .filter(|b| matches_cuisine(b, &filters.cuisine))
        .filter(|b| matches_price(b, &filters.price))
        .cloned()
        .collect();

    sort_in_place(&mut display, filters.sort_by);
    display
}

/// `needle` must already be lowercased.
fn matches_name(business: &Business, needle: &str) -> bool {
    needle.is_empty() || business.name.to_lowercase().contains(needle)
}

// Substring on the alias, not set membership: "ital" matches "italian".
fn matches_cuisine(business: &Business, cuisine: &CuisineFilter) -> bool {
    match cuisine {
        CuisineFilter::All => true,
        CuisineFilter::Alias(wanted) => business
            .categories
            .iter()
            .any(|c| c.alias.contains(wanted.as_str())),
    }
}

fn matches_price(business: &Business, price: &PriceFilter) -> bool {
    match price {
        PriceFilter::All => true,
        PriceFilter::Tier(tier) => business.price.is_known() && business.price == *tier,
    }
}

fn sort_in_place(list: &mut [Business], key: SortKey) {
    match key {
        SortKey::Relevance => {}
        SortKey::Rating => list.sort_by(|a, b| rating_desc(a.rating, b.rating)),
        SortKey::ReviewCount => list.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
    }
}

// Descending with NaN (unrated) after every known rating; NaNs tie.
fn rating_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => b.total_cmp(&a),
        (true, true) => Ordering::Equal,
        (nan_a, nan_b) => nan_a.cmp(&nan_b),
    }
}
