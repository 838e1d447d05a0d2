use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::business::PriceTier;

/// Value used by the cuisine and price selectors to mean "no filter".
pub const ALL: &str = "all";

/// Errors produced when parsing selector values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterParseError {
    #[error("Unknown sort key '{0}' (expected relevance, rating or review_count)")]
    SortKey(String),

    #[error("Unknown price tier '{0}' (expected all, $, $$, $$$ or $$$$)")]
    Price(String),

    #[error("Cuisine selector must not be empty")]
    EmptyCuisine,
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Keep the upstream order.
    #[default]
    Relevance,
    /// Highest rating first.
    Rating,
    /// Most reviewed first.
    ReviewCount,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Rating => "rating",
            SortKey::ReviewCount => "review_count",
        }
    }
}

impl FromStr for SortKey {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(SortKey::Relevance),
            "rating" => Ok(SortKey::Rating),
            "review_count" => Ok(SortKey::ReviewCount),
            other => Err(FilterParseError::SortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cuisine selector: either everything or a category alias fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CuisineFilter {
    #[default]
    All,
    /// Matches any business with a category alias containing this value.
    Alias(String),
}

impl FromStr for CuisineFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(FilterParseError::EmptyCuisine),
            ALL => Ok(CuisineFilter::All),
            alias => Ok(CuisineFilter::Alias(alias.to_string())),
        }
    }
}

impl fmt::Display for CuisineFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CuisineFilter::All => f.write_str(ALL),
            CuisineFilter::Alias(alias) => f.write_str(alias),
        }
    }
}

/// Price selector: either everything or one exact tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PriceFilter {
    #[default]
    All,
    Tier(PriceTier),
}

impl FromStr for PriceFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            return Ok(PriceFilter::All);
        }
        PriceTier::from_symbol(s)
            .map(PriceFilter::Tier)
            .ok_or_else(|| FilterParseError::Price(s.to_string()))
    }
}

impl fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceFilter::All => f.write_str(ALL),
            PriceFilter::Tier(tier) => write!(f, "{}", tier),
        }
    }
}

/// User-selected sort/cuisine/price criteria.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FilterState {
    pub sort_by: SortKey,
    pub cuisine: CuisineFilter,
    pub price: PriceFilter,
}

impl FilterState {
    /// True when no selector narrows or reorders the list.
    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_round_trips_option_values() {
        for key in [SortKey::Relevance, SortKey::Rating, SortKey::ReviewCount] {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert_eq!(
            "stars".parse::<SortKey>(),
            Err(FilterParseError::SortKey("stars".to_string()))
        );
    }

    #[test]
    fn test_cuisine_parsing() {
        assert_eq!("all".parse::<CuisineFilter>().unwrap(), CuisineFilter::All);
        assert_eq!(
            "ital".parse::<CuisineFilter>().unwrap(),
            CuisineFilter::Alias("ital".to_string())
        );
        assert_eq!(
            "".parse::<CuisineFilter>(),
            Err(FilterParseError::EmptyCuisine)
        );
    }

    #[test]
    fn test_price_parsing() {
        assert_eq!("all".parse::<PriceFilter>().unwrap(), PriceFilter::All);
        assert_eq!(
            "$$".parse::<PriceFilter>().unwrap(),
            PriceFilter::Tier(PriceTier::Two)
        );
        assert!("cheap".parse::<PriceFilter>().is_err());
        assert_eq!(PriceFilter::Tier(PriceTier::Four).to_string(), "$$$$");
    }

    #[test]
    fn test_default_state() {
        let state = FilterState::default();
        assert!(state.is_default());
        assert_eq!(state.sort_by, SortKey::Relevance);
        assert_eq!(state.cuisine.to_string(), "all");
        assert_eq!(state.price.to_string(), "all");
    }
}
