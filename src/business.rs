//! Business records returned by the upstream search API.
//!
//! Records are decoded leniently: optional fields that are missing or
//! explicitly `null` in the JSON body fall back to empty/zero/unknown so
//! one sparse record does not fail the whole page.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A single searchable business (restaurant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    /// Opaque upstream identifier, unique within a result set.
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    /// Category tags in upstream order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub review_count: u32,
    #[serde(default)]
    pub price: PriceTier,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Business {
    /// Title of the first category, used as the cuisine label on cards.
    pub fn primary_cuisine(&self) -> Option<&str> {
        self.categories.first().map(|c| c.title.as_str())
    }
}

/// Category tag attached to a business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display title (e.g., "Italian").
    pub title: String,
    /// Machine-readable alias (e.g., "italian").
    pub alias: String,
}

/// Symbolic price tier.
///
/// Absent or unrecognized upstream values decode to `Unknown`, which never
/// equals a concrete tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum PriceTier {
    One,
    Two,
    Three,
    Four,
    #[default]
    Unknown,
}

impl PriceTier {
    /// All concrete tiers, cheapest first.
    pub const CONCRETE: [PriceTier; 4] = [
        PriceTier::One,
        PriceTier::Two,
        PriceTier::Three,
        PriceTier::Four,
    ];

    /// Parse a tier symbol. Returns `None` for anything but `$`..`$$$$`.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "$" => Some(PriceTier::One),
            "$$" => Some(PriceTier::Two),
            "$$$" => Some(PriceTier::Three),
            "$$$$" => Some(PriceTier::Four),
            _ => None,
        }
    }

    /// Tier symbol, or `None` for `Unknown`.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            PriceTier::One => Some("$"),
            PriceTier::Two => Some("$$"),
            PriceTier::Three => Some("$$$"),
            PriceTier::Four => Some("$$$$"),
            PriceTier::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PriceTier::Unknown)
    }
}

impl From<Option<String>> for PriceTier {
    fn from(value: Option<String>) -> Self {
        value
            .as_deref()
            .and_then(PriceTier::from_symbol)
            .unwrap_or(PriceTier::Unknown)
    }
}

impl From<PriceTier> for Option<String> {
    fn from(tier: PriceTier) -> Self {
        tier.symbol().map(str::to_string)
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol().unwrap_or("?"))
    }
}
