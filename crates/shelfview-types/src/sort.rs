use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Comparator selected for ordering the derived view.
///
/// `Storage` keeps the store's insertion order (todo lists render newest
/// first because the store inserts at the front). Name comparison is
/// case-insensitive; numeric sorts are stable, so equal keys preserve
/// their pre-sort relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Storage,
    // Ascending variants persist under the bare UI token so config files
    // round-trip the same strings the CLI accepts and prints.
    #[serde(rename = "name")]
    NameAsc,
    NameDesc,
    #[serde(rename = "price")]
    PriceAsc,
    PriceDesc,
    #[serde(rename = "rating")]
    RatingAsc,
    RatingDesc,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Storage => "storage",
            SortKey::NameAsc => "name",
            SortKey::NameDesc => "name-desc",
            SortKey::PriceAsc => "price",
            SortKey::PriceDesc => "price-desc",
            SortKey::RatingAsc => "rating",
            SortKey::RatingDesc => "rating-desc",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "storage" => Ok(SortKey::Storage),
            "name" => Ok(SortKey::NameAsc),
            "name-desc" => Ok(SortKey::NameDesc),
            "price" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            "rating" => Ok(SortKey::RatingAsc),
            "rating-desc" => Ok(SortKey::RatingDesc),
            other => Err(Error::UnknownToken {
                kind: "sort key",
                value: other.to_string(),
            }),
        }
    }
}
