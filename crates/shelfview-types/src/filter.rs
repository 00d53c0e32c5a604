use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Item, Result};

/// Category selector. `All` passes everything; `Is` matches exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Is(String),
}

impl CategoryFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Is(name) => item.category.as_deref() == Some(name.as_str()),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Is(name) => write!(f, "{}", name),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(CategoryFilter::All),
            other => Ok(CategoryFilter::Is(other.to_string())),
        }
    }
}

/// Price bracket selector. Brackets mirror the catalog UI: upper bounds are
/// inclusive, so "51-100" covers (50, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceRange {
    #[default]
    All,
    UpTo50,
    From51To100,
    From101To200,
    From201To500,
    Above500,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        match self {
            PriceRange::All => true,
            PriceRange::UpTo50 => price <= 50.0,
            PriceRange::From51To100 => price > 50.0 && price <= 100.0,
            PriceRange::From101To200 => price > 100.0 && price <= 200.0,
            PriceRange::From201To500 => price > 200.0 && price <= 500.0,
            PriceRange::Above500 => price > 500.0,
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            PriceRange::All => true,
            // An unpriced item can't fall inside any bracket.
            _ => item.price.is_some_and(|p| self.contains(p)),
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PriceRange::All => "all",
            PriceRange::UpTo50 => "0-50",
            PriceRange::From51To100 => "51-100",
            PriceRange::From101To200 => "101-200",
            PriceRange::From201To500 => "201-500",
            PriceRange::Above500 => "501+",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PriceRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(PriceRange::All),
            "0-50" => Ok(PriceRange::UpTo50),
            "51-100" => Ok(PriceRange::From51To100),
            "101-200" => Ok(PriceRange::From101To200),
            "201-500" => Ok(PriceRange::From201To500),
            "501+" => Ok(PriceRange::Above500),
            other => Err(Error::UnknownToken {
                kind: "price range",
                value: other.to_string(),
            }),
        }
    }
}

/// Minimum-rating selector ("4+" style).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingFilter {
    #[default]
    All,
    AtLeast(f64),
}

impl RatingFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            RatingFilter::All => true,
            RatingFilter::AtLeast(min) => item.rating.is_some_and(|r| r >= *min),
        }
    }
}

impl fmt::Display for RatingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingFilter::All => write!(f, "all"),
            RatingFilter::AtLeast(min) => write!(f, "{}+", min),
        }
    }
}

impl FromStr for RatingFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "all" {
            return Ok(RatingFilter::All);
        }
        let numeric = s.strip_suffix('+').unwrap_or(s);
        match numeric.parse::<f64>() {
            Ok(min) if (0.0..=5.0).contains(&min) => Ok(RatingFilter::AtLeast(min)),
            _ => Err(Error::UnknownToken {
                kind: "rating",
                value: s.to_string(),
            }),
        }
    }
}

/// Completion-status selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => !item.completed,
            StatusFilter::Completed => item.completed,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatusFilter::All => "all",
            StatusFilter::Pending => "pending",
            StatusFilter::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(StatusFilter::All),
            "pending" => Ok(StatusFilter::Pending),
            "completed" => Ok(StatusFilter::Completed),
            other => Err(Error::UnknownToken {
                kind: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// The active set of named predicate selections.
///
/// Absence of a selection (the default for each field) passes everything.
/// Predicates combine as a logical AND; the free-text search matches
/// case-insensitively across name OR description.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default)]
    pub price: PriceRange,
    #[serde(default)]
    pub rating: RatingFilter,
    #[serde(default)]
    pub status: StatusFilter,
}

impl FilterState {
    /// True if any predicate would exclude at least some items.
    pub fn is_active(&self) -> bool {
        !self.search.is_empty()
            || self.category != CategoryFilter::All
            || self.price != PriceRange::All
            || self.rating != RatingFilter::All
            || self.status != StatusFilter::All
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn apply(&mut self, change: FilterChange) {
        match change {
            FilterChange::Search(term) => self.search = term,
            FilterChange::Category(category) => self.category = category,
            FilterChange::Price(price) => self.price = price,
            FilterChange::Rating(rating) => self.rating = rating,
            FilterChange::Status(status) => self.status = status,
        }
    }
}

/// A single named filter selection change.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChange {
    Search(String),
    Category(CategoryFilter),
    Price(PriceRange),
    Rating(RatingFilter),
    Status(StatusFilter),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_bracket_boundaries() {
        assert!(PriceRange::UpTo50.contains(50.0));
        assert!(!PriceRange::UpTo50.contains(50.01));
        assert!(PriceRange::From51To100.contains(50.01));
        assert!(PriceRange::From51To100.contains(100.0));
        assert!(!PriceRange::From51To100.contains(100.5));
        assert!(PriceRange::Above500.contains(500.01));
        assert!(!PriceRange::Above500.contains(500.0));
    }

    #[test]
    fn test_price_range_tokens() {
        for token in ["all", "0-50", "51-100", "101-200", "201-500", "501+"] {
            let parsed: PriceRange = token.parse().unwrap();
            assert_eq!(parsed.to_string(), token);
        }
        assert!("50-51".parse::<PriceRange>().is_err());
    }

    #[test]
    fn test_rating_filter_tokens() {
        assert_eq!("4+".parse::<RatingFilter>().unwrap(), RatingFilter::AtLeast(4.0));
        assert_eq!("3.5+".parse::<RatingFilter>().unwrap(), RatingFilter::AtLeast(3.5));
        assert_eq!("all".parse::<RatingFilter>().unwrap(), RatingFilter::All);
        assert!("6+".parse::<RatingFilter>().is_err());
        assert!("great".parse::<RatingFilter>().is_err());
    }

    #[test]
    fn test_status_tokens() {
        assert_eq!("pending".parse::<StatusFilter>().unwrap(), StatusFilter::Pending);
        assert!("done".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_default_filter_state_is_inactive() {
        let state = FilterState::default();
        assert!(!state.is_active());

        let mut state = FilterState::default();
        state.apply(FilterChange::Status(StatusFilter::Completed));
        assert!(state.is_active());
        state.reset();
        assert!(!state.is_active());
    }
}
