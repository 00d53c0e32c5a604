use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default page size, matching the catalog UI.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// 1-based page cursor with a fixed page size.
///
/// Invariant: `page` stays within `[1, max(1, ceil(view_len / page_size))]`.
/// Controllers must reclamp after every filter/sort change since the view
/// may shrink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub page: usize,
    pub page_size: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self { page: 1, page_size }
    }

    /// Total pages for a view of `view_len` items (never zero).
    pub fn total_pages(&self, view_len: usize) -> usize {
        if self.page_size == 0 {
            return 1;
        }
        view_len.div_ceil(self.page_size).max(1)
    }

    /// Clamp the current page back into range for a view of `view_len`.
    pub fn clamp_to(&mut self, view_len: usize) {
        self.page = self.page.clamp(1, self.total_pages(view_len));
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// How the current page is laid out by the display layer. Rendering is a
/// pure function of (page, view mode); the core only carries the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => Err(Error::UnknownToken {
                kind: "view mode",
                value: other.to_string(),
            }),
        }
    }
}
