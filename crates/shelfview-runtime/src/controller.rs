use serde::Serialize;
use shelfview_engine::{CollectionStats, collection_stats, compute_view, paginate};
use shelfview_store::CollectionStore;
use shelfview_types::{
    Action, FilterState, Item, ItemId, PageState, SortKey, ViewMode,
};

use crate::{Config, Error, Result};

/// Everything the display layer needs to draw one recompute cycle.
#[derive(Debug, Clone, Serialize)]
pub struct ViewFrame {
    /// Items on the current page, in view order.
    pub items: Vec<Item>,
    pub page: usize,
    pub total_pages: usize,
    /// Size of the full derived view (across all pages).
    pub matching: usize,
    /// Size of the whole collection, before filtering.
    pub total: usize,
    pub view_mode: ViewMode,
    pub stats: CollectionStats,
}

/// Result of one dispatched action, for user-facing feedback.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added(Item),
    Edited(ItemId),
    Toggled { id: ItemId, completed: bool },
    Deleted(ItemId),
    NotFound(ItemId),
    Cleared(usize),
    ViewChanged,
}

/// Owns one collection's store and view state and funnels every user
/// action through a single typed dispatch.
///
/// The pipeline is synchronous and one-directional: action -> state
/// change -> recompute derived view -> reclamp page. Each dispatch runs
/// to completion before the next is accepted; there is no background
/// computation.
pub struct Controller {
    store: CollectionStore,
    filters: FilterState,
    sort: SortKey,
    page: PageState,
    view_mode: ViewMode,
    view: Vec<Item>,
}

impl Controller {
    pub fn new(store: CollectionStore, config: &Config) -> Self {
        let mut controller = Self {
            store,
            filters: FilterState::default(),
            sort: config.display.sort,
            page: PageState::new(config.display.page_size),
            view_mode: config.display.view,
            view: Vec::new(),
        };
        controller.recompute();
        controller
    }

    /// Apply one action: validate first (rejections leave all state
    /// untouched), mutate, then recompute the derived view and reclamp
    /// the page.
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome> {
        let outcome = match action {
            Action::Add(draft) => {
                shelfview_engine::validate_draft(&draft)?;
                let item = self.store.add(draft);
                Outcome::Added(item)
            }
            Action::Edit(id, patch) => {
                shelfview_engine::validate_patch(&patch)?;
                if self.store.update(id, &patch) {
                    Outcome::Edited(id)
                } else {
                    Outcome::NotFound(id)
                }
            }
            Action::Toggle(id) => match self.store.toggle(id) {
                Some(completed) => Outcome::Toggled { id, completed },
                None => Outcome::NotFound(id),
            },
            Action::Delete(id) => {
                if self.store.remove(id) {
                    Outcome::Deleted(id)
                } else {
                    Outcome::NotFound(id)
                }
            }
            Action::SetFilter(change) => {
                self.filters.apply(change);
                self.page.page = 1;
                Outcome::ViewChanged
            }
            Action::SetSort(sort) => {
                self.sort = sort;
                self.page.page = 1;
                Outcome::ViewChanged
            }
            Action::SetPage(page) => {
                let total = self.page.total_pages(self.view.len());
                if page < 1 || page > total {
                    return Err(Error::InvalidAction(format!(
                        "page {} is out of range (1-{})",
                        page, total
                    )));
                }
                self.page.page = page;
                Outcome::ViewChanged
            }
            Action::NextPage => {
                let total = self.page.total_pages(self.view.len());
                if self.page.page < total {
                    self.page.page += 1;
                }
                Outcome::ViewChanged
            }
            Action::PrevPage => {
                if self.page.page > 1 {
                    self.page.page -= 1;
                }
                Outcome::ViewChanged
            }
            Action::SetViewMode(mode) => {
                self.view_mode = mode;
                Outcome::ViewChanged
            }
            Action::ResetFilters => {
                self.filters.reset();
                self.page.page = 1;
                Outcome::ViewChanged
            }
            Action::ClearCompleted => Outcome::Cleared(self.store.clear_completed()),
            Action::ClearAll => Outcome::Cleared(self.store.clear_all()),
        };

        self.recompute();
        Ok(outcome)
    }

    /// Slice the current page out of the cached view.
    pub fn frame(&self) -> Result<ViewFrame> {
        let (page_items, total_pages) =
            paginate(&self.view, self.page.page, self.page.page_size)?;

        Ok(ViewFrame {
            items: page_items.to_vec(),
            page: self.page.page,
            total_pages,
            matching: self.view.len(),
            total: self.store.len(),
            view_mode: self.view_mode,
            stats: collection_stats(self.store.all()),
        })
    }

    pub fn store(&self) -> &CollectionStore {
        &self.store
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    fn recompute(&mut self) {
        self.view = compute_view(self.store.all(), &self.filters, self.sort);
        // The view may have shrunk; the page invariant must hold before
        // the next frame() call.
        self.page.clamp_to(self.view.len());
    }
}
