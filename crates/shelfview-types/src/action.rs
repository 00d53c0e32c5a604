use crate::{FilterChange, ItemDraft, ItemId, ItemPatch, SortKey, ViewMode};

/// A discrete user action against a collection view.
///
/// Each variant maps to exactly one store or view-state mutation, followed
/// by one recompute-and-render cycle. This replaces the string-keyed
/// handler dispatch of the page scripts with a single typed entry point.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Insert a new item at the front of the store.
    Add(ItemDraft),
    /// Flip an item's completion state.
    Toggle(ItemId),
    /// Remove an item by identifier.
    Delete(ItemId),
    /// Merge a partial field change into an existing item.
    Edit(ItemId, ItemPatch),
    /// Change one named filter selection (resets to page 1).
    SetFilter(FilterChange),
    /// Change the active comparator (resets to page 1).
    SetSort(SortKey),
    /// Jump to an explicit page. Out-of-range pages are rejected.
    SetPage(usize),
    /// Advance one page, saturating at the last page.
    NextPage,
    /// Go back one page, saturating at page 1.
    PrevPage,
    /// Switch the display layout flag.
    SetViewMode(ViewMode),
    /// Restore every filter selection to its default.
    ResetFilters,
    /// Remove all completed items.
    ClearCompleted,
    /// Remove every item in the collection.
    ClearAll,
}
