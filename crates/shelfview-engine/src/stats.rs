use serde::Serialize;
use shelfview_types::Item;

/// Aggregated completion statistics for a whole collection (not the
/// filtered view).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CollectionStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Rounded percentage of completed items; 0 for an empty collection.
    pub progress_percent: u8,
}

pub fn collection_stats(items: &[Item]) -> CollectionStats {
    let total = items.len();
    let completed = items.iter().filter(|i| i.completed).count();
    let pending = total - completed;
    let progress_percent = if total > 0 {
        ((completed as f64 / total as f64) * 100.0).round() as u8
    } else {
        0
    };

    CollectionStats {
        total,
        completed,
        pending,
        progress_percent,
    }
}
