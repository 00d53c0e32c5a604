use std::collections::HashSet;

use shelfview_types::Item;

use crate::Result;

/// Result of reading one persisted snapshot.
#[derive(Debug, Default)]
pub struct DecodeOutcome {
    pub items: Vec<Item>,
    /// Records inside a well-formed array that failed to decode (or
    /// repeated an id already seen) and were dropped.
    pub skipped: usize,
    /// The snapshot wasn't a JSON array at all; the collection degrades
    /// to empty.
    pub malformed: bool,
}

/// Serialize the full collection as one JSON array of flat records.
pub fn encode(items: &[Item]) -> Result<String> {
    Ok(serde_json::to_string(items)?)
}

/// Read a snapshot with item-level recovery.
///
/// A snapshot that isn't a JSON array degrades to an empty collection.
/// Inside a well-formed array, records that fail to decode are dropped
/// individually and the valid ones kept; a record whose id duplicates an
/// earlier one is dropped too (ids are unique within a store). Missing
/// optional fields take their defaults via the `Item` serde attributes.
pub fn decode(raw: &str) -> DecodeOutcome {
    let values: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(_) => {
            return DecodeOutcome {
                malformed: true,
                ..Default::default()
            };
        }
    };

    let mut outcome = DecodeOutcome::default();
    let mut seen = HashSet::new();
    for value in values {
        match serde_json::from_value::<Item>(value) {
            Ok(item) if seen.insert(item.id) => outcome.items.push(item),
            _ => outcome.skipped += 1,
        }
    }
    outcome
}
