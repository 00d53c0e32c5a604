use chrono::Utc;
use shelfview_types::{Item, ItemDraft, ItemId, ItemPatch};

use crate::{KvStore, Result, snapshot};

/// What the startup read of a collection's snapshot found.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
    pub malformed: bool,
}

/// In-memory item sequence persisted as one snapshot per collection key.
///
/// Every mutating call synchronously re-persists the full collection.
/// A persist write failure is logged and execution continues on the
/// in-memory state; no store operation is fatal to the process.
pub struct CollectionStore {
    kv: KvStore,
    key: String,
    items: Vec<Item>,
    load_report: LoadReport,
}

impl CollectionStore {
    /// Load a collection from its snapshot key. A missing or malformed
    /// snapshot degrades to an empty collection; item-level decode
    /// failures drop only the offending records (see `load_report`).
    pub fn load(kv: KvStore, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let (items, load_report) = match kv.get(&key)? {
            Some(raw) => {
                let outcome = snapshot::decode(&raw);
                let report = LoadReport {
                    loaded: outcome.items.len(),
                    skipped: outcome.skipped,
                    malformed: outcome.malformed,
                };
                (outcome.items, report)
            }
            None => (Vec::new(), LoadReport::default()),
        };

        Ok(Self {
            kv,
            key,
            items,
            load_report,
        })
    }

    pub fn load_report(&self) -> LoadReport {
        self.load_report
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Assign a fresh identifier and insert at the front of the sequence.
    /// Text fields are stored trimmed.
    pub fn add(&mut self, draft: ItemDraft) -> Item {
        let item = Item {
            id: ItemId::new(),
            name: draft.name.trim().to_string(),
            description: draft.description.trim().to_string(),
            category: draft.category,
            price: draft.price,
            rating: draft.rating,
            in_stock: draft.in_stock,
            completed: false,
            priority: draft.priority,
            image_url: draft.image_url,
            created_at: Utc::now(),
            completed_at: None,
        };
        self.items.insert(0, item.clone());
        self.persist();
        item
    }

    /// Merge a partial field change into an existing item. Returns `false`
    /// if the id is unknown.
    pub fn update(&mut self, id: ItemId, patch: &ItemPatch) -> bool {
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            return false;
        };
        item.apply_patch(patch);
        self.persist();
        true
    }

    /// Flip completion state; returns the new state, or `None` if the id
    /// is unknown.
    pub fn toggle(&mut self, id: ItemId) -> Option<bool> {
        let item = self.items.iter_mut().find(|i| i.id == id)?;
        item.completed = !item.completed;
        item.completed_at = item.completed.then(Utc::now);
        let completed = item.completed;
        self.persist();
        Some(completed)
    }

    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Remove all completed items; returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|i| !i.completed);
        let removed = before - self.items.len();
        if removed > 0 {
            self.persist();
        }
        removed
    }

    /// Remove every item; returns how many were removed.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        self.persist();
        removed
    }

    /// Current contents in storage order (newest first).
    pub fn all(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Resolve a unique id prefix to a full id. More than one match is an
    /// error; no match is `None`.
    pub fn find_by_prefix(&self, prefix: &str) -> Result<Option<ItemId>> {
        let needle = prefix.to_lowercase();
        let mut matches = self
            .items
            .iter()
            .filter(|i| i.id.to_string().starts_with(&needle))
            .map(|i| i.id);

        match (matches.next(), matches.next()) {
            (Some(id), None) => Ok(Some(id)),
            (Some(_), Some(_)) => Err(crate::Error::AmbiguousPrefix(prefix.to_string())),
            (None, _) => Ok(None),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&self) {
        let result = snapshot::encode(&self.items).and_then(|raw| self.kv.set(&self.key, &raw));
        if let Err(err) = result {
            // Unrecoverable but non-fatal: keep serving the in-memory state.
            eprintln!(
                "Warning: failed to persist collection '{}': {}",
                self.key, err
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn empty_store() -> CollectionStore {
        CollectionStore::load(KvStore::open_in_memory().unwrap(), "todos").unwrap()
    }

    #[test]
    fn test_add_assigns_unique_ids_and_prepends() {
        let mut store = empty_store();
        let first = store.add(ItemDraft::new("first"));
        let second = store.add(ItemDraft::new("second"));

        assert_ne!(first.id, second.id);
        let names: Vec<&str> = store.all().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["second", "first"]);
    }

    #[test]
    fn test_add_stores_trimmed_text() {
        let mut store = empty_store();
        let mut draft = ItemDraft::new("  Buy milk  ");
        draft.description = " two liters \n".to_string();
        let added = store.add(draft);

        assert_eq!(added.name, "Buy milk");
        assert_eq!(added.description, "two liters");
        assert_eq!(store.get(added.id).unwrap().name, "Buy milk");
    }

    #[test]
    fn test_update_trims_patched_text() {
        let mut store = empty_store();
        let added = store.add(ItemDraft::new("Chair"));

        let patch = ItemPatch {
            name: Some("  Office Chair ".to_string()),
            ..Default::default()
        };
        assert!(store.update(added.id, &patch));
        assert_eq!(store.get(added.id).unwrap().name, "Office Chair");
    }

    #[test]
    fn test_update_merges_patch() {
        let mut store = empty_store();
        let mut draft = ItemDraft::new("Chair");
        draft.price = Some(449.99);
        let added = store.add(draft);

        let patch = ItemPatch {
            price: Some(399.99),
            ..Default::default()
        };
        assert!(store.update(added.id, &patch));

        let item = store.get(added.id).unwrap();
        assert_eq!(item.name, "Chair");
        assert_eq!(item.price, Some(399.99));

        // Exactly one item carries that identifier.
        assert_eq!(store.all().iter().filter(|i| i.id == added.id).count(), 1);
    }

    #[test]
    fn test_update_unknown_id_reports_not_found() {
        let mut store = empty_store();
        assert!(!store.update(ItemId::new(), &ItemPatch::default()));
    }

    #[test]
    fn test_toggle_sets_and_clears_completed_at() {
        let mut store = empty_store();
        let added = store.add(ItemDraft::new("task"));

        assert_eq!(store.toggle(added.id), Some(true));
        assert!(store.get(added.id).unwrap().completed_at.is_some());

        assert_eq!(store.toggle(added.id), Some(false));
        assert!(store.get(added.id).unwrap().completed_at.is_none());

        assert_eq!(store.toggle(ItemId::new()), None);
    }

    #[test]
    fn test_remove_semantics() {
        let mut store = empty_store();
        let added = store.add(ItemDraft::new("task"));

        assert!(store.remove(added.id));
        assert!(store.all().iter().all(|i| i.id != added.id));

        // Removing an absent id reports not-found and changes nothing.
        let len = store.len();
        assert!(!store.remove(added.id));
        assert_eq!(store.len(), len);
    }

    #[test]
    fn test_clear_completed_and_clear_all() {
        let mut store = empty_store();
        let a = store.add(ItemDraft::new("a"));
        store.add(ItemDraft::new("b"));
        store.toggle(a.id);

        assert_eq!(store.clear_completed(), 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.clear_all(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_find_by_prefix() {
        let mut store = empty_store();
        let added = store.add(ItemDraft::new("task"));
        let full = added.id.to_string();

        assert_eq!(store.find_by_prefix(&full[..8]).unwrap(), Some(added.id));
        assert_eq!(store.find_by_prefix("zzzzzzzz").unwrap(), None);
    }

    #[test]
    fn test_persists_across_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shelfview.db");

        let added = {
            let kv = KvStore::open(&path).unwrap();
            let mut store = CollectionStore::load(kv, "todos").unwrap();
            let added = store.add(ItemDraft::new("persisted"));
            store.toggle(added.id);
            added
        };

        let kv = KvStore::open(&path).unwrap();
        let store = CollectionStore::load(kv, "todos").unwrap();
        assert_eq!(store.len(), 1);
        let item = store.get(added.id).unwrap();
        assert_eq!(item.name, "persisted");
        assert!(item.completed);
    }

    #[test]
    fn test_collections_are_isolated_by_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shelfview.db");

        {
            let kv = KvStore::open(&path).unwrap();
            let mut todos = CollectionStore::load(kv, "todos").unwrap();
            todos.add(ItemDraft::new("a todo"));
        }

        let kv = KvStore::open(&path).unwrap();
        let products = CollectionStore::load(kv, "products").unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_malformed_snapshot_loads_empty() {
        let kv = KvStore::open_in_memory().unwrap();
        kv.set("todos", "{{{ definitely not json").unwrap();

        let store = CollectionStore::load(kv, "todos").unwrap();
        assert!(store.is_empty());
        assert!(store.load_report().malformed);
    }
}
