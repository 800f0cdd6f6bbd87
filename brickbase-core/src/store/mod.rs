//! Embedded document store
//!
//! Collections of schemaless JSON documents keyed by opaque string ids,
//! held in memory behind an `RwLock` and written through to one
//! JSON-lines file per collection. This is the single shared resource
//! of the system: there is no client-side locking, so two concurrent
//! merge-writes to the same document interleave silently (last write
//! wins per merged field).
//!
//! There are no multi-document transactions. Cross-entity effects (such
//! as the builder project-count recompute in the repository layer) are
//! separate round trips and may race.

pub mod cursor;
pub mod persistence;
pub mod watch;

pub use cursor::PageCursor;
pub use persistence::FileStorage;
pub use watch::{Snapshot, Subscription};

use std::cmp::Reverse;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde_json::Value;

/// A schemaless document: a JSON object
pub type Document = serde_json::Map<String, Value>;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("document '{id}' not found in collection '{collection}'")]
    NotFound { collection: String, id: String },

    #[error("invalid page cursor: {0}")]
    InvalidCursor(String),

    #[error("persistence error: {0}")]
    Persistence(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// One page of an ordered listing
#[derive(Debug)]
pub struct Page {
    pub items: Vec<(String, Document)>,
    /// `None` once the listing is exhausted
    pub next_cursor: Option<String>,
}

/// The document store
pub struct DocumentStore {
    collections: RwLock<HashMap<String, HashMap<String, Document>>>,
    storage: Option<FileStorage>,
    watchers: watch::WatchRegistry,
}

impl DocumentStore {
    /// Open a store backed by the given data directory, loading every
    /// collection file found there.
    pub fn open(data_dir: impl AsRef<Path>) -> StoreResult<Self> {
        let storage = FileStorage::open(data_dir)?;
        let collections = storage.load_all()?;
        Ok(Self {
            collections: RwLock::new(collections),
            storage: Some(storage),
            watchers: watch::WatchRegistry::default(),
        })
    }

    /// Open a purely in-memory store (tests and ephemeral tooling)
    pub fn in_memory() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
            storage: None,
            watchers: watch::WatchRegistry::default(),
        }
    }

    /// Whole-document write: create or replace. A failed write-through
    /// rolls the in-memory change back; memory never diverges from disk.
    pub fn put(&self, collection: &str, id: &str, doc: Document) -> StoreResult<()> {
        let mut collections = self.write_guard();
        let previous =
            collections.entry(collection.to_string()).or_default().insert(id.to_string(), doc);

        if let Err(err) = self.commit(collection, &collections) {
            if let Some(docs) = collections.get_mut(collection) {
                match previous {
                    Some(doc) => {
                        docs.insert(id.to_string(), doc);
                    }
                    None => {
                        docs.remove(id);
                    }
                }
            }
            return Err(err);
        }
        Ok(())
    }

    /// Field-level merge-write: keys present in `partial` overwrite,
    /// unset keys are preserved. Fails if the document does not exist;
    /// a failed write-through restores the previous document.
    pub fn merge(&self, collection: &str, id: &str, partial: Document) -> StoreResult<()> {
        let mut collections = self.write_guard();
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        let previous = doc.clone();
        for (key, value) in partial {
            doc.insert(key, value);
        }

        if let Err(err) = self.commit(collection, &collections) {
            if let Some(doc) = collections.get_mut(collection).and_then(|docs| docs.get_mut(id)) {
                *doc = previous;
            }
            return Err(err);
        }
        Ok(())
    }

    /// Point read by id
    pub fn get(&self, collection: &str, id: &str) -> Option<Document> {
        let collections = self.read_guard();
        collections.get(collection).and_then(|docs| docs.get(id)).cloned()
    }

    /// Equality filter capped to one result, evaluated in listing order
    /// (first match wins). Backs slug lookup; slug uniqueness is not
    /// enforced at write time.
    pub fn find_first(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Option<(String, Document)> {
        self.sorted_snapshot(collection)
            .into_iter()
            .find(|(_, doc)| doc.get(field) == Some(value))
    }

    /// Hard delete. Deleting an absent document is a no-op; a failed
    /// write-through reinstates the document.
    pub fn delete(&self, collection: &str, id: &str) -> StoreResult<()> {
        let mut collections = self.write_guard();
        let Some(removed) = collections.get_mut(collection).and_then(|docs| docs.remove(id))
        else {
            return Ok(());
        };

        if let Err(err) = self.commit(collection, &collections) {
            if let Some(docs) = collections.get_mut(collection) {
                docs.insert(id.to_string(), removed);
            }
            return Err(err);
        }
        Ok(())
    }

    /// Full single-pass read of a collection in listing order. Used by
    /// the search mirror sync; assumes the collection fits in memory.
    pub fn scan(&self, collection: &str) -> Vec<(String, Document)> {
        self.sorted_snapshot(collection)
    }

    /// Cursor-paged read, forward only. `filter` is an optional field
    /// equality constraint (public listings filter on `is_active`).
    pub fn page(
        &self,
        collection: &str,
        filter: Option<(&str, &Value)>,
        page_size: usize,
        after: Option<&str>,
    ) -> StoreResult<Page> {
        let mut items: Vec<(String, Document)> = self
            .sorted_snapshot(collection)
            .into_iter()
            .filter(|(_, doc)| match filter {
                Some((field, value)) => doc.get(field) == Some(value),
                None => true,
            })
            .collect();

        if let Some(token) = after {
            let cursor = PageCursor::decode(token, collection)?;
            let cursor_key = order_key_raw(&cursor.create_time, &cursor.id);
            // Keep only items strictly past the cursor position; a
            // deleted cursor item still yields the correct remainder.
            items.retain(|(id, doc)| order_key(id, doc) > cursor_key);
        }

        items.truncate(page_size);

        // A full page always carries a cursor; exhaustion is signaled
        // by the following short or empty page, not by this one.
        let next_cursor = if !items.is_empty() && items.len() == page_size {
            items.last().map(|(id, doc)| {
                let create_time =
                    doc.get("create_time").and_then(|v| v.as_str()).unwrap_or_default();
                PageCursor::new(collection, create_time, id).encode()
            })
        } else {
            None
        };

        Ok(Page { items, next_cursor })
    }

    /// Subscribe to live snapshots of a collection, truncated to an
    /// optional window size. Dropping the handle releases the stream.
    pub fn subscribe(&self, collection: &str, window: Option<usize>) -> Subscription {
        self.watchers.subscribe(collection, window)
    }

    fn read_guard(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, HashMap<String, Document>>> {
        self.collections.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_guard(
        &self,
    ) -> std::sync::RwLockWriteGuard<'_, HashMap<String, HashMap<String, Document>>> {
        self.collections.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Persist and broadcast a committed mutation. Runs under the write
    /// lock so subscription delivery order matches commit order.
    fn commit(
        &self,
        collection: &str,
        collections: &HashMap<String, HashMap<String, Document>>,
    ) -> StoreResult<()> {
        let mut snapshot: Vec<(String, Document)> = collections
            .get(collection)
            .map(|docs| docs.iter().map(|(id, doc)| (id.clone(), doc.clone())).collect())
            .unwrap_or_default();
        sort_listing(&mut snapshot);

        if let Some(storage) = &self.storage {
            storage.persist_collection(collection, &snapshot)?;
        }

        self.watchers.notify(collection, Arc::new(snapshot));
        Ok(())
    }

    fn sorted_snapshot(&self, collection: &str) -> Vec<(String, Document)> {
        let collections = self.read_guard();
        let mut items: Vec<(String, Document)> = collections
            .get(collection)
            .map(|docs| docs.iter().map(|(id, doc)| (id.clone(), doc.clone())).collect())
            .unwrap_or_default();
        drop(collections);
        sort_listing(&mut items);
        items
    }
}

/// Listing order: creation time descending, id ascending as tiebreak.
/// Documents without a parseable `create_time` sort last.
type OrderKey = (Reverse<Option<DateTime<Utc>>>, String);

fn created_at(doc: &Document) -> Option<DateTime<Utc>> {
    doc.get("create_time")
        .and_then(|v| v.as_str())
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|t| t.with_timezone(&Utc))
}

fn order_key(id: &str, doc: &Document) -> OrderKey {
    (Reverse(created_at(doc)), id.to_string())
}

fn order_key_raw(create_time: &str, id: &str) -> OrderKey {
    let parsed = DateTime::parse_from_rfc3339(create_time).ok().map(|t| t.with_timezone(&Utc));
    (Reverse(parsed), id.to_string())
}

fn sort_listing(items: &mut [(String, Document)]) {
    items.sort_by(|a, b| order_key(&a.0, &a.1).cmp(&order_key(&b.0, &b.1)));
}
