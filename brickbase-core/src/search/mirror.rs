//! Full-rewrite mirror sync from the property collection to the index
//!
//! Every run reads the whole `properties` collection in one pass and
//! bulk-upserts a flattened record per document. There is no delta
//! sync, no deletion reconciliation and no automatic trigger on writes:
//! a property deleted from the store keeps serving stale hits until the
//! next manual run. That staleness window is an accepted property of
//! the design, not a bug.

use crate::model::{Entity, Property};
use crate::store::{Document, DocumentStore};

use super::{PropertyRecord, SearchIndex, SearchResult};

/// Re-read the full property collection and rewrite the index.
/// Returns the number of records pushed.
pub async fn sync_all(store: &DocumentStore, index: &dyn SearchIndex) -> SearchResult<usize> {
    let documents = store.scan(Property::COLLECTION);

    let mut records = Vec::with_capacity(documents.len());
    for (id, doc) in &documents {
        records.push(flatten(id, doc));
    }

    index.bulk_upsert(&records).await?;
    log::info!("search mirror sync pushed {} record(s)", records.len());
    Ok(records.len())
}

/// Flatten a property document into its index record. Works on the raw
/// document so a partially malformed property still mirrors the fields
/// it has.
pub fn flatten(id: &str, doc: &Document) -> PropertyRecord {
    let text = |field: &str| {
        doc.get(field).and_then(|v| v.as_str()).unwrap_or_default().to_string()
    };

    PropertyRecord {
        object_id: id.to_string(),
        title: text("title"),
        slug: text("slug"),
        location: text("location"),
        builder_id: doc.get("builder_id").and_then(|v| v.as_str()).map(str::to_string),
        price_min: doc.get("price_min").and_then(|v| v.as_i64()),
        price_max: doc.get("price_max").and_then(|v| v.as_i64()),
        is_active: doc.get("is_active").and_then(|v| v.as_bool()).unwrap_or(false),
    }
}
