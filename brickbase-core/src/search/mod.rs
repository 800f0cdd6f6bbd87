//! External search index mirror
//!
//! The public search experience never queries the document store; it
//! queries a hosted index that only gets refreshed when the mirror sync
//! is run by hand. [`SearchIndex`] abstracts the index backend so the
//! hosted client and the in-memory implementation (tests, dev mode) are
//! interchangeable.

pub mod client;
pub mod mirror;

pub use client::HostedSearchClient;
pub use mirror::sync_all;

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

pub type SearchResult<T> = Result<T, SearchError>;

#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    #[error("search index rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("search index unreachable: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Flat property record as stored in the external index, keyed by the
/// source document id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub object_id: String,
    pub title: String,
    pub slug: String,
    pub location: String,
    pub builder_id: Option<String>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub is_active: bool,
}

/// One ranked hit from a free-text query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub object_id: String,
    pub title: String,
    pub slug: String,
}

/// Abstract search index backend
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Upsert a batch of records keyed by `object_id`. Existing records
    /// with the same key are replaced; records absent from the batch
    /// are left untouched (deletions are never reconciled here).
    async fn bulk_upsert(&self, records: &[PropertyRecord]) -> SearchResult<()>;

    /// Free-text query returning at most `limit` ranked hits
    async fn query(&self, text: &str, limit: usize) -> SearchResult<Vec<SearchHit>>;
}

/// In-memory index used by tests and as the dev-mode default when no
/// hosted index is configured
#[derive(Default)]
pub struct MemoryIndex {
    records: RwLock<HashMap<String, PropertyRecord>>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SearchIndex for MemoryIndex {
    async fn bulk_upsert(&self, records: &[PropertyRecord]) -> SearchResult<()> {
        let mut stored = self.records.write().unwrap_or_else(|e| e.into_inner());
        for record in records {
            stored.insert(record.object_id.clone(), record.clone());
        }
        Ok(())
    }

    async fn query(&self, text: &str, limit: usize) -> SearchResult<Vec<SearchHit>> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let stored = self.records.read().unwrap_or_else(|e| e.into_inner());
        let mut hits: Vec<(&PropertyRecord, usize)> = stored
            .values()
            .filter_map(|record| {
                // Title matches rank above location/slug matches.
                if record.title.to_lowercase().contains(&needle) {
                    Some((record, 0))
                } else if record.slug.to_lowercase().contains(&needle)
                    || record.location.to_lowercase().contains(&needle)
                {
                    Some((record, 1))
                } else {
                    None
                }
            })
            .collect();
        hits.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.object_id.cmp(&b.0.object_id)));

        Ok(hits
            .into_iter()
            .take(limit)
            .map(|(record, _)| SearchHit {
                object_id: record.object_id.clone(),
                title: record.title.clone(),
                slug: record.slug.clone(),
            })
            .collect())
    }
}
