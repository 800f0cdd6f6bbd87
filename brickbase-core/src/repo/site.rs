//! Footer-link repository: row-at-a-time edits over a grouped document

use std::ops::Deref;
use std::sync::Arc;

use uuid::Uuid;

use crate::model::{FooterLink, FooterLinks};
use crate::store::DocumentStore;

use super::{RepoError, RepoResult, Repository};

pub struct FooterLinksRepo {
    base: Repository<FooterLinks>,
}

impl FooterLinksRepo {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { base: Repository::new(store) }
    }

    /// Insert or replace a single row of a link group. Rows carry their
    /// own ids; a row arriving without one gets a fresh id assigned.
    pub fn upsert_row(&self, group_id: &str, mut row: FooterLink) -> RepoResult<String> {
        let mut group = self.require(group_id)?;

        if row.id.is_empty() {
            row.id = Uuid::new_v4().to_string();
        }
        let row_id = row.id.clone();

        match group.rows.iter_mut().find(|r| r.id == row.id) {
            Some(existing) => *existing = row,
            None => group.rows.push(row),
        }

        self.save_rows(group_id, &group)?;
        Ok(row_id)
    }

    /// Remove a single row. Unknown row ids are a no-op, matching the
    /// store's lenient delete.
    pub fn delete_row(&self, group_id: &str, row_id: &str) -> RepoResult<()> {
        let mut group = self.require(group_id)?;
        group.rows.retain(|r| r.id != row_id);
        self.save_rows(group_id, &group)
    }

    fn require(&self, group_id: &str) -> RepoResult<FooterLinks> {
        self.base.get_by_id(group_id)?.ok_or_else(|| RepoError::NotFound {
            collection: "footer_links",
            id: group_id.to_string(),
        })
    }

    fn save_rows(&self, group_id: &str, group: &FooterLinks) -> RepoResult<()> {
        let rows = serde_json::to_value(&group.rows).map_err(crate::store::StoreError::Json)?;
        let mut patch = crate::store::Document::new();
        patch.insert("rows".to_string(), rows);
        self.base.update(group_id, patch)
    }
}

impl Deref for FooterLinksRepo {
    type Target = Repository<FooterLinks>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
