//! Write-once repositories for captured form submissions
//!
//! Leads expose create, list, point read and delete; there is no update
//! path by design.

use std::sync::Arc;

use crate::model::{BrochureLead, Contact, Entity, JobApplication, Resume};
use crate::store::{DocumentStore, Subscription};

use super::{ListPage, RepoResult, Repository};

pub struct WriteOnceRepo<T: Entity> {
    base: Repository<T>,
}

impl<T: Entity> WriteOnceRepo<T> {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { base: Repository::new(store) }
    }

    pub fn create(&self, entity: T) -> RepoResult<String> {
        self.base.create(entity)
    }

    pub fn get_by_id(&self, id: &str) -> RepoResult<Option<T>> {
        self.base.get_by_id(id)
    }

    pub fn list(&self, page_size: usize, cursor: Option<&str>) -> RepoResult<ListPage<T>> {
        self.base.list_admin(page_size, cursor)
    }

    pub fn delete(&self, id: &str) -> RepoResult<()> {
        self.base.delete(id)
    }

    pub fn subscribe(&self, window: Option<usize>) -> Subscription {
        self.base.subscribe(window)
    }
}

pub type ContactRepo = WriteOnceRepo<Contact>;
pub type JobApplicationRepo = WriteOnceRepo<JobApplication>;
pub type BrochureLeadRepo = WriteOnceRepo<BrochureLead>;
pub type ResumeRepo = WriteOnceRepo<Resume>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leads_are_created_listed_and_deleted() {
        let repo = ContactRepo::new(Arc::new(DocumentStore::in_memory()));

        let id = repo
            .create(Contact {
                name: "Dana".to_string(),
                email: "dana@example.com".to_string(),
                message: "Interested in Skyline Tower".to_string(),
                ..Contact::default()
            })
            .unwrap();

        let listed = repo.list(10, None).unwrap();
        assert_eq!(listed.items.len(), 1);
        assert_eq!(listed.items[0].name, "Dana");

        repo.delete(&id).unwrap();
        assert!(repo.get_by_id(&id).unwrap().is_none());
    }
}
