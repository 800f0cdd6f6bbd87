//! Admin account repository
//!
//! Identity is a generated immutable id; the email is an ordinary
//! attribute whose uniqueness is enforced by an equality query before
//! every write that touches it. Changing an email never requires
//! re-keying the document.

use std::ops::Deref;
use std::sync::Arc;

use serde_json::Value;

use crate::model::{Admin, Entity};
use crate::store::{Document, DocumentStore};

use super::{RepoError, RepoResult, Repository};

pub struct AdminRepo {
    base: Repository<Admin>,
}

impl AdminRepo {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { base: Repository::new(store) }
    }

    pub fn create(&self, admin: Admin) -> RepoResult<String> {
        self.ensure_email_free(&admin.email, None)?;
        self.base.create(admin)
    }

    pub fn update(&self, id: &str, partial: Document) -> RepoResult<()> {
        if let Some(email) = partial.get("email").and_then(Value::as_str) {
            self.ensure_email_free(email, Some(id))?;
        }
        self.base.update(id, partial)
    }

    /// Look up an admin by email (sign-in support for the external
    /// identity provider's callback)
    pub fn find_by_email(&self, email: &str) -> RepoResult<Option<Admin>> {
        let value = Value::String(email.to_string());
        match self.base.store().find_first(Admin::COLLECTION, "email", &value) {
            Some((id, doc)) => Ok(Some(super::from_document(&id, doc)?)),
            None => Ok(None),
        }
    }

    fn ensure_email_free(&self, email: &str, excluding: Option<&str>) -> RepoResult<()> {
        let value = Value::String(email.to_string());
        if let Some((existing_id, _)) = self.base.store().find_first(Admin::COLLECTION, "email", &value)
        {
            if excluding != Some(existing_id.as_str()) {
                return Err(RepoError::Duplicate { field: "email", value: email.to_string() });
            }
        }
        Ok(())
    }
}

impl Deref for AdminRepo {
    type Target = Repository<Admin>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn repo() -> AdminRepo {
        AdminRepo::new(Arc::new(DocumentStore::in_memory()))
    }

    fn admin(email: &str) -> Admin {
        Admin { email: email.to_string(), name: "Sam".to_string(), ..Admin::default() }
    }

    #[test]
    fn duplicate_email_is_rejected_on_create() {
        let admins = repo();
        admins.create(admin("ops@brickbase.dev")).unwrap();
        let err = admins.create(admin("ops@brickbase.dev")).unwrap_err();
        assert!(matches!(err, RepoError::Duplicate { field: "email", .. }));
    }

    #[test]
    fn email_change_keeps_the_id_stable() {
        let admins = repo();
        let id = admins.create(admin("old@brickbase.dev")).unwrap();

        admins.update(&id, json!({"email": "new@brickbase.dev"}).as_object().unwrap().clone())
            .unwrap();

        let updated = admins.get_by_id(&id).unwrap().unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.email, "new@brickbase.dev");
        assert!(admins.find_by_email("old@brickbase.dev").unwrap().is_none());
    }

    #[test]
    fn update_to_a_taken_email_is_rejected_but_own_email_is_fine() {
        let admins = repo();
        let first = admins.create(admin("a@brickbase.dev")).unwrap();
        admins.create(admin("b@brickbase.dev")).unwrap();

        let err = admins
            .update(&first, json!({"email": "b@brickbase.dev"}).as_object().unwrap().clone())
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate { .. }));

        // Re-saving the same email on the same admin is not a conflict.
        admins
            .update(&first, json!({"email": "a@brickbase.dev"}).as_object().unwrap().clone())
            .unwrap();
    }
}
