//! Typed repositories over the document store
//!
//! One generic [`Repository`] carries the CRUD contract shared by every
//! entity; entity-specific wrappers add the few behaviors that differ
//! (builder count recompute, admin email uniqueness, write-once leads,
//! footer-link row edits).
//!
//! Required-field validation happens here, before any store call; the
//! store itself enforces nothing.

pub mod admins;
pub mod builders;
pub mod leads;
pub mod properties;
pub mod site;

pub use admins::AdminRepo;
pub use builders::BuilderRepo;
pub use leads::{BrochureLeadRepo, ContactRepo, JobApplicationRepo, ResumeRepo, WriteOnceRepo};
pub use properties::PropertyRepo;
pub use site::FooterLinksRepo;

use std::marker::PhantomData;
use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::model::Entity;
use crate::store::{Document, DocumentStore, StoreError, Subscription};

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(thiserror::Error, Debug)]
pub enum RepoError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("duplicate {field}: '{value}' is already taken")]
    Duplicate { field: &'static str, value: String },

    #[error("no '{collection}' entry with id '{id}'")]
    NotFound { collection: &'static str, id: String },

    #[error("malformed '{collection}' document '{id}': {source}")]
    Malformed { collection: &'static str, id: String, source: serde_json::Error },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One page of typed listing results
#[derive(Debug)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<String>,
}

/// Generic CRUD repository for one entity collection
pub struct Repository<T: Entity> {
    store: Arc<DocumentStore>,
    _marker: PhantomData<T>,
}

impl<T: Entity> Repository<T> {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store, _marker: PhantomData }
    }

    pub fn store(&self) -> &Arc<DocumentStore> {
        &self.store
    }

    /// Create a new entry: validates required fields, assigns a fresh
    /// id and the audit stamps, then writes the whole document.
    pub fn create(&self, mut entity: T) -> RepoResult<String> {
        entity.validate().map_err(RepoError::MissingField)?;

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        entity.set_id(id.clone());
        entity.set_create_time(now);
        entity.set_update_time(now);

        let doc = to_document(&entity)?;
        self.store.put(T::COLLECTION, &id, doc)?;
        log::debug!("created {} '{}'", T::COLLECTION, id);
        Ok(id)
    }

    /// Look up by slug or id. For slug-carrying entities the slug
    /// equality query runs first, capped to one result; on zero results
    /// we fall back to an id point read. The fallback stays as two
    /// visible steps because slug uniqueness is not guaranteed by the
    /// store. Slug-less entities skip the probe and go straight to the
    /// id path.
    pub fn get(&self, id_or_slug: &str) -> RepoResult<Option<T>> {
        if T::SLUG_LOOKUP {
            let slug_value = Value::String(id_or_slug.to_string());
            if let Some((id, doc)) = self.store.find_first(T::COLLECTION, "slug", &slug_value) {
                return Ok(Some(from_document(&id, doc)?));
            }
        }

        self.get_by_id(id_or_slug)
    }

    /// Point read by id only
    pub fn get_by_id(&self, id: &str) -> RepoResult<Option<T>> {
        match self.store.get(T::COLLECTION, id) {
            Some(doc) => Ok(Some(from_document(id, doc)?)),
            None => Ok(None),
        }
    }

    /// Merge-write a partial update. `id` and `create_time` cannot be
    /// overwritten; `update_time` is refreshed.
    pub fn update(&self, id: &str, mut partial: Document) -> RepoResult<()> {
        partial.remove("id");
        partial.remove("create_time");
        partial.insert(
            "update_time".to_string(),
            serde_json::to_value(Utc::now()).map_err(StoreError::Json)?,
        );

        self.store.merge(T::COLLECTION, id, partial).map_err(|e| match e {
            StoreError::NotFound { .. } => {
                RepoError::NotFound { collection: T::COLLECTION, id: id.to_string() }
            }
            other => RepoError::Store(other),
        })
    }

    /// Hard delete, no cascade
    pub fn delete(&self, id: &str) -> RepoResult<()> {
        self.store.delete(T::COLLECTION, id)?;
        log::debug!("deleted {} '{}'", T::COLLECTION, id);
        Ok(())
    }

    /// Unfiltered admin listing, newest first
    pub fn list_admin(&self, page_size: usize, cursor: Option<&str>) -> RepoResult<ListPage<T>> {
        let page = self.store.page(T::COLLECTION, None, page_size, cursor)?;
        typed_page(page)
    }

    /// Public listing: `is_active == true` only, newest first
    pub fn list_public(&self, page_size: usize, cursor: Option<&str>) -> RepoResult<ListPage<T>> {
        let active = Value::Bool(true);
        let page =
            self.store.page(T::COLLECTION, Some(("is_active", &active)), page_size, cursor)?;
        typed_page(page)
    }

    /// Live admin subscription over this collection. The handle must be
    /// dropped when the consuming screen goes away.
    pub fn subscribe(&self, window: Option<usize>) -> Subscription {
        self.store.subscribe(T::COLLECTION, window)
    }
}

fn to_document<T: Entity>(entity: &T) -> RepoResult<Document> {
    let value = serde_json::to_value(entity).map_err(StoreError::Json)?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(RepoError::Store(StoreError::Persistence(format!(
            "entity for '{}' did not serialize to an object",
            T::COLLECTION
        )))),
    }
}

fn from_document<T: Entity>(id: &str, doc: Document) -> RepoResult<T> {
    serde_json::from_value(Value::Object(doc)).map_err(|source| RepoError::Malformed {
        collection: T::COLLECTION,
        id: id.to_string(),
        source,
    })
}

fn typed_page<T: Entity>(page: crate::store::Page) -> RepoResult<ListPage<T>> {
    let mut items = Vec::with_capacity(page.items.len());
    for (id, doc) in page.items {
        items.push(from_document(&id, doc)?);
    }
    Ok(ListPage { items, next_cursor: page.next_cursor })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Blog, Contact, Property};
    use serde_json::json;

    fn store() -> Arc<DocumentStore> {
        Arc::new(DocumentStore::in_memory())
    }

    fn property(title: &str, slug: &str, active: bool) -> Property {
        Property {
            title: title.to_string(),
            slug: slug.to_string(),
            location: "Downtown".to_string(),
            is_active: active,
            ..Property::default()
        }
    }

    fn patch(value: serde_json::Value) -> Document {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn create_then_get_returns_submitted_fields_plus_stamps() {
        let repo = Repository::<Property>::new(store());
        let id = repo.create(property("Skyline Tower", "skyline-tower", true)).unwrap();

        let fetched = repo.get_by_id(&id).unwrap().unwrap();
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.title, "Skyline Tower");
        assert_eq!(fetched.location, "Downtown");
        assert!(fetched.create_time.is_some());
        assert!(fetched.update_time.is_some());
    }

    #[test]
    fn create_rejects_missing_required_fields() {
        let repo = Repository::<Property>::new(store());
        let err = repo.create(property("", "no-title", true)).unwrap_err();
        assert!(matches!(err, RepoError::MissingField("title")));
    }

    #[test]
    fn update_merges_and_preserves_other_fields() {
        let repo = Repository::<Property>::new(store());
        let id = repo.create(property("Skyline Tower", "skyline-tower", true)).unwrap();

        repo.update(&id, patch(json!({"location": "Marina"}))).unwrap();

        let fetched = repo.get_by_id(&id).unwrap().unwrap();
        assert_eq!(fetched.location, "Marina");
        assert_eq!(fetched.title, "Skyline Tower");
        assert!(fetched.update_time >= fetched.create_time);
    }

    #[test]
    fn update_cannot_overwrite_identity_or_create_stamp() {
        let repo = Repository::<Property>::new(store());
        let id = repo.create(property("Skyline Tower", "skyline-tower", true)).unwrap();
        let before = repo.get_by_id(&id).unwrap().unwrap();

        repo.update(&id, patch(json!({"id": "hijacked", "create_time": null}))).unwrap();

        let after = repo.get_by_id(&id).unwrap().unwrap();
        assert_eq!(after.id, id);
        assert_eq!(after.create_time, before.create_time);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let repo = Repository::<Blog>::new(store());
        let err = repo.update("ghost", patch(json!({"title": "x"}))).unwrap_err();
        assert!(matches!(err, RepoError::NotFound { collection: "blogs", .. }));
    }

    #[test]
    fn delete_then_get_returns_none() {
        let repo = Repository::<Property>::new(store());
        let id = repo.create(property("Skyline Tower", "skyline-tower", true)).unwrap();
        repo.delete(&id).unwrap();
        assert!(repo.get_by_id(&id).unwrap().is_none());
    }

    #[test]
    fn slug_lookup_falls_back_to_id() {
        let repo = Repository::<Property>::new(store());
        let id = repo.create(property("Skyline Tower", "skyline-tower", true)).unwrap();

        let by_slug = repo.get("skyline-tower").unwrap().unwrap();
        assert_eq!(by_slug.id, id);

        // The generated uuid is not a slug of any document, so the
        // equality query misses and the id path must resolve it.
        let by_id = repo.get(&id).unwrap().unwrap();
        assert_eq!(by_id.slug, "skyline-tower");
    }

    #[test]
    fn slugless_entities_resolve_by_id_only() {
        let store = store();
        let repo = Repository::<Contact>::new(store.clone());
        let target = repo
            .create(Contact {
                name: "Dana".to_string(),
                email: "dana@example.com".to_string(),
                ..Contact::default()
            })
            .unwrap();

        // A stray "slug" field on another document must not hijack the
        // id lookup of a slug-less collection.
        let mut decoy = Document::new();
        decoy.insert("name".to_string(), json!("Decoy"));
        decoy.insert("email".to_string(), json!("decoy@example.com"));
        decoy.insert("slug".to_string(), json!(target.clone()));
        store.put("contacts", "decoy", decoy).unwrap();

        let fetched = repo.get(&target).unwrap().unwrap();
        assert_eq!(fetched.name, "Dana");
    }

    #[test]
    fn public_list_hides_deactivated_admin_list_keeps_them() {
        let repo = Repository::<Property>::new(store());
        let id = repo.create(property("Skyline Tower", "skyline-tower", true)).unwrap();

        let public = repo.list_public(10, None).unwrap();
        assert!(public.items.iter().any(|p| p.id == id));

        repo.update(&id, patch(json!({"is_active": false}))).unwrap();

        let public = repo.list_public(10, None).unwrap();
        assert!(!public.items.iter().any(|p| p.id == id));

        let admin = repo.list_admin(10, None).unwrap();
        assert!(admin.items.iter().any(|p| p.id == id));
    }

    #[test]
    fn pagination_contract_holds_for_typed_lists() {
        let repo = Repository::<Property>::new(store());
        for i in 0..5 {
            repo.create(property(&format!("P{i}"), &format!("p-{i}"), true)).unwrap();
        }

        let first = repo.list_public(3, None).unwrap();
        assert_eq!(first.items.len(), 3);
        let cursor = first.next_cursor.expect("two items remain");

        let second = repo.list_public(3, Some(&cursor)).unwrap();
        assert_eq!(second.items.len(), 2);
        assert!(second.next_cursor.is_none());
    }
}
