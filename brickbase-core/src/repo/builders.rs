//! Builder repository with the derived project-count recompute

use std::ops::Deref;
use std::sync::Arc;

use serde_json::Value;

use crate::model::{Builder, Entity, Property};
use crate::store::{Document, DocumentStore};

use super::{RepoResult, Repository};

pub struct BuilderRepo {
    base: Repository<Builder>,
}

impl BuilderRepo {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { base: Repository::new(store) }
    }

    /// Merge-write the builder, then recompute `total_projects` by
    /// counting properties whose `builder_id` references it.
    ///
    /// The recompute is a second, separate round trip with no
    /// transaction around the pair, so a concurrent property write can
    /// land between the two; the stored count is a best-effort snapshot
    /// that stays stale until the next builder update.
    pub fn update(&self, id: &str, partial: Document) -> RepoResult<()> {
        self.base.update(id, partial)?;

        let builder_ref = Value::String(id.to_string());
        let total = self
            .base
            .store()
            .scan(Property::COLLECTION)
            .iter()
            .filter(|(_, doc)| doc.get("builder_id") == Some(&builder_ref))
            .count();

        let mut patch = Document::new();
        patch.insert("total_projects".to_string(), Value::from(total as u64));
        self.base.store().merge(Builder::COLLECTION, id, patch)?;
        Ok(())
    }
}

impl Deref for BuilderRepo {
    type Target = Repository<Builder>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn patch(value: serde_json::Value) -> Document {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn update_recomputes_total_projects() {
        let store = Arc::new(DocumentStore::in_memory());
        let builders = BuilderRepo::new(store.clone());
        let properties = Repository::<Property>::new(store);

        let builder_id = builders
            .create(Builder { name: "Stonegate".to_string(), ..Builder::default() })
            .unwrap();

        for i in 0..3 {
            properties
                .create(Property {
                    title: format!("Tower {i}"),
                    slug: format!("tower-{i}"),
                    builder_id: Some(builder_id.clone()),
                    is_active: true,
                    ..Property::default()
                })
                .unwrap();
        }

        builders.update(&builder_id, patch(json!({"ongoing_projects": 2}))).unwrap();

        let builder = builders.get_by_id(&builder_id).unwrap().unwrap();
        assert_eq!(builder.total_projects, 3);
        assert_eq!(builder.ongoing_projects, Some(2));
    }

    #[test]
    fn count_goes_stale_until_next_update() {
        let store = Arc::new(DocumentStore::in_memory());
        let builders = BuilderRepo::new(store.clone());
        let properties = Repository::<Property>::new(store);

        let builder_id = builders
            .create(Builder { name: "Stonegate".to_string(), ..Builder::default() })
            .unwrap();
        let property_id = properties
            .create(Property {
                title: "Tower".to_string(),
                slug: "tower".to_string(),
                builder_id: Some(builder_id.clone()),
                ..Property::default()
            })
            .unwrap();

        builders.update(&builder_id, Document::new()).unwrap();
        assert_eq!(builders.get_by_id(&builder_id).unwrap().unwrap().total_projects, 1);

        // Deleting the property does not touch the cached count.
        properties.delete(&property_id).unwrap();
        assert_eq!(builders.get_by_id(&builder_id).unwrap().unwrap().total_projects, 1);

        builders.update(&builder_id, Document::new()).unwrap();
        assert_eq!(builders.get_by_id(&builder_id).unwrap().unwrap().total_projects, 0);
    }
}
