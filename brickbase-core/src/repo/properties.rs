//! Property repository: generic CRUD plus amenity fan-out and the
//! in-process text-search fallback

use std::ops::Deref;
use std::sync::Arc;

use crate::model::{Amenity, Entity, Property};
use crate::store::DocumentStore;

use super::{RepoResult, Repository};

pub struct PropertyRepo {
    base: Repository<Property>,
    amenities: Repository<Amenity>,
}

impl PropertyRepo {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { base: Repository::new(store.clone()), amenities: Repository::new(store) }
    }

    /// Resolve a property's amenity id list with one point read per id
    /// (batch fan-out). Ids referencing deleted amenities are skipped,
    /// not errors; nothing cleans the list up when an amenity goes.
    pub fn resolve_amenities(&self, property: &Property) -> RepoResult<Vec<Amenity>> {
        let mut resolved = Vec::with_capacity(property.amenity_ids.len());
        for id in &property.amenity_ids {
            if let Some(amenity) = self.amenities.get_by_id(id)? {
                resolved.push(amenity);
            }
        }
        Ok(resolved)
    }

    /// In-process substring search over title, slug, location and
    /// overview of active properties. This is the degraded text-search
    /// path, not the hosted index.
    pub fn search_text(&self, query: &str) -> RepoResult<Vec<Property>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let mut hits = Vec::new();
        for (id, doc) in self.base.store().scan(Property::COLLECTION) {
            let matches = ["title", "slug", "location", "overview"].iter().any(|field| {
                doc.get(*field)
                    .and_then(|v| v.as_str())
                    .map(|text| text.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            });
            let active = doc.get("is_active").and_then(|v| v.as_bool()).unwrap_or(false);
            if matches && active {
                hits.push(super::from_document(&id, doc)?);
            }
        }
        Ok(hits)
    }
}

impl Deref for PropertyRepo {
    type Target = Repository<Property>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FaqEntry;

    fn repo() -> PropertyRepo {
        PropertyRepo::new(Arc::new(DocumentStore::in_memory()))
    }

    fn property(title: &str, slug: &str) -> Property {
        Property {
            title: title.to_string(),
            slug: slug.to_string(),
            location: "Palm District".to_string(),
            overview: "Waterfront towers with skyline views".to_string(),
            is_active: true,
            faqs: vec![FaqEntry {
                question: "Handover?".to_string(),
                answer: "Q4".to_string(),
            }],
            ..Property::default()
        }
    }

    #[test]
    fn amenity_fan_out_skips_deleted_ids() {
        let store = Arc::new(DocumentStore::in_memory());
        let properties = PropertyRepo::new(store.clone());
        let amenities = Repository::<Amenity>::new(store);

        let pool = amenities
            .create(Amenity { name: "Pool".to_string(), is_active: true, ..Amenity::default() })
            .unwrap();
        let gym = amenities
            .create(Amenity { name: "Gym".to_string(), is_active: true, ..Amenity::default() })
            .unwrap();

        let mut p = property("Skyline Tower", "skyline-tower");
        p.amenity_ids = vec![pool.clone(), gym.clone(), "deleted-id".to_string()];
        let id = properties.create(p).unwrap();

        let stored = properties.get_by_id(&id).unwrap().unwrap();
        let resolved = properties.resolve_amenities(&stored).unwrap();
        let names: Vec<_> = resolved.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Pool", "Gym"]);
    }

    #[test]
    fn text_fallback_matches_across_fields_case_insensitively() {
        let properties = repo();
        properties.create(property("Skyline Tower", "skyline-tower")).unwrap();
        properties.create(property("Garden Villas", "garden-villas")).unwrap();

        let by_title = properties.search_text("SKYLINE").unwrap();
        assert_eq!(by_title.len(), 2); // one by title, one by overview
        let by_location = properties.search_text("palm district").unwrap();
        assert_eq!(by_location.len(), 2);
        let none = properties.search_text("bungalow").unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn text_fallback_excludes_inactive() {
        let properties = repo();
        let id = properties.create(property("Skyline Tower", "skyline-tower")).unwrap();
        properties
            .update(&id, serde_json::json!({"is_active": false}).as_object().unwrap().clone())
            .unwrap();

        assert!(properties.search_text("skyline").unwrap().is_empty());
    }
}
