//! End-to-end content lifecycle against a disk-backed store
//!
//! Exercises the paths a real deployment runs every day: publish a
//! property, capture a lead from the public form, watch the admin
//! subscription fire, restart the process and keep all data, and push
//! the search mirror.

use std::sync::Arc;

use serde_json::json;

use brickbase_core::model::{BrochureLead, Builder, Property};
use brickbase_core::repo::{BrochureLeadRepo, BuilderRepo, PropertyRepo, Repository};
use brickbase_core::search::{self, MemoryIndex, SearchIndex};
use brickbase_core::store::{Document, DocumentStore};

fn property(title: &str, slug: &str) -> Property {
    Property {
        title: title.to_string(),
        slug: slug.to_string(),
        location: "Palm District".to_string(),
        is_active: true,
        ..Property::default()
    }
}

fn patch(value: serde_json::Value) -> Document {
    value.as_object().unwrap().clone()
}

#[test]
fn publish_capture_and_restart_keeps_everything() {
    let dir = tempfile::tempdir().unwrap();

    let property_id;
    let lead_id;
    {
        let store = Arc::new(DocumentStore::open(dir.path()).unwrap());
        let properties = PropertyRepo::new(store.clone());
        let leads = BrochureLeadRepo::new(store.clone());

        property_id = properties.create(property("Palm Residences", "palm-residences")).unwrap();
        lead_id = leads
            .create(BrochureLead {
                property_id: property_id.clone(),
                name: "Asha Nair".to_string(),
                email: "asha@example.com".to_string(),
                phone: "+971500000000".to_string(),
                ..BrochureLead::default()
            })
            .unwrap();
    }

    // Same directory, fresh process.
    let store = Arc::new(DocumentStore::open(dir.path()).unwrap());
    let properties = PropertyRepo::new(store.clone());
    let leads = BrochureLeadRepo::new(store);

    let restored = properties.get("palm-residences").unwrap().unwrap();
    assert_eq!(restored.id, property_id);
    assert_eq!(restored.location, "Palm District");

    let lead = leads.get_by_id(&lead_id).unwrap().unwrap();
    assert_eq!(lead.property_id, property_id);
}

#[tokio::test]
async fn admin_subscription_sees_the_new_lead() {
    let store = Arc::new(DocumentStore::in_memory());
    let leads = BrochureLeadRepo::new(store);

    let mut subscription = leads.subscribe(Some(10));

    let id = leads
        .create(BrochureLead {
            name: "Rami Haddad".to_string(),
            email: "rami@example.com".to_string(),
            ..BrochureLead::default()
        })
        .unwrap();

    let snapshot = subscription.recv().await.expect("channel still open");
    assert!(snapshot.iter().any(|(doc_id, _)| *doc_id == id));
}

#[test]
fn builder_edit_recomputes_its_project_count() {
    let store = Arc::new(DocumentStore::in_memory());
    let builders = BuilderRepo::new(store.clone());
    let properties = Repository::<Property>::new(store);

    let builder_id = builders
        .create(Builder { name: "Stonebridge".to_string(), ..Builder::default() })
        .unwrap();

    for slug in ["north-court", "south-court"] {
        let mut p = property(slug, slug);
        p.builder_id = Some(builder_id.clone());
        properties.create(p).unwrap();
    }

    // The cached count only moves when the builder itself is written.
    let before = builders.get_by_id(&builder_id).unwrap().unwrap();
    assert_eq!(before.total_projects, 0);

    builders.update(&builder_id, patch(json!({"name": "Stonebridge Group"}))).unwrap();
    let after = builders.get_by_id(&builder_id).unwrap().unwrap();
    assert_eq!(after.total_projects, 2);
}

#[tokio::test]
async fn mirror_sync_upserts_and_never_reconciles_deletions() {
    let store = Arc::new(DocumentStore::in_memory());
    let properties = Repository::<Property>::new(store.clone());

    let kept = properties.create(property("Harbor View", "harbor-view")).unwrap();
    let removed = properties.create(property("Harbor Annex", "harbor-annex")).unwrap();

    let index = MemoryIndex::new();
    search::sync_all(&store, &index).await.unwrap();

    properties.delete(&removed).unwrap();
    properties.update(&kept, patch(json!({"title": "Harbor View Residences"}))).unwrap();

    // Re-sync refreshes surviving records but the deleted one stays.
    search::sync_all(&store, &index).await.unwrap();
    let hits = index.query("harbor", 10).await.unwrap();
    assert!(hits.iter().any(|h| h.object_id == kept && h.title == "Harbor View Residences"));
    assert!(hits.iter().any(|h| h.object_id == removed));
}
