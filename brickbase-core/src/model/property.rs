//! Property listing model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{impl_entity, FaqEntry, MediaRef};

/// One milestone of a payment plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentPlan {
    pub milestone: String,
    pub percentage: String,
}

/// A marketed property
///
/// Slug uniqueness is not enforced at write time; reads resolve a slug
/// with a first-match-wins equality query. `builder_id` is a loose
/// reference: deleting the builder does not touch properties pointing
/// at it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub location: String,
    pub property_type: Option<String>,
    pub builder_id: Option<String>,
    pub developer_id: Option<String>,

    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub area_min: Option<f64>,
    pub area_max: Option<f64>,

    pub new_launch: bool,
    pub trending: bool,
    pub ready_to_move: bool,
    pub is_active: bool,

    pub main_image: Option<MediaRef>,
    pub gallery: Vec<MediaRef>,
    pub video: Option<MediaRef>,
    pub brochure: Option<MediaRef>,

    pub overview: String,
    pub description: String,
    pub faqs: Vec<FaqEntry>,
    pub payment_plans: Vec<PaymentPlan>,
    pub amenity_ids: Vec<String>,

    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

impl_entity!(Property, "properties", slug: slug, required: [title, slug]);
