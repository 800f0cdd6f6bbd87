//! Builder and developer models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{impl_entity, MediaRef};

/// A construction company behind one or more properties.
///
/// `total_projects` is a denormalized cache: it counts the properties
/// whose `builder_id` references this builder and is recomputed
/// synchronously on every builder update, in two separate round trips.
/// It is a best-effort snapshot, stale until the next update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Builder {
    pub id: String,
    pub name: String,
    pub logo: Option<MediaRef>,
    pub established_year: Option<i32>,
    pub ongoing_projects: Option<u32>,
    pub total_projects: u64,

    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

impl_entity!(Builder, "builders", required: [name]);

/// A property developer (admin-entered profile, no derived fields)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Developer {
    pub id: String,
    pub name: String,
    pub logo: Option<MediaRef>,
    pub established_year: Option<i32>,
    pub ongoing_projects: Option<u32>,

    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

impl_entity!(Developer, "developers", required: [name]);
