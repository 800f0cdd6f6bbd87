//! Captured form submissions
//!
//! Leads are write-once: created by a public form, listable and
//! deletable from the back office, never updated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{impl_entity, MediaRef};

/// Contact-form submission
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,

    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

impl_entity!(Contact, "contacts", required: [name, email]);

/// Application submitted against a job opening
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobApplication {
    pub id: String,
    pub job_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub resume: Option<MediaRef>,

    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

impl_entity!(JobApplication, "job_applications", required: [name, email]);

/// Lead captured by a brochure download
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrochureLead {
    pub id: String,
    pub property_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,

    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

impl_entity!(BrochureLead, "brochure_leads", required: [name, email]);

/// Speculative resume submission (no job reference)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Resume {
    pub id: String,
    pub name: String,
    pub email: String,
    pub file: Option<MediaRef>,

    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

impl_entity!(Resume, "resumes", required: [name, email]);
