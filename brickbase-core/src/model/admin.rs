//! Back-office admin account model
//!
//! Admins are keyed by a generated immutable id; the email is a plain
//! attribute whose uniqueness is enforced with an equality query in the
//! repository, not by the document key. Authentication itself lives
//! with the external identity provider and is out of scope here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::impl_entity;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Admin {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Option<String>,

    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

impl_entity!(Admin, "admins", required: [email]);
