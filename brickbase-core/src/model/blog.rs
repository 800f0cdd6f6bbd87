//! Blog post model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{impl_entity, FaqEntry, MediaRef};

/// One body section of a post
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogSection {
    pub heading: String,
    pub body: String,
}

/// A blog post. Same slug caveat as `Property`: uniqueness is only
/// first-match-wins at read time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub cover_image: Option<MediaRef>,
    pub sections: Vec<BlogSection>,
    pub faqs: Vec<FaqEntry>,
    pub is_active: bool,

    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

impl_entity!(Blog, "blogs", slug: slug, required: [title, slug]);
