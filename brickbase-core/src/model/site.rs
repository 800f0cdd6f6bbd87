//! Site-wide content blocks: hero, banners, SEO entries, footer links,
//! career slider

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{impl_entity, MediaRef};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub id: String,
    pub heading: String,
    pub subheading: String,
    pub image: Option<MediaRef>,
    pub is_active: bool,

    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

impl_entity!(Hero, "hero", required: [heading]);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Banner {
    pub id: String,
    pub image: Option<MediaRef>,
    pub link: String,
    pub is_active: bool,

    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

impl_entity!(Banner, "banners", required: [link]);

/// Per-page SEO metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoEntry {
    pub id: String,
    pub page: String,
    pub title: String,
    pub description: String,

    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

impl_entity!(SeoEntry, "seo", required: [page]);

/// One footer link row, edited and saved individually
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLink {
    pub id: String,
    pub label: String,
    pub slug: String,
    pub seo_title: String,
    pub seo_description: String,
}

/// A named group of footer links (one document per group)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLinks {
    pub id: String,
    pub group: String,
    pub rows: Vec<FooterLink>,

    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

impl_entity!(FooterLinks, "footer_links", required: [group]);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerSlide {
    pub id: String,
    pub image: Option<MediaRef>,
    pub caption: String,
    pub is_active: bool,

    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

impl_entity!(CareerSlide, "career_slider", required: [caption]);
