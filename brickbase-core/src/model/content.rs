//! Marketing content: amenities, testimonials, contact-page FAQs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{impl_entity, MediaRef};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Amenity {
    pub id: String,
    pub name: String,
    pub image: Option<MediaRef>,
    pub is_active: bool,

    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

impl_entity!(Amenity, "amenities", required: [name]);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub id: String,
    pub author: String,
    pub role: String,
    pub quote: String,
    pub rating: Option<u8>,
    pub is_active: bool,

    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

impl_entity!(Testimonial, "testimonials", required: [author, quote]);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFaq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub is_active: bool,

    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

impl_entity!(ContactFaq, "contact_faqs", required: [question, answer]);
