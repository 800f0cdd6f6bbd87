//! Content entity models
//!
//! Every entity is stored as a schemaless document; these structs are
//! the typed view the repositories serialize through. All entities
//! carry a generated `id` plus `create_time`/`update_time` audit stamps
//! set by the repository layer, never by callers.

pub mod admin;
pub mod blog;
pub mod content;
pub mod job;
pub mod lead;
pub mod partner;
pub mod property;
pub mod site;

pub use admin::Admin;
pub use blog::{Blog, BlogSection};
pub use content::{Amenity, ContactFaq, Testimonial};
pub use job::{Job, JobType};
pub use lead::{BrochureLead, Contact, JobApplication, Resume};
pub use partner::{Builder, Developer};
pub use property::{PaymentPlan, Property};
pub use site::{Banner, CareerSlide, FooterLink, FooterLinks, Hero, SeoEntry};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Reference to an asset on the external media host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaRef {
    pub url: String,
    pub public_id: String,
}

/// One question/answer pair (property and blog FAQ blocks)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Typed view over a stored document collection
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    fn set_create_time(&mut self, t: DateTime<Utc>);
    fn set_update_time(&mut self, t: DateTime<Utc>);

    /// Whether reads should try a slug equality probe before the id
    /// path. Only entities carrying a slug field opt in.
    const SLUG_LOOKUP: bool = false;

    /// Client-side required-field check, run before any store call.
    /// Returns the name of the first missing field.
    fn validate(&self) -> Result<(), &'static str>;
}

/// Implements the audit/identity plumbing of [`Entity`] for a struct
/// with `id`, `create_time` and `update_time` fields, plus a
/// required-field check over the listed non-empty string fields.
macro_rules! impl_entity {
    ($ty:ty, $collection:literal $(, slug: $slug:ident)?, required: [$($field:ident),* $(,)?]) => {
        impl $crate::model::Entity for $ty {
            const COLLECTION: &'static str = $collection;

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }

            fn set_create_time(&mut self, t: chrono::DateTime<chrono::Utc>) {
                self.create_time = Some(t);
            }

            fn set_update_time(&mut self, t: chrono::DateTime<chrono::Utc>) {
                self.update_time = Some(t);
            }

            $(
                const SLUG_LOOKUP: bool = {
                    let _ = stringify!($slug);
                    true
                };
            )?

            fn validate(&self) -> Result<(), &'static str> {
                $(
                    if self.$field.trim().is_empty() {
                        return Err(stringify!($field));
                    }
                )*
                Ok(())
            }
        }
    };
}

pub(crate) use impl_entity;
