//! Brickbase — content backend for a real-estate marketing site
//!
//! The crate is a small stack of layers over one embedded document
//! store:
//!
//! - [`store`]: collections of JSON documents with newest-first listing
//!   order, opaque cursor pagination, live change subscriptions and
//!   write-through persistence to disk.
//! - [`model`]: the content entities (properties, blogs, jobs, partner
//!   profiles, leads, site furniture) and the [`model::Entity`] trait
//!   binding each one to its collection.
//! - [`repo`]: typed CRUD repositories over the store, including the
//!   public/admin listing split and the specialized repositories for
//!   properties, builders, admins and footer links.
//! - [`search`]: the manually triggered full-rewrite mirror of the
//!   property collection into a hosted search index.
//! - [`media`]: the parameterized upload gateway to the external media
//!   host.
//! - [`http`]: the read-only JSON surface the public site consumes.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use brickbase_core::model::Property;
//! use brickbase_core::repo::Repository;
//! use brickbase_core::store::DocumentStore;
//!
//! let store = Arc::new(DocumentStore::open("./data")?);
//! let properties = Repository::<Property>::new(store);
//! let id = properties.create(Property {
//!     title: "Skyline Tower".into(),
//!     slug: "skyline-tower".into(),
//!     ..Property::default()
//! })?;
//! ```

pub mod config;
pub mod http;
pub mod logging;
pub mod media;
pub mod model;
pub mod repo;
pub mod search;
pub mod store;

pub use config::BrickbaseConfig;
pub use logging::init_logging;
pub use repo::Repository;
pub use store::DocumentStore;
