//! Catalog module - Archetype catalog model, XML codec and file store
//!
//! Provides:
//! - Catalog and entry model with key-based upsert
//! - archetype-catalog.xml reading and writing
//! - Catalog location resolution (configured, local repository, default)

pub mod codec;
pub mod location;
pub mod model;
pub mod store;
