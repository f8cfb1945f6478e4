//! Error catalog wiring.
//!
//! This module wraps catalog documents (for example
//! `catalogs/ux_error_catalog_v1.json`, which is also compiled into the crate)
//! so callers can load a validated snapshot and look records up by id. Types
//! here mirror the schema fields; callers use `CatalogIndex` for lookups and
//! `crate::search` for free-text queries.

pub mod identity;
pub mod index;
pub mod model;

pub use identity::{CatalogKey, CategoryId, ExampleId};
pub use index::CatalogIndex;
pub use model::{
    CatalogDocument, CatalogMetadata, Category, ErrorExample, Fixability, MessageSample,
};

pub use model::{load_catalog_from_path, parse_catalog_document};

/// Default relative path to the catalog document in a source checkout.
pub const DEFAULT_CATALOG_PATH: &str = "catalogs/ux_error_catalog_v1.json";

/// The catalog document shipped with the crate.
pub const BUNDLED_CATALOG: &str = include_str!("../../catalogs/ux_error_catalog_v1.json");
