//! Reference catalog of bad/good UX error-message pairs.
//!
//! The catalog is read-only: two tables (categories and error examples) built
//! once from a JSON document, looked up through [`CatalogIndex`] and searched
//! through [`search`]. Static editorial guidance lives in [`guidelines`].

use anyhow::Result;
use std::env;
use std::ops::Deref;
use std::path::{Path, PathBuf};

pub mod about;
pub mod catalog;
pub mod guidelines;
pub mod schema_loader;
pub mod search;

pub use catalog::{
    CatalogDocument, CatalogIndex, CatalogKey, CatalogMetadata, Category, CategoryId,
    DEFAULT_CATALOG_PATH, ErrorExample, ExampleId, Fixability, MessageSample,
    load_catalog_from_path,
};
pub use schema_loader::{CatalogSchema, validate_catalog_value};
pub use search::{SearchResult, search};

/// Environment variable naming an external catalog document.
pub const ENV_CATALOG_PATH: &str = "ERROR_CATALOG_PATH";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Where the catalog for this process comes from.
pub enum CatalogSource {
    Bundled,
    File(PathBuf),
}

/// Pick the catalog source: explicit path, then `ERROR_CATALOG_PATH`, then
/// the bundled document.
pub fn resolve_catalog_source(explicit: Option<&Path>) -> CatalogSource {
    catalog_source_from(explicit, env_non_empty(ENV_CATALOG_PATH))
}

fn catalog_source_from(explicit: Option<&Path>, env_value: Option<String>) -> CatalogSource {
    if let Some(path) = explicit {
        return CatalogSource::File(path.to_path_buf());
    }
    match env_value {
        Some(raw) => CatalogSource::File(PathBuf::from(raw)),
        None => CatalogSource::Bundled,
    }
}

/// A catalog that is either the shared bundled index or one loaded from disk.
pub enum CatalogHandle {
    Bundled(&'static CatalogIndex),
    Loaded(CatalogIndex),
}

impl Deref for CatalogHandle {
    type Target = CatalogIndex;

    fn deref(&self) -> &CatalogIndex {
        match self {
            CatalogHandle::Bundled(index) => index,
            CatalogHandle::Loaded(index) => index,
        }
    }
}

/// Open the catalog named by `source`.
pub fn open_catalog(source: &CatalogSource) -> Result<CatalogHandle> {
    match source {
        CatalogSource::Bundled => CatalogIndex::bundled().map(CatalogHandle::Bundled),
        CatalogSource::File(path) => CatalogIndex::load(path).map(CatalogHandle::Loaded),
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}
