//! Indexed, read-only view of an error catalog.
//!
//! The index enforces the expected schema version and unique ids, then keeps
//! both tables in document order alongside id maps for direct lookup. It is
//! strict about malformed records but deliberately lenient about examples
//! whose `category_id` names no category: those stay reachable by id and by
//! search and are only reported through [`CatalogIndex::dangling_examples`].

use crate::catalog::{
    BUNDLED_CATALOG, CatalogDocument, CatalogKey, CatalogMetadata, Category, CategoryId,
    ErrorExample, ExampleId, load_catalog_from_path, parse_catalog_document,
};
use anyhow::{Context, Result, bail};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::OnceLock;

// Only one document format exists today. Callers may widen the accepted set
// via env for experimental catalogs.
pub const DEFAULT_SCHEMA_VERSION: &str = "ux_error_catalog_v1";
pub const ENV_ALLOWED_SCHEMA_VERSIONS: &str = "ERROR_CATALOG_ALLOWED_SCHEMAS";

#[derive(Debug)]
/// Catalog tables plus derived indexes keyed by id.
pub struct CatalogIndex {
    metadata: CatalogMetadata,
    categories: Vec<Category>,
    examples: Vec<ErrorExample>,
    category_by_id: BTreeMap<CategoryId, usize>,
    example_by_id: BTreeMap<ExampleId, usize>,
}

impl CatalogIndex {
    /// Load and validate a catalog document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let document =
            load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        Self::from_document(document).with_context(|| format!("validating {}", path.display()))
    }

    /// Parse and validate a catalog held in memory.
    pub fn from_json(raw: &str) -> Result<Self> {
        Self::from_document(parse_catalog_document(raw)?)
    }

    /// Validate an already-parsed document and build the id indexes.
    pub fn from_document(document: CatalogDocument) -> Result<Self> {
        validate_schema_version(&document.schema_version)?;
        validate_catalog_metadata(&document.catalog)?;
        let category_by_id = build_category_index(&document.categories)?;
        let example_by_id = build_example_index(&document.examples)?;

        let index = Self {
            metadata: document.catalog,
            categories: document.categories,
            examples: document.examples,
            category_by_id,
            example_by_id,
        };
        tracing::debug!(
            catalog = %index.metadata.key,
            categories = index.categories.len(),
            examples = index.examples.len(),
            "loaded error catalog"
        );
        for example in index.dangling_examples() {
            tracing::debug!(
                example = %example.id,
                category = %example.category_id,
                "example references a category that is not in the catalog"
            );
        }
        Ok(index)
    }

    /// The catalog compiled into this crate, built once per process.
    pub fn bundled() -> Result<&'static CatalogIndex> {
        static BUNDLED: OnceLock<CatalogIndex> = OnceLock::new();
        if let Some(index) = BUNDLED.get() {
            return Ok(index);
        }
        let index = Self::from_json(BUNDLED_CATALOG).context("loading bundled error catalog")?;
        Ok(BUNDLED.get_or_init(|| index))
    }

    /// The catalog key declared in the envelope.
    pub fn key(&self) -> &CatalogKey {
        &self.metadata.key
    }

    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    /// All categories in document order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All examples in document order.
    pub fn examples(&self) -> &[ErrorExample] {
        &self.examples
    }

    /// Resolve a category by id.
    ///
    /// Returns `None` instead of erroring; ids usually come straight from user
    /// navigation and absence is an ordinary outcome.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.category_by_id
            .get(id)
            .and_then(|&pos| self.categories.get(pos))
    }

    /// Resolve an error example by id.
    pub fn error_example(&self, id: &str) -> Option<&ErrorExample> {
        self.example_by_id
            .get(id)
            .and_then(|&pos| self.examples.get(pos))
    }

    /// Examples whose `category_id` equals `category_id`, in document order.
    ///
    /// An unknown category and a category with no examples both produce an
    /// empty vector; check [`CatalogIndex::category`] to tell them apart.
    /// Examples pointing at a missing category are never listed, even under
    /// that missing id.
    pub fn examples_by_category(&self, category_id: &str) -> Vec<&ErrorExample> {
        self.members_of(category_id).collect()
    }

    pub fn category_example_count(&self, category_id: &str) -> usize {
        self.members_of(category_id).count()
    }

    fn members_of<'a, 'b>(
        &'a self,
        category_id: &'b str,
    ) -> impl Iterator<Item = &'a ErrorExample> {
        let known = self.category_by_id.contains_key(category_id);
        self.examples
            .iter()
            .filter(move |example| known && example.category_id == category_id)
    }

    /// The category an example belongs to, if it still exists.
    pub fn category_of(&self, example: &ErrorExample) -> Option<&Category> {
        self.category(example.category_id.as_str())
    }

    /// The first `count` examples in document order.
    pub fn featured(&self, count: usize) -> &[ErrorExample] {
        &self.examples[..count.min(self.examples.len())]
    }

    /// Examples whose category is missing from the catalog.
    pub fn dangling_examples(&self) -> Vec<&ErrorExample> {
        self.examples
            .iter()
            .filter(|example| !self.category_by_id.contains_key(example.category_id.as_str()))
            .collect()
    }
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }

    if !is_slug_key(schema_version) {
        bail!(
            "schema_version must match ^[A-Za-z0-9_.-]+$, got {}",
            schema_version
        );
    }

    let allowed = allowed_schema_versions();
    if !allowed.contains(schema_version) {
        bail!(
            "schema_version '{}' not in allowed set {:?}",
            schema_version,
            allowed
        );
    }

    Ok(())
}

/// Schema versions this build accepts, including env-provided extras.
pub fn allowed_schema_versions() -> BTreeSet<String> {
    let mut versions: BTreeSet<String> = BTreeSet::new();
    versions.insert(DEFAULT_SCHEMA_VERSION.to_string());
    if let Ok(raw) = std::env::var(ENV_ALLOWED_SCHEMA_VERSIONS) {
        for v in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            versions.insert(v.to_string());
        }
    }
    versions
}

fn validate_catalog_metadata(meta: &CatalogMetadata) -> Result<()> {
    if meta.key.0.is_empty() {
        bail!("catalog.key must not be empty");
    }
    if !is_slug_key(&meta.key.0) {
        bail!("catalog.key must match ^[A-Za-z0-9_.-]+$, got {}", meta.key.0);
    }
    if meta.title.trim().is_empty() {
        bail!("catalog.title must not be empty");
    }
    if meta.labels.iter().any(|label| label.trim().is_empty()) {
        bail!("catalog.labels must not contain empty entries");
    }
    Ok(())
}

fn is_slug_key(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

// Same rule as the `slug` definition in the bundled schema.
fn is_record_id(value: &str) -> bool {
    value.starts_with(|c: char| c.is_ascii_lowercase() || c.is_ascii_digit())
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn build_category_index(categories: &[Category]) -> Result<BTreeMap<CategoryId, usize>> {
    if categories.is_empty() {
        bail!("catalog contains no categories");
    }

    let mut map = BTreeMap::new();
    for (pos, category) in categories.iter().enumerate() {
        if category.id.0.trim().is_empty() {
            bail!("encountered category with no id");
        }
        if !is_record_id(category.id.as_str()) {
            bail!("category id must match ^[a-z0-9][a-z0-9-]*$, got {}", category.id);
        }
        if category.title.trim().is_empty() {
            bail!("category {} has an empty title", category.id);
        }
        if map.insert(category.id.clone(), pos).is_some() {
            bail!("duplicate category id {}", category.id);
        }
    }
    Ok(map)
}

fn build_example_index(examples: &[ErrorExample]) -> Result<BTreeMap<ExampleId, usize>> {
    let mut map = BTreeMap::new();
    for (pos, example) in examples.iter().enumerate() {
        if example.id.0.trim().is_empty() {
            bail!("encountered error example with no id");
        }
        if !is_record_id(example.id.as_str()) {
            bail!(
                "error example id must match ^[a-z0-9][a-z0-9-]*$, got {}",
                example.id
            );
        }
        if example.title.trim().is_empty() {
            bail!("error example {} has an empty title", example.id);
        }
        if example.category_id.0.trim().is_empty() {
            bail!("error example {} has an empty category_id", example.id);
        }
        if map.insert(example.id.clone(), pos).is_some() {
            bail!("duplicate error example id {}", example.id);
        }
    }
    Ok(map)
}
