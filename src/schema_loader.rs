//! JSON Schema contract for catalog documents.
//!
//! The schema ships under `schema/` and is also compiled into the crate.
//! Callers compile it once, check a raw JSON document against it, and then
//! hand the document to [`CatalogIndex`] for the id-level checks the schema
//! cannot express (uniqueness, allowed versions).

use crate::catalog::CatalogIndex;
use crate::catalog::index::allowed_schema_versions;
use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::path::Path;

/// Default relative path to the schema in a source checkout.
pub const DEFAULT_SCHEMA_PATH: &str = "schema/ux_error_catalog.schema.json";

/// The schema shipped with the crate.
pub const BUNDLED_SCHEMA: &str = include_str!("../schema/ux_error_catalog.schema.json");

const SCHEMA_VERSION_POINTER: &str = "/properties/schema_version/const";

/// Compiled catalog schema plus the document version it pins.
pub struct CatalogSchema {
    compiled: JSONSchema,
    schema_version: String,
}

impl CatalogSchema {
    /// Compile the schema compiled into this crate.
    pub fn bundled() -> Result<Self> {
        let value: Value =
            serde_json::from_str(BUNDLED_SCHEMA).context("parsing bundled catalog schema")?;
        Self::compile(&value, "bundled catalog schema")
    }

    /// Read and compile a schema file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let value: Value = serde_json::from_reader(
            File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
        )
        .with_context(|| format!("parsing schema {}", path.display()))?;
        Self::compile(&value, &format!("schema {}", path.display()))
    }

    fn compile(schema: &Value, origin: &str) -> Result<Self> {
        let schema_version = extract_schema_version(schema, SCHEMA_VERSION_POINTER)
            .ok_or_else(|| anyhow!("{origin} missing schema_version const"))?;

        let allowed = allowed_schema_versions();
        if !allowed.contains(&schema_version) {
            bail!(
                "{origin} pins schema_version '{}' not in allowed set {:?}",
                schema_version,
                allowed
            );
        }

        let compiled = JSONSchema::compile(schema)
            .map_err(|err| anyhow!("compiling {origin}: {err}"))?;
        Ok(Self {
            compiled,
            schema_version,
        })
    }

    /// The `schema_version` value documents must carry.
    pub fn schema_version(&self) -> &str {
        &self.schema_version
    }

    /// Check a raw document, reporting every violation at once.
    pub fn validate(&self, document: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(document) {
            let details = errors
                .map(|err| format!("{}: {}", err.instance_path, err))
                .collect::<Vec<_>>()
                .join("\n");
            bail!("catalog failed schema validation:\n{}", details);
        }
        Ok(())
    }
}

/// Schema-check a raw document, then build the index from it.
pub fn validate_catalog_value(schema: &CatalogSchema, document: Value) -> Result<CatalogIndex> {
    schema.validate(&document)?;
    let parsed = serde_json::from_value(document).context("decoding catalog document")?;
    CatalogIndex::from_document(parsed)
}

fn extract_schema_version(schema: &Value, pointer: &str) -> Option<String> {
    let version = schema.pointer(pointer).and_then(Value::as_str)?;
    if version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        Some(version.to_string())
    } else {
        None
    }
}
