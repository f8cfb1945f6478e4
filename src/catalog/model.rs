//! Serde model for catalog documents.
//!
//! Field names follow `schema/ux_error_catalog.schema.json`. The types are
//! plain data; validation beyond what serde enforces lives in
//! [`crate::catalog::index`].

use crate::catalog::{CatalogKey, CategoryId, ExampleId};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Top-level catalog document: envelope metadata plus both tables.
pub struct CatalogDocument {
    pub schema_version: String,
    pub catalog: CatalogMetadata,
    pub categories: Vec<Category>,
    #[serde(default)]
    pub examples: Vec<ErrorExample>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogMetadata {
    pub key: CatalogKey,
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A named grouping of error-message patterns.
///
/// `icon_ref`, `color_class` and `emoji` are presentation hints; nothing in
/// this crate compares or interprets them.
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    pub description: String,
    pub icon_ref: String,
    pub color_class: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One documented bad/good message pair with its rationale.
pub struct ErrorExample {
    pub id: ExampleId,
    pub category_id: CategoryId,
    pub title: String,
    pub context: String,
    pub bad_example: MessageSample,
    pub good_example: MessageSample,
    #[serde(default)]
    pub what_makes_it_better: Vec<String>,
    /// Template with bracketed placeholders. Shown verbatim, never filled in.
    pub copy_pattern: String,
    pub fixability: Fixability,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSample {
    pub message: String,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Who can remediate the underlying error.
pub enum Fixability {
    User,
    System,
    Both,
}

impl Fixability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fixability::User => "user",
            Fixability::System => "system",
            Fixability::Both => "both",
        }
    }

    /// Badge text used by the detail and card views.
    pub fn label(&self) -> &'static str {
        match self {
            Fixability::User => "User fixable",
            Fixability::System => "System fixable",
            Fixability::Both => "Both",
        }
    }
}

impl fmt::Display for Fixability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a catalog document from disk without further validation.
pub fn load_catalog_from_path(path: &Path) -> Result<CatalogDocument> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading error catalog {}", path.display()))?;
    parse_catalog_document(&data)
        .with_context(|| format!("parsing error catalog {}", path.display()))
}

/// Parse a catalog document from an in-memory JSON string.
pub fn parse_catalog_document(raw: &str) -> Result<CatalogDocument> {
    serde_json::from_str(raw).context("catalog document is not valid JSON for the catalog model")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fixability_uses_lowercase_wire_names() {
        let parsed: Vec<Fixability> =
            serde_json::from_value(json!(["user", "system", "both"])).unwrap();
        assert_eq!(
            parsed,
            vec![Fixability::User, Fixability::System, Fixability::Both]
        );
        assert!(serde_json::from_value::<Fixability>(json!("nobody")).is_err());
    }

    #[test]
    fn fixability_labels_match_badges() {
        assert_eq!(Fixability::User.label(), "User fixable");
        assert_eq!(Fixability::System.label(), "System fixable");
        assert_eq!(Fixability::Both.label(), "Both");
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let doc = parse_catalog_document(
            &json!({
                "schema_version": "ux_error_catalog_v1",
                "catalog": {"key": "k", "title": "t"},
                "categories": [{
                    "id": "c",
                    "title": "C",
                    "description": "d",
                    "icon_ref": "alert-circle",
                    "color_class": "red"
                }]
            })
            .to_string(),
        )
        .unwrap();
        assert!(doc.examples.is_empty());
        assert!(doc.catalog.labels.is_empty());
        assert_eq!(doc.categories[0].emoji, None);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let err = parse_catalog_document(r#"{"schema_version": "ux_error_catalog_v1"}"#)
            .unwrap_err();
        assert!(format!("{err:#}").contains("catalog"));
    }
}
