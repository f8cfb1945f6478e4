#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use serde_json::{Value, json};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::NamedTempFile;
use ux_error_catalog::CatalogIndex;

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn catalog_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_error-catalog"))
}

pub fn bundled() -> &'static CatalogIndex {
    CatalogIndex::bundled().expect("bundled catalog loads")
}

/// Command for the browser binary with a clean catalog environment.
pub fn catalog_command() -> Command {
    let mut cmd = Command::new(catalog_binary());
    cmd.env_remove("ERROR_CATALOG_PATH")
        .env_remove("ERROR_CATALOG_ALLOWED_SCHEMAS")
        .env_remove("RUST_LOG")
        .current_dir(repo_root());
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to spawn {:?}", cmd.get_program()))?;
    if !output.status.success() {
        bail!(
            "{:?} exited with {}\nstdout:\n{}\nstderr:\n{}",
            cmd.get_program(),
            output.status,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}

pub fn stdout_json(output: &Output) -> Result<Value> {
    serde_json::from_slice(&output.stdout).context("stdout is not JSON")
}

pub fn fixture_category(id: &str, title: &str, description: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": description,
        "icon_ref": "alert-circle",
        "color_class": "bg-red-100 text-red-600"
    })
}

pub fn fixture_example(id: &str, category_id: &str, title: &str, tags: &[&str]) -> Value {
    json!({
        "id": id,
        "category_id": category_id,
        "title": title,
        "context": format!("context for {id}"),
        "bad_example": {"message": "Error", "explanation": "too vague"},
        "good_example": {"message": "Here is what happened", "explanation": "specific"},
        "what_makes_it_better": ["Specific"],
        "copy_pattern": "[What happened]",
        "fixability": "system",
        "tags": tags
    })
}

pub fn fixture_document(categories: Vec<Value>, examples: Vec<Value>) -> Value {
    json!({
        "schema_version": "ux_error_catalog_v1",
        "catalog": {"key": "fixture_catalog_v1", "title": "fixture catalog"},
        "categories": categories,
        "examples": examples
    })
}

pub fn write_catalog(document: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(&mut file, document)?;
    file.flush()?;
    Ok(file)
}
