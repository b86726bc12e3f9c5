//! Snapshot loading
//!
//! Reads schema snapshots from JSON. A provider can be given either as one
//! file mapping resource names to fields, or as a directory holding one
//! `<resource>.json` file per resource.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{DetectorError, Result};
use crate::schema::{ProviderSchema, SchemaSnapshot};

/// Load a single resource snapshot from a JSON file
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<SchemaSnapshot> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    if !value.is_object() {
        return Err(DetectorError::InvalidSnapshot(format!(
            "{}: expected a JSON object of fields",
            path.display()
        )));
    }
    let snapshot: SchemaSnapshot = serde_json::from_value(value)?;
    tracing::debug!(path = %path.display(), fields = snapshot.len(), "Loaded snapshot");
    Ok(snapshot)
}

/// Load all resource snapshots of a provider version
pub fn load_provider(path: impl AsRef<Path>) -> Result<ProviderSchema> {
    let path = path.as_ref();
    if path.is_dir() {
        return load_provider_dir(path);
    }

    let content = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    if !value.is_object() {
        return Err(DetectorError::InvalidSnapshot(format!(
            "{}: expected a JSON object of resources",
            path.display()
        )));
    }
    let provider: ProviderSchema = serde_json::from_value(value)?;
    tracing::debug!(path = %path.display(), resources = provider.len(), "Loaded provider");
    Ok(provider)
}

fn load_provider_dir(dir: &Path) -> Result<ProviderSchema> {
    let mut provider = ProviderSchema::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| DetectorError::InvalidSnapshot(e.to_string()))?;
        let path = entry.path();
        if !path.is_file() || path.extension().map(|x| x != "json").unwrap_or(true) {
            continue;
        }
        let Some(resource) = path.file_stem().map(|s| s.to_string_lossy().to_string()) else {
            continue;
        };
        provider.insert(resource, load_snapshot(path)?);
    }

    tracing::debug!(path = %dir.display(), resources = provider.len(), "Loaded provider directory");
    Ok(provider)
}
