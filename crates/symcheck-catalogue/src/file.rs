//! Versioned JSON catalogue files.
//!
//! ```json
//! {
//!   "catalogue_version": 1,
//!   "symptoms": [{ "id": "fever", "name": "Fever", "category": "General" }],
//!   "conditions": [{ "id": "flu", "commonSymptoms": ["fever"], ... }]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use symcheck_core::models::condition::Condition;
use symcheck_core::models::symptom::Symptom;

use crate::catalogue::Catalogue;
use crate::error::CatalogueError;

/// Current file format version. Bump this when changing the shape and add a
/// step to [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct CatalogueFile {
    catalogue_version: u32,
    symptoms: Vec<Symptom>,
    conditions: Vec<Condition>,
}

/// Read and validate a catalogue file.
pub fn load_catalogue(path: &Path) -> Result<Catalogue, CatalogueError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogueError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalogue = parse_catalogue(&contents)?;
    tracing::info!(
        path = %path.display(),
        symptoms = catalogue.symptoms().len(),
        conditions = catalogue.conditions().len(),
        "catalogue loaded"
    );
    Ok(catalogue)
}

/// Parse and validate catalogue JSON.
pub fn parse_catalogue(json: &str) -> Result<Catalogue, CatalogueError> {
    let (symptoms, conditions) = parse_records(json)?;
    Catalogue::new(symptoms, conditions)
}

/// Parse catalogue JSON into raw records without validating them.
///
/// Used by tooling that wants to report every problem via
/// [`Catalogue::validate_parts`] instead of stopping at the first.
pub fn parse_records(json: &str) -> Result<(Vec<Symptom>, Vec<Condition>), CatalogueError> {
    // Parse as raw JSON so migrations can run before deserializing.
    let value: serde_json::Value = serde_json::from_str(json)?;
    let on_disk_version = value
        .get("catalogue_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);

    let migrated = migrate(value, on_disk_version)?;
    let file: CatalogueFile = serde_json::from_value(migrated)?;
    Ok((file.symptoms, file.conditions))
}

/// Serialize a catalogue in the current file format.
pub fn to_catalogue_json(catalogue: &Catalogue) -> Result<String, CatalogueError> {
    let file = CatalogueFile {
        catalogue_version: CURRENT_VERSION,
        symptoms: catalogue.symptoms().to_vec(),
        conditions: catalogue.conditions().to_vec(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(
    mut json: serde_json::Value,
    from_version: u64,
) -> Result<serde_json::Value, CatalogueError> {
    if from_version > u64::from(CURRENT_VERSION) {
        return Err(CatalogueError::UnsupportedVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 -> v1: unversioned exports of the frontend data module. Same record
    // shape, only the version stamp is missing.
    if from_version < 1 {
        let obj = json.as_object_mut().ok_or(CatalogueError::NotAnObject)?;
        obj.insert(
            "catalogue_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::debug!("migrated catalogue v0 -> v1");
    }

    Ok(json)
}
