use std::path::PathBuf;

use symcheck_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("failed to read catalogue at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("catalogue is not a JSON object")]
    NotAnObject,

    #[error("catalogue_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u64, supported: u32 },

    #[error("duplicate symptom id: {0}")]
    DuplicateSymptom(String),

    #[error("duplicate condition id: {0}")]
    DuplicateCondition(String),

    #[error("condition '{condition_id}' references unknown symptom '{symptom_id}'")]
    UnknownSymptom {
        condition_id: String,
        symptom_id: String,
    },

    #[error("condition '{condition_id}' lists symptom '{symptom_id}' more than once")]
    RepeatedSymptom {
        condition_id: String,
        symptom_id: String,
    },

    #[error(transparent)]
    Record(#[from] CoreError),
}
