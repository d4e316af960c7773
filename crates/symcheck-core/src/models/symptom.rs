use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// An observable health indicator a user may select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Symptom {
    /// Stable identifier, e.g. `"sore-throat"`.
    pub id: String,
    /// Display label, e.g. `"Sore Throat"`.
    pub name: String,
    /// Free-text grouping, e.g. `"Respiratory"`.
    pub category: String,
}

impl Symptom {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
        }
    }

    /// Check that the identifying fields are present.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id.trim().is_empty() {
            return Err(CoreError::EmptyField {
                record: "symptom",
                id: self.id.clone(),
                field: "id",
            });
        }
        if self.name.trim().is_empty() {
            return Err(CoreError::EmptyField {
                record: "symptom",
                id: self.id.clone(),
                field: "name",
            });
        }
        Ok(())
    }
}
