use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::severity::Severity;

/// A health condition and the symptoms commonly associated with it.
///
/// Field names serialize in camelCase (`commonSymptoms`, `whenToSeekHelp`)
/// to match the catalogue file format consumed by the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Condition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub severity: Severity,
    /// Symptom ids. Order is kept for display only; matching treats this as a set.
    pub common_symptoms: Vec<String>,
    pub recommendations: Vec<String>,
    pub when_to_seek_help: String,
}

impl Condition {
    /// Whether `symptom_id` is one of this condition's common symptoms.
    pub fn has_symptom(&self, symptom_id: &str) -> bool {
        self.common_symptoms.iter().any(|s| s == symptom_id)
    }

    /// Check that the identifying fields are present.
    ///
    /// Reference integrity of `common_symptoms` is a catalogue-level concern
    /// and is not checked here.
    pub fn validate(&self) -> Result<(), CoreError> {
        let empty = |field| CoreError::EmptyField {
            record: "condition",
            id: self.id.clone(),
            field,
        };

        if self.id.trim().is_empty() {
            return Err(empty("id"));
        }
        if self.name.trim().is_empty() {
            return Err(empty("name"));
        }
        if self.common_symptoms.is_empty() {
            return Err(empty("commonSymptoms"));
        }
        Ok(())
    }
}
