use std::collections::HashSet;
use std::sync::LazyLock;

use serde::Serialize;
use symcheck_core::models::condition::Condition;
use symcheck_core::models::symptom::Symptom;

use crate::builtin;
use crate::error::CatalogueError;

/// The fixed collection of known symptoms and conditions.
///
/// Construction validates every record, so a `Catalogue` value always has
/// unique ids and no dangling symptom references. There are no mutating
/// methods; share it by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalogue {
    symptoms: Vec<Symptom>,
    conditions: Vec<Condition>,
}

impl Catalogue {
    /// Build a catalogue, rejecting it if any record is invalid.
    ///
    /// Returns the first problem found; use [`Catalogue::validate_parts`] to
    /// see all of them.
    pub fn new(
        symptoms: Vec<Symptom>,
        conditions: Vec<Condition>,
    ) -> Result<Self, CatalogueError> {
        let mut problems = Self::validate_parts(&symptoms, &conditions).into_iter();
        if let Some(first) = problems.next() {
            for extra in problems {
                tracing::warn!(error = %extra, "additional catalogue problem");
            }
            return Err(first);
        }
        Ok(Self {
            symptoms,
            conditions,
        })
    }

    /// The compiled-in catalogue.
    ///
    /// # Panics
    ///
    /// Panics on first use if the compiled-in data is inconsistent. The data
    /// is static, so a panic here indicates a bug in `builtin.rs`.
    pub fn builtin() -> &'static Catalogue {
        static BUILTIN: LazyLock<Catalogue> = LazyLock::new(|| {
            Catalogue::new(builtin::symptoms(), builtin::conditions())
                .unwrap_or_else(|e| panic!("built-in catalogue is invalid: {e}"))
        });
        &BUILTIN
    }

    /// Check a set of records without building a catalogue.
    ///
    /// Every problem is reported, in declaration order.
    pub fn validate_parts(
        symptoms: &[Symptom],
        conditions: &[Condition],
    ) -> Vec<CatalogueError> {
        let mut errors: Vec<CatalogueError> = Vec::new();

        let mut symptom_ids = HashSet::new();
        for symptom in symptoms {
            if let Err(e) = symptom.validate() {
                errors.push(e.into());
            }
            if !symptom_ids.insert(symptom.id.as_str()) {
                errors.push(CatalogueError::DuplicateSymptom(symptom.id.clone()));
            }
        }

        let mut condition_ids = HashSet::new();
        for condition in conditions {
            if let Err(e) = condition.validate() {
                errors.push(e.into());
            }
            if !condition_ids.insert(condition.id.as_str()) {
                errors.push(CatalogueError::DuplicateCondition(condition.id.clone()));
            }

            let mut seen = HashSet::new();
            for symptom_id in &condition.common_symptoms {
                if !symptom_ids.contains(symptom_id.as_str()) {
                    errors.push(CatalogueError::UnknownSymptom {
                        condition_id: condition.id.clone(),
                        symptom_id: symptom_id.clone(),
                    });
                }
                if !seen.insert(symptom_id.as_str()) {
                    errors.push(CatalogueError::RepeatedSymptom {
                        condition_id: condition.id.clone(),
                        symptom_id: symptom_id.clone(),
                    });
                }
            }
        }

        errors
    }

    /// All symptoms, in declaration order.
    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    /// All conditions, in declaration order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Look up a symptom by id.
    pub fn symptom(&self, id: &str) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.id == id)
    }

    /// Look up a condition by id.
    pub fn condition(&self, id: &str) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.id == id)
    }

    /// Distinct symptom categories, in the order they first appear.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.symptoms
            .iter()
            .map(|s| s.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Symptoms in `category` (exact match), in declaration order.
    pub fn symptoms_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a Symptom> + 'a {
        self.symptoms.iter().filter(move |s| s.category == category)
    }

    /// Split the catalogue back into its records.
    pub fn into_parts(self) -> (Vec<Symptom>, Vec<Condition>) {
        (self.symptoms, self.conditions)
    }
}
