use symcheck_core::models::symptom::Symptom;

/// Symptoms whose name contains `term`, ignoring case.
///
/// An empty term matches everything. Input order is preserved.
pub fn filter_symptoms<'a>(symptoms: &'a [Symptom], term: &str) -> Vec<&'a Symptom> {
    let needle = term.to_lowercase();
    symptoms
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .collect()
}
