use std::collections::HashSet;

use serde::Serialize;
use symcheck_catalogue::Catalogue;
use symcheck_core::models::condition::Condition;

/// Maximum number of conditions returned by [`match_conditions`].
pub const MAX_RESULTS: usize = 3;

/// How well one condition fits a selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionMatch<'a> {
    pub condition: &'a Condition,
    /// Distinct selected ids found in the condition's common symptoms.
    pub match_count: usize,
    /// `match_count` as a percentage of the distinct selection size.
    pub match_percentage: f64,
    /// The matched ids, in the condition's own symptom order.
    pub matched_symptoms: Vec<&'a str>,
}

/// Score every condition against `selected`.
///
/// Duplicate ids count once. Unknown ids never match but still count toward
/// the selection size. Conditions with no overlap are dropped; the rest are
/// ordered by descending percentage with ties left in catalogue order.
/// An empty selection yields no matches.
pub fn score_conditions<'a, I, S>(
    catalogue: &'a Catalogue,
    selected: I,
) -> Vec<ConditionMatch<'a>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let distinct: HashSet<String> = selected
        .into_iter()
        .map(|id| id.as_ref().to_string())
        .collect();
    if distinct.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<ConditionMatch<'a>> = catalogue
        .conditions()
        .iter()
        .filter_map(|condition| {
            // Catalogue validation guarantees common_symptoms has no repeats,
            // so this counts distinct selected ids.
            let matched_symptoms: Vec<&str> = condition
                .common_symptoms
                .iter()
                .map(String::as_str)
                .filter(|id| distinct.contains(*id))
                .collect();
            if matched_symptoms.is_empty() {
                return None;
            }
            let match_count = matched_symptoms.len();
            Some(ConditionMatch {
                condition,
                match_count,
                match_percentage: match_count as f64 / distinct.len() as f64 * 100.0,
                matched_symptoms,
            })
        })
        .collect();

    // sort_by is stable: equal scores keep declaration order.
    matches.sort_by(|a, b| b.match_percentage.total_cmp(&a.match_percentage));

    tracing::debug!(
        selected = distinct.len(),
        candidates = matches.len(),
        "scored conditions"
    );
    matches
}

/// The top [`MAX_RESULTS`] entries of [`score_conditions`].
pub fn rank_conditions<'a, I, S>(
    catalogue: &'a Catalogue,
    selected: I,
) -> Vec<ConditionMatch<'a>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut matches = score_conditions(catalogue, selected);
    matches.truncate(MAX_RESULTS);
    matches
}

/// The conditions most consistent with `selected`, best first, at most
/// [`MAX_RESULTS`] of them.
pub fn match_conditions<'a, I, S>(
    catalogue: &'a Catalogue,
    selected: I,
) -> Vec<&'a Condition>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    rank_conditions(catalogue, selected)
        .into_iter()
        .map(|m| m.condition)
        .collect()
}
