//! Checker state as a value.
//!
//! The presentation layer owns a [`CheckerState`] and replaces it with the
//! result of each transition. Nothing here is shared or global.

use serde::{Deserialize, Serialize};
use symcheck_catalogue::Catalogue;
use symcheck_core::models::condition::Condition;
use symcheck_core::models::symptom::Symptom;
use ts_rs::TS;

use crate::scoring::match_conditions;
use crate::search::filter_symptoms;
use crate::selection::Selection;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckerState {
    pub search_term: String,
    pub selection: Selection,
    /// Ids of the matched conditions, best first. `None` until the user
    /// analyzes; `Some(vec![])` means nothing matched.
    pub results: Option<Vec<String>>,
}

impl CheckerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_term(self, term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            ..self
        }
    }

    /// Select or deselect a symptom. Any shown results are dropped, since
    /// they no longer describe the selection.
    pub fn toggle_symptom(mut self, id: impl Into<String>) -> Self {
        self.selection.toggle(id);
        self.results = None;
        self
    }

    pub fn can_analyze(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Run the matching engine over the current selection. Does nothing
    /// while the selection is empty.
    pub fn analyze(mut self, catalogue: &Catalogue) -> Self {
        if !self.can_analyze() {
            return self;
        }
        let matched = match_conditions(catalogue, self.selection.ids())
            .into_iter()
            .map(|c| c.id.clone())
            .collect();
        self.results = Some(matched);
        self
    }

    /// Leave the results view, keeping the selection.
    pub fn back(mut self) -> Self {
        self.results = None;
        self
    }

    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn showing_results(&self) -> bool {
        self.results.is_some()
    }

    /// Symptoms to offer for selection under the current search term.
    pub fn visible_symptoms<'a>(&self, catalogue: &'a Catalogue) -> Vec<&'a Symptom> {
        filter_symptoms(catalogue.symptoms(), &self.search_term)
    }

    /// Selected symptoms resolved to records, in selection order. Ids the
    /// catalogue does not know are skipped.
    pub fn selected_symptoms<'a>(&self, catalogue: &'a Catalogue) -> Vec<&'a Symptom> {
        self.selection
            .ids()
            .iter()
            .filter_map(|id| catalogue.symptom(id))
            .collect()
    }

    /// The last analysis resolved to condition records.
    pub fn result_conditions<'a>(&self, catalogue: &'a Catalogue) -> Option<Vec<&'a Condition>> {
        self.results.as_ref().map(|ids| {
            ids.iter()
                .filter_map(|id| catalogue.condition(id))
                .collect()
        })
    }
}
