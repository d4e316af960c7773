use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The symptom ids a user has picked, in the order they were picked.
///
/// Never holds the same id twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present. Returns whether `id` is
    /// selected afterwards.
    pub fn toggle(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if let Some(pos) = self.ids.iter().position(|s| *s == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut selection = Selection::new();
        for id in iter {
            let id = id.into();
            if !selection.contains(&id) {
                selection.ids.push(id);
            }
        }
        selection
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
