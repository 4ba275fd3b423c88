use std::collections::BTreeSet;
use std::sync::Arc;

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Species filter
// ---------------------------------------------------------------------------

/// Return indices of records whose species name is in `selected`, in order.
///
/// An empty selection yields no indices. Names that are not part of the
/// species domain simply never match.
pub fn filtered_indices(records: &[Record], selected: &BTreeSet<String>) -> Vec<usize> {
    if selected.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| selected.contains(r.species.name()))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// FilteredView
// ---------------------------------------------------------------------------

/// The sub-sequence of a [`Dataset`] matching a species selection.
///
/// Shares the dataset rather than copying rows. Two views compare equal
/// when they yield the same records in the same order.
#[derive(Debug, Clone)]
pub struct FilteredView {
    dataset: Arc<Dataset>,
    indices: Vec<usize>,
}

impl FilteredView {
    pub fn new(dataset: &Arc<Dataset>, selected: &BTreeSet<String>) -> Self {
        FilteredView {
            dataset: Arc::clone(dataset),
            indices: filtered_indices(dataset.records(), selected),
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The `i`-th record of the view.
    pub fn get(&self, i: usize) -> Option<&Record> {
        self.indices
            .get(i)
            .and_then(|&idx| self.dataset.records().get(idx))
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        let all = self.dataset.records();
        self.indices.iter().map(move |&idx| &all[idx])
    }
}

impl PartialEq for FilteredView {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.dataset, &other.dataset) {
            return self.indices == other.indices;
        }
        self.len() == other.len() && self.records().eq(other.records())
    }
}
