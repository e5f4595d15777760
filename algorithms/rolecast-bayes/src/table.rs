use ndarray::{Array1, ArrayView1};
use rolecast::FixedLabels;
use std::collections::BTreeMap;
use std::marker::PhantomData;

/// Conditional probability table of a trained model
///
/// Maps every feature observed during training to one smoothed probability per label. Rows are
/// dense and follow the fixed label order of `L`, so every row has an entry for every label.
/// The table owns its data and is read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalTable<L> {
    rows: BTreeMap<String, Array1<f64>>,
    labels: PhantomData<L>,
}

impl<L: FixedLabels> ConditionalTable<L> {
    pub(crate) fn from_rows(rows: BTreeMap<String, Array1<f64>>) -> Self {
        debug_assert!(rows.values().all(|x| x.len() == L::classes().len()));

        ConditionalTable {
            rows,
            labels: PhantomData,
        }
    }

    /// Number of distinct features
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, feature: &str) -> bool {
        self.rows.contains_key(feature)
    }

    /// Smoothed probability of `feature` given `label`
    pub fn probability(&self, feature: &str, label: L) -> Option<f64> {
        self.rows.get(feature).map(|x| x[label.index()])
    }

    /// Probability row of `feature` in fixed label order
    pub fn row(&self, feature: &str) -> Option<ArrayView1<'_, f64>> {
        self.rows.get(feature).map(|x| x.view())
    }

    /// Probability row of `feature` paired with its labels
    pub fn distribution(&self, feature: &str) -> Option<Vec<(L, f64)>> {
        self.rows.get(feature).map(|x| {
            L::classes()
                .iter()
                .copied()
                .zip(x.iter().copied())
                .collect()
        })
    }

    /// Iterate over features in ascending name order together with their rows
    pub fn iter(&self) -> impl Iterator<Item = (&str, ArrayView1<'_, f64>)> + '_ {
        self.rows.iter().map(|(k, v)| (k.as_str(), v.view()))
    }
}
