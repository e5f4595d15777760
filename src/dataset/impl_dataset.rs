use super::{Dataset, FeatureSet, FixedLabels};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use std::iter::FromIterator;

impl<L> Dataset<L> {
    pub fn new(feature_sets: Vec<FeatureSet<L>>) -> Self {
        Dataset { feature_sets }
    }

    /// Return the known label of every feature set, `None` for unlabelled ones
    pub fn targets(&self) -> impl Iterator<Item = Option<&L>> {
        self.feature_sets.iter().map(|x| x.label())
    }

    /// Return a shuffled copy of the dataset
    pub fn shuffle<R: Rng>(mut self, rng: &mut R) -> Self {
        self.feature_sets.shuffle(rng);
        self
    }

    /// Split dataset into two disjoint chunks
    ///
    /// This function splits the feature sets in two disjoint chunks. The first chunk holds
    /// `ceil(len * ratio)` feature sets in their current order, the second holds the rest.
    /// Shuffle first if the order carries any structure.
    pub fn split_with_ratio(mut self, ratio: f32) -> (Self, Self) {
        let n = (self.feature_sets.len() as f32 * ratio).ceil() as usize;
        let n = n.min(self.feature_sets.len());
        let second = self.feature_sets.split_off(n);

        (Dataset::new(self.feature_sets), Dataset::new(second))
    }
}

impl<L: FixedLabels> Dataset<L> {
    /// Count the labelled feature sets per label
    ///
    /// Labels without any feature set are absent from the map.
    pub fn label_frequencies(&self) -> HashMap<L, usize> {
        let mut freqs = HashMap::new();
        for label in self.targets().flatten() {
            *freqs.entry(*label).or_insert(0) += 1;
        }

        freqs
    }
}

impl<L> From<Vec<FeatureSet<L>>> for Dataset<L> {
    fn from(feature_sets: Vec<FeatureSet<L>>) -> Self {
        Dataset::new(feature_sets)
    }
}

impl<L> FromIterator<FeatureSet<L>> for Dataset<L> {
    fn from_iter<I: IntoIterator<Item = FeatureSet<L>>>(iter: I) -> Self {
        Dataset::new(iter.into_iter().collect())
    }
}

impl<L> IntoIterator for Dataset<L> {
    type Item = FeatureSet<L>;
    type IntoIter = std::vec::IntoIter<FeatureSet<L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.feature_sets.into_iter()
    }
}
