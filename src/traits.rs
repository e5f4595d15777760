//! Provide traits for the different classifier stages
//!
//! A classifier passes through three capabilities:
//!
//! * [`Extractable`] turns a raw record into a [`FeatureSet`]
//! * [`Trainable`] estimates a model from a collection of labelled feature sets
//! * [`Predictable`] is implemented by the trained model and assigns labels
//!
//! Hyper-parameter sets are the untrained state: they only implement [`Trainable`]. The object
//! returned by training is immutable and only implements [`Predictable`], retraining always
//! produces a new object.

use crate::dataset::FeatureSet;
use crate::error::Result;
use std::error::Error;

/// Feature extraction
///
/// Converts a single raw record into a set of named features. Implementations are pure, the same
/// record always produces the same feature set.
pub trait Extractable<R, L> {
    fn build(&self, record: &R, known_label: Option<L>) -> Result<FeatureSet<L>>;
}

/// Supervised estimation
///
/// Consumes a training collection and returns a trained object. The collection is only borrowed,
/// the returned object owns all of its state.
pub trait Trainable<L, E: Error> {
    type Object;

    fn train(&self, training_set: &[FeatureSet<L>]) -> std::result::Result<Self::Object, E>;
}

/// Label assignment with a trained model
///
/// The label of the input feature set is never consulted.
pub trait Predictable<L> {
    /// Return the most probable label for a single feature set
    fn gamma(&self, feature_set: &FeatureSet<L>) -> L;

    /// Assign a label to every feature set in the batch
    fn predict(&self, feature_sets: &[FeatureSet<L>]) -> Vec<L> {
        feature_sets.iter().map(|x| self.gamma(x)).collect()
    }
}
