//! `rolecast` classifies competitive-game player records into a fixed set of roles.
//!
//! ## The Big Picture
//!
//! A classifier is built from three capabilities, each expressed as a trait in [`traits`]:
//!
//! * [`Extractable`](traits::Extractable): turn a raw [`Record`] into a [`FeatureSet`] of named
//!   features,
//! * [`Trainable`](traits::Trainable): estimate a model from labelled feature sets,
//! * [`Predictable`](traits::Predictable): assign the most probable label to a feature set.
//!
//! This crate holds the shared feature model, the [`Role`] label set, the player feature
//! extractor, the dataset container and classification metrics. The Naive Bayes estimator lives in
//! `rolecast-bayes` and CSV loading in `rolecast-datasets`.
//!
//! ## Configuration
//!
//! Every configurable stage is driven by a parameter set implementing [`ParamGuard`]. Unchecked
//! parameter sets can be used directly, they are verified right before extraction or training.
//!

pub mod dataset;
pub mod error;
mod extract;
mod metrics_classification;
mod param_guard;
pub mod prelude;
mod record;
mod role;
pub mod traits;

pub use dataset::{Dataset, Feature, FeatureSet, FeatureValue, FixedLabels};
pub use error::Error;
pub use extract::{PlayerColumns, PlayerExtractor, PlayerExtractorParams};
pub use param_guard::ParamGuard;
pub use record::Record;
pub use role::Role;

/// Common metrics functions for classification
pub mod metrics {
    pub use crate::metrics_classification::{ConfusionMatrix, ToConfusionMatrix};
}
