//! # Feature-set Naive Bayes
//!
//! `rolecast-bayes` estimates a conditional probability table from labelled
//! [`FeatureSet`](rolecast::FeatureSet)s and predicts the most probable label of new ones.
//!
//! ## The Big Picture
//!
//! Training counts, for every feature and every label of the fixed label set, how many training
//! instances of the label carry the feature. The smoothed probability of a feature given a label
//! is `(count + alpha) / tally`, where `tally` is the number of training instances of the label
//! and `alpha` defaults to `1`. A label without any training instance makes training fail.
//!
//! Prediction sums the natural logarithms of these probabilities per label over the features of
//! the query which appear in the table. The label with the highest sum wins, ties go to the first
//! label in fixed order. A bounded confidence is available through a softmax over the sums, see
//! [`NaiveBayes::predict_proba`].
//!
//! ## Example
//!
//! There is an usage example in the `examples/` directory. To run, use:
//!
//! ```bash
//! $ cargo run --example player_roles -- player_stats.csv
//! ```
//!
mod base_nb;
mod error;
mod feature_nb;
mod hyperparams;
mod table;

pub use base_nb::NaiveBayes;
pub use error::{NaiveBayesError, Result};
pub use feature_nb::{FeatureNb, FeatureReport};
pub use hyperparams::{FeatureNbParams, FeatureNbValidParams};
pub use table::ConditionalTable;
