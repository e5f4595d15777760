use ndarray::Array1;
use rolecast::traits::{Predictable, Trainable};
use rolecast::{FeatureSet, FixedLabels};
use std::collections::BTreeMap;
use std::fmt;

use crate::base_nb::{first_max, NaiveBayes};
use crate::error::{NaiveBayesError, Result};
use crate::hyperparams::{FeatureNbParams, FeatureNbValidParams};
use crate::table::ConditionalTable;

impl<L: FixedLabels> Trainable<L, NaiveBayesError> for FeatureNbValidParams<L> {
    type Object = FeatureNb<L>;

    /// Estimate the conditional probability table
    ///
    /// The probability of a feature given a label is `(count + alpha) / tally`, where `count` is
    /// the number of training instances of the label carrying the feature and `tally` the number
    /// of training instances of the label.
    fn train(&self, training_set: &[FeatureSet<L>]) -> Result<Self::Object> {
        if training_set.is_empty() {
            return Err(NaiveBayesError::EmptyTrainingSet);
        }

        let nclasses = L::classes().len();

        // count training instances per label
        let labels = training_set
            .iter()
            .enumerate()
            .map(|(i, x)| x.label().copied().ok_or(NaiveBayesError::MissingLabel(i)))
            .collect::<Result<Vec<L>>>()?;

        let mut tally = Array1::<usize>::zeros(nclasses);
        for label in &labels {
            tally[label.index()] += 1;
        }

        // every label needs at least one instance, otherwise its rows divide by zero
        if let Some(label) = L::classes().iter().find(|x| tally[x.index()] == 0) {
            return Err(NaiveBayesError::InsufficientData(label.to_string()));
        }

        // count co-occurrences of feature and label
        let mut counts: BTreeMap<&str, Array1<usize>> = BTreeMap::new();
        for (feature_set, label) in training_set.iter().zip(&labels) {
            let idx = label.index();
            for name in feature_set.names() {
                counts
                    .entry(name)
                    .or_insert_with(|| Array1::zeros(nclasses))[idx] += 1;
            }
        }

        let tally = tally.mapv(|x| x as f64);
        let rows = counts
            .into_iter()
            .map(|(name, count)| {
                let row = (count.mapv(|x| x as f64) + self.alpha()) / &tally;
                (name.to_string(), row)
            })
            .collect::<BTreeMap<_, _>>();

        log::debug!(
            "trained feature naive bayes on {} feature sets with {} distinct features, label tally {}",
            training_set.len(),
            rows.len(),
            tally
        );

        Ok(FeatureNb {
            table: ConditionalTable::from_rows(rows),
        })
    }
}

/// Fitted feature-set Naive Bayes classifier.
///
/// See [FeatureNbParams] for more information on the hyper-parameters.
///
/// # Model assumptions
///
/// The family of Naive Bayes classifiers assume independence between features. A record is
/// scored per label by summing the log probabilities of its features found in the
/// [`ConditionalTable`], features never seen during training are skipped. No label prior enters
/// the score.
///
/// # Model usage example
///
/// ```rust
/// use rolecast::prelude::*;
/// use rolecast_bayes::{FeatureNb, Result};
///
/// let training_set = vec![
///     FeatureSet::from_names(vec!["player=yay", "kills>14"], Some(Role::Duelist)),
///     FeatureSet::from_names(vec!["player=nats"], Some(Role::Sentinel)),
///     FeatureSet::from_names(vec!["player=sova", "assists>6"], Some(Role::Initiator)),
///     FeatureSet::from_names(vec!["player=boaster", "assists>6"], Some(Role::Controller)),
/// ];
///
/// let model = FeatureNb::params().train(&training_set)?;
///
/// let query = FeatureSet::from_names(vec!["kills>14", "map=lotus"], None);
/// assert_eq!(model.gamma(&query), Role::Duelist);
///
/// for report in model.present_features(2)? {
///     println!("{}", report);
/// }
/// # Result::Ok(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureNb<L> {
    table: ConditionalTable<L>,
}

impl<L: FixedLabels> FeatureNb<L> {
    /// Construct a new set of hyperparameters
    pub fn params() -> FeatureNbParams<L> {
        FeatureNbParams::new()
    }

    /// The trained conditional probability table
    pub fn table(&self) -> &ConditionalTable<L> {
        &self.table
    }

    /// Rank the features of the table by how strongly they point to a single label
    ///
    /// Features are ordered by the maximum of their probability row, descending. Features with
    /// equal maxima keep ascending name order. Each entry carries the dominant label, the first
    /// label in fixed order reaching the maximum. At most `top_n` entries are returned.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](rolecast::Error::InvalidArgument) if `top_n` is zero.
    pub fn present_features(&self, top_n: usize) -> Result<Vec<FeatureReport<L>>> {
        if top_n < 1 {
            return Err(rolecast::Error::InvalidArgument(format!(
                "top_n should be at least 1, but is {}",
                top_n
            ))
            .into());
        }

        let mut ranked = self
            .table
            .iter()
            .map(|(feature, row)| {
                let idx = first_max(row);
                FeatureReport {
                    feature: feature.to_string(),
                    label: L::classes()[idx],
                    probability: row[idx],
                }
            })
            .collect::<Vec<_>>();

        // stable sort, name order survives among equal maxima
        ranked.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        ranked.truncate(top_n);

        Ok(ranked)
    }
}

impl<L: FixedLabels> NaiveBayes<L> for FeatureNb<L> {
    // Sum log probabilities of the known features, unseen features contribute nothing
    fn joint_log_likelihood(&self, feature_set: &FeatureSet<L>) -> Array1<f64> {
        let mut jll = Array1::zeros(L::classes().len());
        for name in feature_set.names() {
            if let Some(row) = self.table.row(name) {
                jll += &row.mapv(f64::ln);
            }
        }

        jll
    }
}

impl<L: FixedLabels> Predictable<L> for FeatureNb<L> {
    fn gamma(&self, feature_set: &FeatureSet<L>) -> L {
        self.predict_label(feature_set)
    }
}

/// A single entry of [`FeatureNb::present_features`]
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureReport<L> {
    pub feature: String,
    pub label: L,
    pub probability: f64,
}

impl<L: fmt::Display> fmt::Display for FeatureReport<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} predicts {} with probability {:.4}",
            self.feature, self.label, self.probability
        )
    }
}
