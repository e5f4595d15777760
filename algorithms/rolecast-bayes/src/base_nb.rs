use ndarray::{Array1, ArrayView1};
use rolecast::{FeatureSet, FixedLabels};

// Trait computing predictions for fitted Naive Bayes models
pub trait NaiveBayes<L: FixedLabels> {
    /// Compute the unnormalized posterior log probabilities.
    /// The result holds one summed log probability per label, in fixed label order.
    fn joint_log_likelihood(&self, feature_set: &FeatureSet<L>) -> Array1<f64>;

    /// Return the label with the highest joint log likelihood
    ///
    /// Ties go to the label appearing first in the fixed label order.
    fn predict_label(&self, feature_set: &FeatureSet<L>) -> L {
        let jll = self.joint_log_likelihood(feature_set);

        L::classes()[first_max(jll.view())]
    }

    /// Compute log-probability estimates wrt labels, in fixed label order.
    ///
    /// The joint log likelihoods are normalized with a log-sum-exp, which is a softmax in log
    /// space.
    fn predict_log_proba(&self, feature_set: &FeatureSet<L>) -> Array1<f64> {
        let jll = self.joint_log_likelihood(feature_set);

        let max = jll.fold(f64::NEG_INFINITY, |a, b| a.max(*b));
        let log_prob_x = max + jll.mapv(|x| (x - max).exp()).sum().ln();

        jll - log_prob_x
    }

    /// Compute probability estimates wrt labels, in fixed label order.
    fn predict_proba(&self, feature_set: &FeatureSet<L>) -> Array1<f64> {
        self.predict_log_proba(feature_set).mapv(|v| v.exp())
    }
}

/// Index of the maximum, the first one wins among equal maxima
///
/// Returns `0` for an empty view.
pub(crate) fn first_max(scores: ArrayView1<f64>) -> usize {
    let mut best = 0;
    for (i, score) in scores.iter().enumerate().skip(1) {
        if *score > scores[best] {
            best = i;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::first_max;
    use ndarray::array;

    #[test]
    fn first_max_prefers_earliest_tie() {
        assert_eq!(first_max(array![1.0, 3.0, 3.0, 2.0].view()), 1);
        assert_eq!(first_max(array![2.0, 2.0].view()), 0);
        assert_eq!(first_max(array![-1.0, -0.5].view()), 1);
        assert_eq!(first_max(array![0.5].view()), 0);
    }
}
