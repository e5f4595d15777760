use crate::NaiveBayesError;
use rolecast::ParamGuard;
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A verified hyper-parameter set ready for the estimation of a feature-set Naive Bayes model
///
/// See [`FeatureNbParams`](crate::FeatureNbParams) for more information.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", bound = "")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureNbValidParams<L> {
    // Additive smoothing numerator
    pub(crate) alpha: f64,
    // Phantom data for label type
    #[cfg_attr(feature = "serde", serde(skip))]
    label: PhantomData<L>,
}

impl<L> FeatureNbValidParams<L> {
    /// Get the additive smoothing numerator
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

/// A hyper-parameter set during construction
///
/// The parameter set can be verified into a
/// [`FeatureNbValidParams`](crate::FeatureNbValidParams) by calling
/// [ParamGuard::check](Self::check). It is also possible to directly train a model with
/// [Trainable::train](rolecast::traits::Trainable::train) which implicitly verifies the
/// parameter set prior to the model estimation and forwards any error.
///
/// # Parameters
/// | Name | Default | Purpose | Range |
/// | :--- | :--- | :--- | :--- |
/// | [alpha](Self::alpha) | `1` | Additive (Laplace) smoothing added to every co-occurrence count, keeps probabilities of unseen feature/label combinations positive | `(0, inf)` |
///
/// # Errors
///
/// The following errors can come from invalid hyper-parameters:
///
/// Returns [`InvalidSmoothing`](NaiveBayesError::InvalidSmoothing) if the smoothing
/// parameter is not positive or not finite.
///
/// # Example
///
/// ```rust
/// use rolecast::prelude::*;
/// use rolecast_bayes::{FeatureNbParams, Result};
///
/// let training_set = vec![
///     FeatureSet::from_names(vec!["map=ascent", "kills>14"], Some(Role::Duelist)),
///     FeatureSet::from_names(vec!["map=ascent"], Some(Role::Sentinel)),
///     FeatureSet::from_names(vec!["map=bind", "assists>6"], Some(Role::Initiator)),
///     FeatureSet::from_names(vec!["map=haven"], Some(Role::Controller)),
/// ];
///
/// // create a new parameter set with smoothing parameter equal `1`
/// let unchecked_params = FeatureNbParams::new().alpha(1.0);
///
/// // train with the unchecked parameter set
/// let model = unchecked_params.train(&training_set)?;
///
/// // transform into a verified parameter set
/// let checked_params = unchecked_params.check()?;
///
/// // training with verified parameters only fails on the training data
/// let model = checked_params.train(&training_set)?;
///
/// let query = FeatureSet::from_names(vec!["kills>14"], None);
/// assert_eq!(model.gamma(&query), Role::Duelist);
/// # Result::Ok(())
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", bound = "")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureNbParams<L>(FeatureNbValidParams<L>);

impl<L> Default for FeatureNbParams<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> FeatureNbParams<L> {
    /// Create new [FeatureNbParams] set with default values for its parameters
    pub fn new() -> Self {
        Self(FeatureNbValidParams {
            alpha: 1.0,
            label: PhantomData,
        })
    }

    /// Specifies the additive smoothing numerator
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.0.alpha = alpha;
        self
    }
}

impl<L> ParamGuard for FeatureNbParams<L> {
    type Checked = FeatureNbValidParams<L>;
    type Error = NaiveBayesError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        let alpha = self.0.alpha;
        if !alpha.is_finite() || alpha <= 0.0 {
            Err(NaiveBayesError::InvalidSmoothing(alpha))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}
