use std::error::Error;

use crate::{
    dataset::FeatureSet,
    traits::{Extractable, Trainable},
};

/// A set of hyperparameters whose values have not been checked for validity. A reference to the
/// checked hyperparameters can only be obtained after checking has completed. If the
/// `Extractable` or `Trainable` traits have been implemented on the checked hyperparameters, they
/// will also be implemented on the unchecked hyperparameters with the checking step done
/// automatically.
///
/// The hyperparameter validation done in `check_ref()` and `check()` should be identical.
pub trait ParamGuard {
    /// The checked hyperparameters
    type Checked;
    /// Error type resulting from failed hyperparameter checking
    type Error: Error;

    /// Checks the hyperparameters and returns a reference to the checked hyperparameters if
    /// successful
    fn check_ref(&self) -> Result<&Self::Checked, Self::Error>;

    /// Checks the hyperparameters and returns the checked hyperparameters if successful
    fn check(self) -> Result<Self::Checked, Self::Error>;
}

/// Performs the checking step and calls `build` on the checked hyperparameters. Returns error if
/// checking was unsuccessful.
impl<R, L, P> Extractable<R, L> for P
where
    P: ParamGuard,
    P::Checked: Extractable<R, L>,
    crate::error::Error: From<P::Error>,
{
    fn build(&self, record: &R, known_label: Option<L>) -> crate::error::Result<FeatureSet<L>> {
        let checked = self.check_ref()?;
        checked.build(record, known_label)
    }
}

/// Performs checking step and calls `train` on the checked hyperparameters. If checking failed,
/// the checking error is converted to the original error type of `Trainable` and returned.
impl<L, E, P> Trainable<L, E> for P
where
    P: ParamGuard,
    P::Checked: Trainable<L, E>,
    E: Error + From<crate::error::Error> + From<P::Error>,
{
    type Object = <<P as ParamGuard>::Checked as Trainable<L, E>>::Object;

    fn train(&self, training_set: &[FeatureSet<L>]) -> Result<Self::Object, E> {
        let checked = self.check_ref()?;
        checked.train(training_set)
    }
}
