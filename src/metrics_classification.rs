//! Common metrics for performance evaluation of classifier
//!
//! Scoring is essential for classification tasks. This module implements a confusion matrix over
//! a fixed label set, with precision, recall, accuracy and f1-score derived from it.
use std::fmt;
use std::marker::PhantomData;

use ndarray::prelude::*;

use crate::dataset::{Dataset, FixedLabels};
use crate::error::{Error, Result};

/// Confusion matrix for multi-label evaluation
///
/// A confusion matrix shows predictions in a matrix, where rows correspond to target and columns
/// to predicted. The diagonal entries are correct predictions. Rows and columns follow the fixed
/// label order.
#[derive(Clone, PartialEq)]
pub struct ConfusionMatrix<L> {
    matrix: Array2<usize>,
    members: PhantomData<L>,
}

impl<L: FixedLabels> ConfusionMatrix<L> {
    fn from_pairs<'a, I: Iterator<Item = (&'a L, &'a L)>>(pairs: I) -> Self {
        let n = L::classes().len();
        let mut matrix = Array2::zeros((n, n));
        for (truth, pred) in pairs {
            matrix[(truth.index(), pred.index())] += 1;
        }

        ConfusionMatrix {
            matrix,
            members: PhantomData,
        }
    }

    /// Number of samples with ground truth `truth` predicted as `pred`
    pub fn count(&self, truth: L, pred: L) -> usize {
        self.matrix[(truth.index(), pred.index())]
    }

    /// Calculate precision for every class
    ///
    /// Classes which were never predicted get a precision of zero.
    pub fn precision(&self) -> Array1<f32> {
        let sum = self.matrix.sum_axis(Axis(0));

        ratio(self.matrix.diag(), sum.view())
    }

    /// Calculate recall for every class
    ///
    /// Classes absent from the ground truth get a recall of zero.
    pub fn recall(&self) -> Array1<f32> {
        let sum = self.matrix.sum_axis(Axis(1));

        ratio(self.matrix.diag(), sum.view())
    }

    /// Return mean accuracy
    pub fn accuracy(&self) -> f32 {
        let total = self.matrix.sum();
        if total == 0 {
            return 0.0;
        }

        self.matrix.diag().sum() as f32 / total as f32
    }

    /// Return beta score for every class
    pub fn f_score(&self, beta: f32) -> Array1<f32> {
        let sb = beta * beta;
        let precision = self.precision();
        let recall = self.recall();

        precision
            .iter()
            .zip(recall.iter())
            .map(|(p, r)| {
                let denom = sb * p + r;
                if denom > 0.0 {
                    (1.0 + sb) * (p * r) / denom
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// Return beta=1 score for every class
    pub fn f1_score(&self) -> Array1<f32> {
        self.f_score(1.0)
    }
}

fn ratio(num: ArrayView1<usize>, denom: ArrayView1<usize>) -> Array1<f32> {
    num.iter()
        .zip(denom.iter())
        .map(|(a, b)| if *b == 0 { 0.0 } else { *a as f32 / *b as f32 })
        .collect()
}

impl<L: FixedLabels> fmt::Debug for ConfusionMatrix<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let len = self.matrix.len_of(Axis(0));
        writeln!(f)?;
        write!(f, "{: <10}", "classes")?;
        for label in L::classes() {
            write!(f, " | {: <10}", label.to_string())?;
        }
        writeln!(f)?;

        for i in 0..len {
            write!(f, "{: <10}", L::classes()[i].to_string())?;

            for j in 0..len {
                write!(f, " | {: <10}", self.matrix[(i, j)])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Create a confusion matrix from predictions and ground truth
pub trait ToConfusionMatrix<L, T> {
    fn confusion_matrix(&self, ground_truth: T) -> Result<ConfusionMatrix<L>>;
}

impl<L: FixedLabels> ToConfusionMatrix<L, &[L]> for [L] {
    fn confusion_matrix(&self, ground_truth: &[L]) -> Result<ConfusionMatrix<L>> {
        if self.len() != ground_truth.len() {
            return Err(Error::MismatchedShapes(self.len(), ground_truth.len()));
        }

        Ok(ConfusionMatrix::from_pairs(
            ground_truth.iter().zip(self.iter()),
        ))
    }
}

/// Compare predictions with the known labels of a dataset
///
/// Every feature set of the dataset must carry a label.
impl<L: FixedLabels> ToConfusionMatrix<L, &Dataset<L>> for [L] {
    fn confusion_matrix(&self, ground_truth: &Dataset<L>) -> Result<ConfusionMatrix<L>> {
        let targets = ground_truth
            .targets()
            .enumerate()
            .map(|(i, x)| x.copied().ok_or(Error::MissingLabel(i)))
            .collect::<Result<Vec<_>>>()?;

        self.confusion_matrix(targets.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::FeatureSet;
    use crate::Role::{self, *};
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_confusion_matrix() -> Result<()> {
        let predicted = vec![Duelist, Duelist, Sentinel, Initiator, Controller, Duelist];
        let truth = vec![Duelist, Sentinel, Sentinel, Initiator, Initiator, Duelist];

        let cm = predicted.confusion_matrix(truth.as_slice())?;

        assert_eq!(cm.count(Duelist, Duelist), 2);
        assert_eq!(cm.count(Sentinel, Duelist), 1);
        assert_eq!(cm.count(Initiator, Controller), 1);
        assert_abs_diff_eq!(cm.accuracy(), 4.0 / 6.0);

        assert_abs_diff_eq!(cm.precision(), array![2. / 3., 1.0, 1.0, 0.0]);
        assert_abs_diff_eq!(cm.recall(), array![1.0, 0.5, 0.5, 0.0]);
        assert_abs_diff_eq!(
            cm.f1_score(),
            array![0.8, 2. / 3., 2. / 3., 0.0],
            epsilon = 1e-6
        );

        Ok(())
    }

    #[test]
    fn test_confusion_matrix_from_dataset() -> Result<()> {
        let valid = Dataset::new(vec![
            FeatureSet::from_names(vec!["a"], Some(Controller)),
            FeatureSet::from_names(vec!["b"], Some(Sentinel)),
        ]);

        let cm = vec![Controller, Duelist].confusion_matrix(&valid)?;
        assert_abs_diff_eq!(cm.accuracy(), 0.5);

        let unlabelled: Dataset<Role> =
            Dataset::new(vec![FeatureSet::from_names(vec!["a"], None)]);
        assert_eq!(
            vec![Controller].confusion_matrix(&unlabelled),
            Err(Error::MissingLabel(0))
        );

        Ok(())
    }

    #[test]
    fn test_mismatched_shapes() {
        let res = vec![Duelist, Duelist].confusion_matrix(&[Duelist][..]);
        assert_eq!(res, Err(Error::MismatchedShapes(2, 1)));
    }

    #[test]
    fn test_empty_accuracy() -> Result<()> {
        let cm = Vec::<Role>::new().confusion_matrix(&[][..])?;
        assert_abs_diff_eq!(cm.accuracy(), 0.0);

        Ok(())
    }
}
