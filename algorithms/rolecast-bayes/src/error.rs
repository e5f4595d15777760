use thiserror::Error;

/// Simplified `Result` using [`NaiveBayesError`](crate::NaiveBayesError) as error type
pub type Result<T> = std::result::Result<T, NaiveBayesError>;

/// Error variants from hyper-parameter construction or model estimation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NaiveBayesError {
    /// The training collection holds no feature set
    #[error("cannot train on an empty training set")]
    EmptyTrainingSet,
    /// A label of the fixed set has no training instance
    #[error("no training instance carries the label `{0}`")]
    InsufficientData(String),
    /// A training feature set without known label
    #[error("training feature set {0} carries no label")]
    MissingLabel(usize),
    /// Invalid smoothing parameter
    #[error("smoothing parameter should be positive and finite, but is {0}")]
    InvalidSmoothing(f64),
    #[error(transparent)]
    BaseCrate(#[from] rolecast::Error),
}
