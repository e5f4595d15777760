//! Error types in rolecast
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("invalid argument {0}")]
    InvalidArgument(String),
    #[error("required field `{0}` is missing from the record")]
    MissingField(String),
    #[error("field `{field}` holds invalid value `{value}`")]
    InvalidField { field: String, value: String },
    #[error("unknown label `{0}`")]
    UnknownLabel(String),
    #[error("feature set {0} carries no label")]
    MissingLabel(usize),
    #[error("mismatched shapes: {0} predictions for {1} targets")]
    MismatchedShapes(usize, usize),
}
