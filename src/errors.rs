use thiserror::Error;

#[derive(Debug, Error)]
pub enum HceError {
    #[error("Request was considered invalid due to error: {0}")]
    InvalidRequest(#[from] anyhow::Error),
    #[error("Error identified during HCE calculation: {0}")]
    FailureInCalculation(#[from] EstimateCoreError),
    #[error("Error while writing out results: {0}")]
    ErrorInOutputWriting(anyhow::Error),
}

/// An error raised by the estimator itself. An unrecognised accommodation
/// type is the only way a calculation can fail.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EstimateCoreError {
    #[error("'{0}' is not a recognised accommodation type (expected one of 1BHK, 2BHK, 3BHK)")]
    InvalidInput(String),
}
