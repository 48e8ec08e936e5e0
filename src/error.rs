use thiserror::Error;

/// Bad input at the command line. The simulation itself cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// Pattern name not in the table
    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),

    /// Iteration count that is not a non-negative integer
    #[error("invalid iteration count `{0}`")]
    InvalidIterations(String),
}
