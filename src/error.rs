use thiserror::Error;

pub type Result<T, E = QuaternionError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuaternionError {
    #[error(
        "Invalid argument pattern ({shape}): expected up to four scalars, \
         a single quaternion, or a scalar followed by a vector"
    )]
    InvalidArgument { shape: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseQuaternionError {
    #[error("Invalid quaternion format")]
    InvalidFormat,
    #[error("Expected 4 terms, found {0}")]
    TermCount(usize),
    #[error("Term `{term}` does not end with `{unit}`")]
    MissingUnit { term: String, unit: char },
}
