use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("Cannot set a vector with a null magnitude")]
    ZeroMagnitude,
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),
}

pub type Status = Result<(), VectorError>;

pub type VectorResult<T> = Result<T, VectorError>;

pub fn type_mismatch(msg: impl Into<String>) -> VectorError {
    VectorError::TypeMismatch(msg.into())
}
