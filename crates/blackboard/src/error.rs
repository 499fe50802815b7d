use thiserror::Error;

use crate::ValueType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlackboardError {
    #[error("blackboard key name must not be empty")]
    InvalidKeyName,

    #[error("blackboard has no value for key `{0}`")]
    MissingKey(String),

    #[error("blackboard type mismatch for key `{key}`: requested {expected}, stored {actual}")]
    TypeMismatch {
        key: String,
        expected: ValueType,
        actual: ValueType,
    },
}

pub type Result<T> = std::result::Result<T, BlackboardError>;
