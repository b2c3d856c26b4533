use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an identifier was rejected. Each kind maps to the stage of the
/// validation pipeline that produced it.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Error, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ValidationError {
    /// The value contains characters outside the identifier alphabet
    #[error("The identifier contains invalid characters")]
    InvalidFormat,

    /// The compact value does not have the required number of characters
    #[error("The identifier has an invalid length")]
    InvalidLength,

    /// The trailing check digit does not match the computed one
    #[error("The identifier checksum or check digit is invalid")]
    InvalidChecksum,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationError {
    #[error("Unsafe character {character:?} at position {index}")]
    UnsafeCharacter { character: char, index: usize },
}

impl From<NormalizationError> for ValidationError {
    fn from(err: NormalizationError) -> Self {
        match err {
            NormalizationError::UnsafeCharacter { .. } => ValidationError::InvalidFormat,
        }
    }
}

impl From<ValidationError> for i64 {
    fn from(value: ValidationError) -> i64 {
        match value {
            ValidationError::InvalidFormat => -1,
            ValidationError::InvalidLength => -2,
            ValidationError::InvalidChecksum => -3,
        }
    }
}
