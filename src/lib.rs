// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod error;
mod identifier;
mod normalization;
mod observability;
mod secondary_validation;
mod str_utils;
mod validation;

pub mod thai_idnr;

// This is the public API of the identifier library
pub use error::{NormalizationError, ValidationError};
pub use identifier::{IdentifierInfo, IdentifierValidator, ThaiIdnr};
pub use normalization::{clean, clean_lossy, NormalizationConfig};
pub use observability::labels::Labels;
pub use secondary_validation::{
    weighted_sum, SecondaryValidator, ThaiIdnrChecksum, Validator, WeightedSum,
};
pub use str_utils::split_at;
pub use validation::{validate_structure, ValidIdentifier, ValidationResult};
