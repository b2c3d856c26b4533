mod thai_idnr_checksum;
mod weighted_sum;

pub(crate) use crate::secondary_validation::thai_idnr_checksum::verify_check_digit;
pub use crate::secondary_validation::thai_idnr_checksum::ThaiIdnrChecksum;
pub use crate::secondary_validation::weighted_sum::{weighted_sum, WeightedSum};
use serde::{Deserialize, Serialize};

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}

/// Checksum validators that can be selected from configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum SecondaryValidator {
    ThaiIdnrChecksum,
}

impl Validator for SecondaryValidator {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        match self {
            SecondaryValidator::ThaiIdnrChecksum => ThaiIdnrChecksum.is_valid_match(regex_match),
        }
    }
}
