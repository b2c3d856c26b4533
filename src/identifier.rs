use crate::error::NormalizationError;
use crate::thai_idnr;
use crate::validation::ValidationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierInfo {
    pub name: &'static str,
    /// Name of the identifier in the language of the issuing country
    pub local_name: &'static str,
    pub abbreviation: &'static str,
}

/// Common surface of every identifier family, so callers supporting several
/// of them can treat them uniformly.
pub trait IdentifierValidator: Send + Sync {
    const INFO: IdentifierInfo;

    /// Canonical form of the input, without any structural validation
    fn compact(&self, input: &str) -> Result<String, NormalizationError>;

    /// Human readable form of the input. Never fails.
    fn format(&self, input: &str) -> String;

    fn validate(&self, input: &str) -> ValidationResult;
}

pub struct ThaiIdnr;

impl IdentifierValidator for ThaiIdnr {
    const INFO: IdentifierInfo = IdentifierInfo {
        name: thai_idnr::NAME,
        local_name: thai_idnr::LOCAL_NAME,
        abbreviation: thai_idnr::ABBREVIATION,
    };

    fn compact(&self, input: &str) -> Result<String, NormalizationError> {
        thai_idnr::compact(input)
    }

    fn format(&self, input: &str) -> String {
        thai_idnr::format(input)
    }

    fn validate(&self, input: &str) -> ValidationResult {
        thai_idnr::validate(input)
    }
}
