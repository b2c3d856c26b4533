//! IDNR (Thai identity card)
//!
//! The Thai identity card (Thai: บัตรประจำตัวประชาชนไทย) is an official identity
//! document issued to Thai nationals. The number is 13 digits long, the last one
//! being a check digit over the first 12.
//!
//! https://en.wikipedia.org/wiki/Thai_identity_card

use crate::error::{NormalizationError, ValidationError};
use crate::normalization::{clean, clean_lossy, NormalizationConfig};
use crate::observability::metrics::ValidationMetrics;
use crate::secondary_validation::{verify_check_digit, WeightedSum};
use crate::str_utils::split_at;
use crate::validation::{validate_structure, ValidIdentifier, ValidationResult};

pub const NAME: &str = "Thai National Identity Card Number";
pub const LOCAL_NAME: &str = "บัตรประจำตัวประชาชนไทย";
pub const ABBREVIATION: &str = "IDNR";

pub const LENGTH: usize = 13;
pub const CHECKSUM: WeightedSum =
    WeightedSum::new(&[13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1], 11);

const DELETE_CHARS: &str = " -";
const FORMAT_OFFSETS: &[usize] = &[1, 5, 10, 12];
const SEPARATOR: &str = "-";

fn normalization_config() -> NormalizationConfig {
    NormalizationConfig::new(DELETE_CHARS)
}

/// Strips spaces and dashes. Does not check the length, alphabet or checksum.
pub fn compact(input: &str) -> Result<String, NormalizationError> {
    clean(input, &normalization_config()).inspect_err(|_| {
        ValidationMetrics::new(ABBREVIATION).record_normalization_failure();
    })
}

/// Renders the number as `X-XXXX-XXXXX-XX-X`.
///
/// This is a best-effort display helper: unsafe characters are dropped and
/// invalid numbers are formatted anyway.
pub fn format(input: &str) -> String {
    format_compact(&clean_lossy(input, &normalization_config()))
}

/// Same as [format], but fails when the input contains unsafe characters.
pub fn try_format(input: &str) -> Result<String, NormalizationError> {
    compact(input).map(|value| format_compact(&value))
}

fn format_compact(value: &str) -> String {
    split_at(value, FORMAT_OFFSETS).join(SEPARATOR)
}

/// Runs the full pipeline: normalization, structure and check digit.
pub fn validate(input: &str) -> ValidationResult {
    let result = ValidationResult::from(check(input));
    ValidationMetrics::new(ABBREVIATION).record_validation(&result);
    result
}

pub fn is_valid(input: &str) -> bool {
    validate(input).is_valid()
}

pub(crate) fn check(input: &str) -> Result<ValidIdentifier, ValidationError> {
    let value = clean(input, &normalization_config())?;
    validate_structure(&value, LENGTH)?;
    verify_check_digit(&value)?;

    Ok(ValidIdentifier {
        compact: value,
        is_individual: true,
        is_company: false,
    })
}
