use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A value that went through the full validation pipeline.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ValidIdentifier {
    pub compact: String,
    pub is_individual: bool,
    pub is_company: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult {
    Valid(ValidIdentifier),
    Invalid { error: ValidationError },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// The compact value, only available when the identifier is valid
    pub fn compact(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid(valid) => Some(&valid.compact),
            ValidationResult::Invalid { .. } => None,
        }
    }

    pub fn error(&self) -> Option<ValidationError> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid { error } => Some(*error),
        }
    }
}

impl From<Result<ValidIdentifier, ValidationError>> for ValidationResult {
    fn from(result: Result<ValidIdentifier, ValidationError>) -> Self {
        match result {
            Ok(valid) => ValidationResult::Valid(valid),
            Err(error) => ValidationResult::Invalid { error },
        }
    }
}

/// Checks that `value` has exactly `length` characters, all of them ASCII digits.
///
/// The length is checked first: a value that is both too long and non-numeric
/// is reported as [ValidationError::InvalidLength].
pub fn validate_structure(value: &str, length: usize) -> Result<(), ValidationError> {
    if value.chars().count() != length {
        return Err(ValidationError::InvalidLength);
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_validate_structure() {
        let test_cases = vec![
            ("3100600445635", Ok(())),
            // checksum is not checked here
            ("3100600445636", Ok(())),
            ("12345", Err(ValidationError::InvalidLength)),
            ("", Err(ValidationError::InvalidLength)),
            ("123456789012A", Err(ValidationError::InvalidFormat)),
            ("12345678901٢3", Err(ValidationError::InvalidFormat)),
            // length wins over format
            ("ABCDEFGHIJKLMN", Err(ValidationError::InvalidLength)),
            // 13 characters, more bytes
            ("3100600445Àñô", Err(ValidationError::InvalidFormat)),
        ];

        for (input, expected) in test_cases {
            assert_eq!(validate_structure(input, 13), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_result_accessors() {
        let valid = ValidationResult::Valid(ValidIdentifier {
            compact: "3100600445635".to_string(),
            is_individual: true,
            is_company: false,
        });
        assert!(valid.is_valid());
        assert_eq!(valid.compact(), Some("3100600445635"));
        assert_eq!(valid.error(), None);

        let invalid = ValidationResult::Invalid {
            error: ValidationError::InvalidChecksum,
        };
        assert!(!invalid.is_valid());
        assert_eq!(invalid.compact(), None);
        assert_eq!(invalid.error(), Some(ValidationError::InvalidChecksum));
    }

    #[test]
    fn test_result_serialization() {
        let valid = ValidationResult::Valid(ValidIdentifier {
            compact: "3100600445635".to_string(),
            is_individual: true,
            is_company: false,
        });
        assert_eq!(
            serde_json::to_value(&valid).unwrap(),
            serde_json::json!({
                "status": "valid",
                "compact": "3100600445635",
                "is_individual": true,
                "is_company": false,
            })
        );

        let invalid = ValidationResult::Invalid {
            error: ValidationError::InvalidLength,
        };
        let json = serde_json::to_string(&invalid).unwrap();
        assert_eq!(json, r#"{"status":"invalid","error":"InvalidLength"}"#);
        assert_eq!(
            serde_json::from_str::<ValidationResult>(&json).unwrap(),
            invalid
        );
    }
}
