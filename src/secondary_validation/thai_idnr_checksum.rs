use crate::error::ValidationError;
use crate::secondary_validation::Validator;
use crate::thai_idnr;

pub struct ThaiIdnrChecksum;

impl Validator for ThaiIdnrChecksum {
    // https://en.wikipedia.org/wiki/Thai_identity_card
    fn is_valid_match(&self, regex_match: &str) -> bool {
        thai_idnr::check(regex_match).is_ok()
    }
}

/// Checks the trailing digit of a 13-digit compact value against the weighted
/// sum of the 12 digits before it.
pub(crate) fn verify_check_digit(value: &str) -> Result<(), ValidationError> {
    // The structural check guarantees ASCII digits, so byte offsets are char offsets
    let Some((front, check)) = value.split_at_checked(thai_idnr::LENGTH - 1) else {
        return Err(ValidationError::InvalidLength);
    };

    let sum = thai_idnr::CHECKSUM.checksum(front);
    let modulus = thai_idnr::CHECKSUM.modulus;
    // A residue of 10 renders as "10" and can never equal the single check digit
    let expected = ((modulus - sum) % modulus).to_string();

    if expected != check {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::error::ValidationError;
    use crate::secondary_validation::*;

    #[test]
    fn test_valid_thai_idnr() {
        let valid_ids = vec![
            "3100600445635",
            "1234567890120",
            "0000000000000",
            "9999999999994",
            "1100000000008",
            "1103700203451",
            "1000000000017",
            // separators are stripped before checking
            "3-1006-00445-63-5",
            "3 1006 00445 63 5",
        ];
        for id in valid_ids {
            assert!(ThaiIdnrChecksum.is_valid_match(id), "expected {id} to be valid");
        }
    }

    #[test]
    fn test_invalid_thai_idnr() {
        let invalid_ids = vec![
            // wrong checksum
            "3100600445636",
            "1234567890121",
            // payload residue is 10, no single digit matches
            "1101700203451",
            "1101700203450",
            // non digit characters
            "310060044563A",
            // wrong length
            "310060044563",
            "31006004456350",
            // Non utf-8 characters
            "3100600445Àñô",
            "",
        ];
        for id in invalid_ids {
            assert!(!ThaiIdnrChecksum.is_valid_match(id), "expected {id} to be invalid");
        }
    }

    #[test]
    fn test_verify_check_digit() {
        assert_eq!(verify_check_digit("3100600445635"), Ok(()));
        assert_eq!(
            verify_check_digit("3100600445630"),
            Err(ValidationError::InvalidChecksum)
        );
        for last in '0'..='9' {
            assert_eq!(
                verify_check_digit(&format!("110170020345{last}")),
                Err(ValidationError::InvalidChecksum)
            );
        }
    }
}
