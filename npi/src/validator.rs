use crate::config::LengthPolicy;
use crate::validation::validate_text;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}

/// Luhn formula with the `80840` health industry prefix. The candidate must be
/// exactly 10 ASCII digits, separators are not skipped.
pub struct UsNpiChecksum;

impl Validator for UsNpiChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        validate_text(candidate, LengthPolicy::Strict).is_ok()
    }
}

#[cfg(test)]
mod test {
    use crate::validator::*;

    #[test]
    fn test_valid_npi() {
        let validator = UsNpiChecksum;
        assert!(validator.is_valid_match("1234567893"));
        assert!(validator.is_valid_match("1111111112"));
        assert!(validator.is_valid_match("0000000006"));
        assert!(validator.is_valid_match("9999999995"));
        assert!(validator.is_valid_match("1215290382"));
    }

    #[test]
    fn test_invalid_npi_wrong_checksum() {
        let validator = UsNpiChecksum;
        assert!(!validator.is_valid_match("1234567890"));
        assert!(!validator.is_valid_match("1234567891"));
        assert!(!validator.is_valid_match("1234567892"));
    }

    #[test]
    fn test_invalid_npi_wrong_length() {
        let validator = UsNpiChecksum;
        assert!(!validator.is_valid_match("123456789")); // too short
        assert!(!validator.is_valid_match("12345678901")); // too long
    }

    #[test]
    fn test_separators_are_not_skipped() {
        let validator = UsNpiChecksum;
        assert!(!validator.is_valid_match("123 456 7893"));
        assert!(!validator.is_valid_match("123-456-7893"));
    }

    #[test]
    fn test_usable_as_trait_object() {
        let validators: Vec<Box<dyn Validator>> = vec![
            Box::new(UsNpiChecksum),
            Box::new(crate::ValidatorConfig::new().build()),
        ];
        for validator in validators {
            assert!(validator.is_valid_match("1215290382"));
            assert!(!validator.is_valid_match("1215290383"));
        }
    }
}
