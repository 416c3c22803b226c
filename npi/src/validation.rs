use crate::checksum::{check_digit, NPI_LENGTH, PREFIX_LENGTH};
use crate::config::LengthPolicy;
use crate::input::NpiInput;
use crate::npi::Npi;
use strum::IntoStaticStr;
use thiserror::Error;

/// Why a candidate was rejected. Checks run in declaration order and the first
/// failing one is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum NpiValidationError {
    #[error("Negative numbers are never valid NPIs")]
    Negative,

    #[error("An NPI has 10 digits, the input only has {length} characters")]
    TooShort { length: usize },

    #[error("An NPI has 10 digits, the input has {length} characters")]
    TooLong { length: usize },

    #[error("Found a non-digit character at position {position}")]
    NonNumeric { position: usize },

    #[error("The check digit should be {expected}, found {actual}")]
    CheckDigitMismatch { expected: u32, actual: u32 },
}

impl NpiValidationError {
    /// Stable snake_case name of the failure, suitable as a metric label
    pub fn reason(&self) -> &'static str {
        self.into()
    }
}

/// Checks the format and check digit of a candidate NPI.
///
/// Malformed input of any kind yields `false`. This does not check whether the
/// NPI has actually been assigned to a provider.
pub fn valid<'a>(input: impl Into<NpiInput<'a>>) -> bool {
    validate(input).is_ok()
}

/// Same checks as [valid], but returns the normalized [Npi] on success and the
/// reason of the rejection otherwise.
pub fn validate<'a>(input: impl Into<NpiInput<'a>>) -> Result<Npi, NpiValidationError> {
    validate_with_policy(&input.into(), LengthPolicy::Strict)
}

pub(crate) fn validate_with_policy(
    input: &NpiInput<'_>,
    length_policy: LengthPolicy,
) -> Result<Npi, NpiValidationError> {
    if input.is_negative() {
        return Err(NpiValidationError::Negative);
    }
    validate_text(&input.canonical_text(), length_policy)
}

pub(crate) fn validate_text(
    text: &str,
    length_policy: LengthPolicy,
) -> Result<Npi, NpiValidationError> {
    let length = text.chars().count();
    if length < NPI_LENGTH {
        return Err(NpiValidationError::TooShort { length });
    }
    if length > NPI_LENGTH && length_policy == LengthPolicy::Strict {
        return Err(NpiValidationError::TooLong { length });
    }
    if let Some(position) = text.chars().position(|c| !c.is_ascii_digit()) {
        return Err(NpiValidationError::NonNumeric { position });
    }

    // Only ASCII digits are left, so bytes and characters line up.
    let bytes = text.as_bytes();
    let prefix = &bytes[..PREFIX_LENGTH];
    // Under the permissive policy the trailing character is the check digit,
    // whatever sits between it and the prefix.
    let last = bytes[bytes.len() - 1];

    let expected = check_digit(prefix);
    let actual = u32::from(last - b'0');
    if expected != actual {
        return Err(NpiValidationError::CheckDigitMismatch { expected, actual });
    }

    let mut normalized = String::with_capacity(NPI_LENGTH);
    normalized.push_str(&text[..PREFIX_LENGTH]);
    normalized.push(char::from(last));
    Ok(Npi::from_validated(normalized))
}
