use crate::checksum::NPI_LENGTH;
use crate::validation::{validate, NpiValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A National Provider Identifier whose format and check digit have been
/// verified. Always 10 ASCII digits.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct Npi(String);

impl Npi {
    pub(crate) fn from_validated(digits: String) -> Self {
        debug_assert_eq!(digits.len(), NPI_LENGTH);
        Npi(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn check_digit(&self) -> u32 {
        // The last byte is always an ASCII digit
        u32::from(self.0.as_bytes()[NPI_LENGTH - 1] - b'0')
    }
}

impl fmt::Display for Npi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Npi {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Npi {
    type Err = NpiValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl TryFrom<&str> for Npi {
    type Error = NpiValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        validate(value)
    }
}

impl TryFrom<String> for Npi {
    type Error = NpiValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(value)
    }
}

impl TryFrom<u64> for Npi {
    type Error = NpiValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        validate(value)
    }
}

impl From<Npi> for String {
    fn from(npi: Npi) -> Self {
        npi.0
    }
}
