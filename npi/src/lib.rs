// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod config;
mod input;
mod npi;
mod npi_validator;
mod observability;
mod stats;
mod validation;
mod validator;

// This is the public API of the NPI library
pub use checksum::check_digit_for;
pub use config::{LengthPolicy, ValidatorConfig};
pub use input::NpiInput;
pub use npi::Npi;
pub use npi_validator::NpiValidator;
pub use observability::labels::Labels;
pub use validation::{valid, validate, NpiValidationError};
pub use validator::{UsNpiChecksum, Validator};
