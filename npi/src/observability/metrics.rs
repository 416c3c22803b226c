use crate::observability::labels::Labels;
use crate::NpiValidationError;
use metrics::{counter, Counter};

const REASON: &str = "reason";

/// Counters for a single configured validator. Registered once when the
/// validator is built, so recording a result never looks up the registry.
pub struct ValidatorMetrics {
    validations: Counter,
    valid: Counter,
    negative: Counter,
    too_short: Counter,
    too_long: Counter,
    non_numeric: Counter,
    check_digit_mismatch: Counter,
}

impl ValidatorMetrics {
    pub fn new(labels: &Labels) -> Self {
        let rejections = |reason: &'static str| {
            counter!(
                "npi.rejections",
                labels.clone_with_labels(&[(REASON, reason)])
            )
        };

        ValidatorMetrics {
            validations: counter!("npi.validations", labels.clone()),
            valid: counter!("npi.valid", labels.clone()),
            negative: rejections("negative"),
            too_short: rejections("too_short"),
            too_long: rejections("too_long"),
            non_numeric: rejections("non_numeric"),
            check_digit_mismatch: rejections("check_digit_mismatch"),
        }
    }

    pub fn record<T>(&self, result: &Result<T, NpiValidationError>) {
        self.validations.increment(1);
        match result {
            Ok(_) => self.valid.increment(1),
            Err(err) => self.rejection(err).increment(1),
        }
    }

    fn rejection(&self, err: &NpiValidationError) -> &Counter {
        match err {
            NpiValidationError::Negative => &self.negative,
            NpiValidationError::TooShort { .. } => &self.too_short,
            NpiValidationError::TooLong { .. } => &self.too_long,
            NpiValidationError::NonNumeric { .. } => &self.non_numeric,
            NpiValidationError::CheckDigitMismatch { .. } => &self.check_digit_mismatch,
        }
    }
}
