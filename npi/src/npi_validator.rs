use crate::config::{LengthPolicy, ValidatorConfig};
use crate::input::NpiInput;
use crate::npi::Npi;
use crate::observability::metrics::ValidatorMetrics;
use crate::stats::GLOBAL_STATS;
use crate::validation::{validate_text, validate_with_policy, NpiValidationError};
use crate::validator::Validator;

/// A validator built from a [ValidatorConfig]. Same checks as [crate::valid] under
/// the configured length policy, and every result is reported as a metric.
pub struct NpiValidator {
    length_policy: LengthPolicy,
    metrics: ValidatorMetrics,
}

impl NpiValidator {
    pub(crate) fn new(config: &ValidatorConfig) -> Self {
        GLOBAL_STATS.validator_created();

        Self {
            length_policy: config.length_policy,
            metrics: ValidatorMetrics::new(&config.labels),
        }
    }

    pub fn length_policy(&self) -> LengthPolicy {
        self.length_policy
    }

    pub fn valid<'a>(&self, input: impl Into<NpiInput<'a>>) -> bool {
        self.validate(input).is_ok()
    }

    pub fn validate<'a>(&self, input: impl Into<NpiInput<'a>>) -> Result<Npi, NpiValidationError> {
        let result = validate_with_policy(&input.into(), self.length_policy);
        self.metrics.record(&result);
        result
    }
}

impl Validator for NpiValidator {
    fn is_valid_match(&self, candidate: &str) -> bool {
        let result = validate_text(candidate, self.length_policy);
        self.metrics.record(&result);
        result.is_ok()
    }
}

impl Drop for NpiValidator {
    fn drop(&mut self) {
        GLOBAL_STATS.validator_dropped();
    }
}
