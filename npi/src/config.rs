use crate::npi_validator::NpiValidator;
use crate::Labels;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

/// How inputs longer than 10 characters are treated.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum LengthPolicy {
    /// Anything other than exactly 10 characters is invalid
    #[default]
    Strict,
    /// Longer inputs are accepted when they are numeric and their first 9 digits
    /// produce the trailing digit as check digit. Shorter inputs are still invalid.
    Permissive,
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ValidatorConfig {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub length_policy: LengthPolicy,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length_policy(&self, length_policy: LengthPolicy) -> Self {
        self.mutate_clone(|x| x.length_policy = length_policy)
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn build(&self) -> NpiValidator {
        NpiValidator::new(self)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
