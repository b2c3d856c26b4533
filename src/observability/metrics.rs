use crate::observability::labels::Labels;
use crate::validation::ValidationResult;
use metrics::counter;

const IDENTIFIER: &str = "identifier";
const OUTCOME: &str = "outcome";

pub const VALIDATIONS: &str = "identifier.validations";
pub const NORMALIZATION_FAILURES: &str = "identifier.normalization_failures";

/// Counters of a single identifier family, tagged with its abbreviation.
pub struct ValidationMetrics {
    labels: Labels,
}

impl ValidationMetrics {
    pub fn new(abbreviation: &'static str) -> Self {
        ValidationMetrics {
            labels: Labels::new(&[(IDENTIFIER, abbreviation)]),
        }
    }

    pub fn record_validation(&self, result: &ValidationResult) {
        let outcome: &'static str = match result.error() {
            None => "valid",
            Some(error) => error.into(),
        };
        counter!(
            VALIDATIONS,
            self.labels.clone_with_labels(&[(OUTCOME, outcome)])
        )
        .increment(1);
    }

    pub fn record_normalization_failure(&self) {
        counter!(NORMALIZATION_FAILURES, self.labels.clone()).increment(1);
    }
}
