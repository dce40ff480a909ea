use std::collections::HashMap;

use serde::Serialize;

use crate::models::validation::{Severity, ValidationWarning};

#[derive(Debug, Clone, Serialize, Default)]
pub struct ValidationSummary {
    pub has_errors: bool,
    pub has_warnings: bool,
    /// Warnings keyed by stop index, input order preserved within each
    /// stop. Tour-level warnings feed only the flags above.
    pub by_stop: HashMap<usize, Vec<ValidationWarning>>,
}

pub struct ValidationService;

impl ValidationService {
    /// Classify and group validator findings for submit gating and
    /// per-stop display
    pub fn summarize(warnings: &[ValidationWarning]) -> ValidationSummary {
        let mut summary = ValidationSummary::default();

        for warning in warnings {
            match warning.severity {
                Severity::Error => summary.has_errors = true,
                Severity::Warning => summary.has_warnings = true,
            }

            // Indices are taken as sent, even past the end of the stop
            // list, matching what the dashboards already rely on
            if let Some(index) = warning.stop_index {
                summary
                    .by_stop
                    .entry(index)
                    .or_default()
                    .push(warning.clone());
            }
        }

        summary
    }

    /// Errors block submission; warnings only flag it for attention
    pub fn blocks_submission(summary: &ValidationSummary) -> bool {
        summary.has_errors
    }
}
