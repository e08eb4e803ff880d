//! Income calculator service
//!
//! Turns the raw text a user typed into a network projection.

use tracing::debug;

use crate::domain::{parse_seed_count, project_with, BranchingMode, CommissionSchedule, ProjectionResult};

/// Service backing the "calculate income" action.
#[derive(Debug, Clone, Default)]
pub struct CalculatorService {
    schedule: CommissionSchedule,
}

impl CalculatorService {
    pub fn new(schedule: CommissionSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &CommissionSchedule {
        &self.schedule
    }

    /// Parse `input` leniently and project the network.
    ///
    /// Empty, non-numeric and zero input yield `None`.
    pub fn calculate(&self, input: &str, mode: BranchingMode) -> Option<ProjectionResult> {
        let seed_count = parse_seed_count(input);
        debug!("calculate: input={:?} seed_count={} mode={}", input, seed_count, mode);

        let result = project_with(seed_count, mode, &self.schedule);
        if let Some(ref projection) = result {
            debug!(
                "calculate: total_network={} total_income={}",
                projection.total_network, projection.total_income
            );
        }
        result
    }
}
