use serde::{Deserialize, Serialize};

use verisim_engine::{OutcomeStatus, Report};

/// Compact cross-walk aggregate of a report, for machine consumption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub simulations: usize,
    pub successes: usize,
    pub failed_init: usize,
    pub failed_state_properties: usize,
    pub failed_temporal_properties: usize,
    /// Distinct failed state-property names, in first-seen order.
    pub failed_state_property_names: Vec<String>,
    /// Distinct failed temporal-property names, in first-seen order.
    pub failed_temporal_property_names: Vec<String>,
}

pub fn summarize<M>(report: &Report<M>) -> ReportSummary {
    let mut summary = ReportSummary {
        simulations: report.outcomes.len(),
        successes: 0,
        failed_init: 0,
        failed_state_properties: 0,
        failed_temporal_properties: 0,
        failed_state_property_names: Vec::new(),
        failed_temporal_property_names: Vec::new(),
    };

    for outcome in &report.outcomes {
        match outcome.status {
            OutcomeStatus::Success => summary.successes += 1,
            OutcomeStatus::FailedInit => summary.failed_init += 1,
            OutcomeStatus::FailedStateProperties => summary.failed_state_properties += 1,
            OutcomeStatus::FailedTemporalProperties => summary.failed_temporal_properties += 1,
            OutcomeStatus::Failure | OutcomeStatus::Timeout | OutcomeStatus::Error => {}
        }

        for name in &outcome.failed_state_properties {
            if !summary.failed_state_property_names.contains(name) {
                summary.failed_state_property_names.push(name.clone());
            }
        }
        for name in &outcome.failed_temporal_properties {
            if !summary.failed_temporal_property_names.contains(name) {
                summary.failed_temporal_property_names.push(name.clone());
            }
        }
    }

    summary
}
