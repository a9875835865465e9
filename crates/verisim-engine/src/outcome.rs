use serde::{Deserialize, Serialize};
use verisim_spec::Transition;

/// Terminal status of one simulated walk.
///
/// `Failure`, `Timeout` and `Error` are reserved for forward extension; the
/// core loop never produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeStatus {
    Success,
    Failure,
    Timeout,
    Error,
    FailedInit,
    FailedStateProperties,
    FailedTemporalProperties,
}

impl OutcomeStatus {
    pub fn label(self) -> &'static str {
        match self {
            OutcomeStatus::Success => "Success",
            OutcomeStatus::Failure => "Failure",
            OutcomeStatus::Timeout => "Timeout",
            OutcomeStatus::Error => "Error",
            OutcomeStatus::FailedInit => "Failed initialization",
            OutcomeStatus::FailedStateProperties => "Failed state properties",
            OutcomeStatus::FailedTemporalProperties => "Failed temporal properties",
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, OutcomeStatus::Success)
    }
}

/// The result of one walk: status, the recorded trace, and the names of any
/// failed properties. Created once per walk, immutable thereafter; the
/// `with_*` methods rebuild by field-wise copy.
#[derive(Debug, Clone)]
pub struct OutcomeSimulation<M> {
    pub status: OutcomeStatus,
    pub transitions: Vec<Transition<M>>,
    pub failed_state_properties: Vec<String>,
    pub failed_temporal_properties: Vec<String>,
}

impl<M> OutcomeSimulation<M> {
    pub fn new(status: OutcomeStatus) -> Self {
        Self {
            status,
            transitions: Vec::new(),
            failed_state_properties: Vec::new(),
            failed_temporal_properties: Vec::new(),
        }
    }

    pub fn with_status(self, status: OutcomeStatus) -> Self {
        Self { status, ..self }
    }

    pub fn with_transitions(self, transitions: Vec<Transition<M>>) -> Self {
        Self {
            transitions,
            ..self
        }
    }

    pub fn with_failed_state_properties(self, failed_state_properties: Vec<String>) -> Self {
        Self {
            failed_state_properties,
            ..self
        }
    }

    pub fn with_failed_temporal_properties(self, failed_temporal_properties: Vec<String>) -> Self {
        Self {
            failed_temporal_properties,
            ..self
        }
    }
}

/// Ordered list of outcomes, one per requested walk. Purely additive; the
/// engine performs no cross-walk aggregation.
#[derive(Debug, Clone)]
pub struct Report<M> {
    pub outcomes: Vec<OutcomeSimulation<M>>,
}

impl<M> Report<M> {
    pub fn new(outcomes: Vec<OutcomeSimulation<M>>) -> Self {
        Self { outcomes }
    }
}
