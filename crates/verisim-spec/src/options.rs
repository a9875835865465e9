use serde::{Deserialize, Serialize};

/// A run option violated its minimum. Configuration errors are detected
/// before any run begins and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("{field} must be at least 1")]
    AtLeastOne { field: &'static str },
}

/// Options for a multi-walk simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOptions {
    number_of_simulations: usize,
    max_attempts: usize,
    max_transitions: usize,
    stop_on_constraint_violation: bool,
}

impl SimulationOptions {
    pub fn new(
        number_of_simulations: usize,
        max_attempts: usize,
        max_transitions: usize,
        stop_on_constraint_violation: bool,
    ) -> Result<Self, OptionsError> {
        if number_of_simulations < 1 {
            return Err(OptionsError::AtLeastOne {
                field: "number_of_simulations",
            });
        }
        if max_attempts < 1 {
            return Err(OptionsError::AtLeastOne {
                field: "max_attempts",
            });
        }
        if max_transitions < 1 {
            return Err(OptionsError::AtLeastOne {
                field: "max_transitions",
            });
        }
        Ok(Self {
            number_of_simulations,
            max_attempts,
            max_transitions,
            stop_on_constraint_violation,
        })
    }

    pub fn number_of_simulations(&self) -> usize {
        self.number_of_simulations
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn max_transitions(&self) -> usize {
        self.max_transitions
    }

    /// When true (the default), state-property and safety-invariant
    /// violations abort the walk immediately; when false every violation is
    /// deferred to the final check and the walk spends its whole budget.
    pub fn stop_on_constraint_violation(&self) -> bool {
        self.stop_on_constraint_violation
    }
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            number_of_simulations: 1,
            max_attempts: 2000,
            max_transitions: 500,
            stop_on_constraint_violation: true,
        }
    }
}

/// Options for a counterexample search: one extended walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinderOptions {
    max_attempts: usize,
    max_transitions: usize,
}

impl FinderOptions {
    pub fn new(max_attempts: usize, max_transitions: usize) -> Result<Self, OptionsError> {
        if max_attempts < 1 {
            return Err(OptionsError::AtLeastOne {
                field: "max_attempts",
            });
        }
        if max_transitions < 1 {
            return Err(OptionsError::AtLeastOne {
                field: "max_transitions",
            });
        }
        Ok(Self {
            max_attempts,
            max_transitions,
        })
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn max_transitions(&self) -> usize {
        self.max_transitions
    }
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            max_attempts: 2000,
            max_transitions: 1000,
        }
    }
}
