//! The simulation engine: randomized trace generation over a specification,
//! with eager state-property checking and incremental invariant tracking.

pub mod finder;
pub mod nondet;
pub mod outcome;
pub mod simulator;
pub mod tracker;

/// Fixed retry ceiling for model initialization, shared by every execution
/// model.
pub const INIT_RETRY_BUDGET: usize = 100;

pub use finder::{CounterExample, CounterExampleFinder, FinderError};
pub use nondet::{NonDet, RngNonDet, ScriptedNonDet};
pub use outcome::{OutcomeSimulation, OutcomeStatus, Report};
pub use simulator::Simulator;
pub use tracker::SatisfactionTracker;
