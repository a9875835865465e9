//! Specification types for randomized model simulation.
//!
//! A specification bundles an initializer, a step (the actions a walk may
//! draw from), and three property collections: state properties checked
//! after every transition, batch temporal properties checked over the whole
//! trace, and kind-tagged invariants tracked incrementally. All names across
//! the collections are validated to be globally unique at construction.

pub mod action;
pub mod invariant;
pub mod options;
pub mod property;
pub mod specification;
pub mod transition;

pub use action::{Applied, Guard, Init, NamedAction, Step};
pub use invariant::{Invariant, InvariantKind};
pub use options::{FinderOptions, OptionsError, SimulationOptions};
pub use property::{StateProperty, TemporalProperty};
pub use specification::{SpecError, Specification};
pub use transition::Transition;
