use std::collections::HashSet;
use std::fmt;

use crate::action::{Init, Step};
use crate::invariant::Invariant;
use crate::property::{StateProperty, TemporalProperty};

/// A specification failed validation at construction time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
    #[error("a step requires at least one action")]
    EmptyStep,
    #[error("action names must not be blank")]
    BlankActionName,
    #[error("duplicate action name: {0}")]
    DuplicateActionName(String),
    #[error("duplicate guard name: {0}")]
    DuplicateGuardName(String),
    #[error("duplicate state property name: {0}")]
    DuplicateStatePropertyName(String),
    #[error("duplicate temporal property name: {0}")]
    DuplicateTemporalPropertyName(String),
    #[error("name used by more than one guard or property: {0}")]
    NameCollision(String),
}

/// The immutable aggregate a walk runs against: an initializer, a step, and
/// the three property collections.
///
/// Guard names (collected from the step's actions), state-property names and
/// temporal-property-plus-invariant names must be individually duplicate-free
/// and pairwise disjoint; collisions fail construction, never coalesce.
pub struct Specification<M> {
    init: Init<M>,
    step: Step<M>,
    state_properties: Vec<StateProperty<M>>,
    temporal_properties: Vec<TemporalProperty<M>>,
    invariants: Vec<Invariant<M>>,
}

impl<M> Specification<M> {
    pub fn new(init: Init<M>, step: Step<M>) -> Result<Self, SpecError> {
        let spec = Self {
            init,
            step,
            state_properties: Vec::new(),
            temporal_properties: Vec::new(),
            invariants: Vec::new(),
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn with_state_properties(
        mut self,
        state_properties: Vec<StateProperty<M>>,
    ) -> Result<Self, SpecError> {
        self.state_properties = state_properties;
        self.validate()?;
        Ok(self)
    }

    pub fn with_temporal_properties(
        mut self,
        temporal_properties: Vec<TemporalProperty<M>>,
    ) -> Result<Self, SpecError> {
        self.temporal_properties = temporal_properties;
        self.validate()?;
        Ok(self)
    }

    pub fn with_invariants(mut self, invariants: Vec<Invariant<M>>) -> Result<Self, SpecError> {
        self.invariants = invariants;
        self.validate()?;
        Ok(self)
    }

    pub fn init(&self) -> &Init<M> {
        &self.init
    }

    pub fn step(&self) -> &Step<M> {
        &self.step
    }

    pub fn state_properties(&self) -> &[StateProperty<M>] {
        &self.state_properties
    }

    pub fn temporal_properties(&self) -> &[TemporalProperty<M>] {
        &self.temporal_properties
    }

    pub fn invariants(&self) -> &[Invariant<M>] {
        &self.invariants
    }

    fn validate(&self) -> Result<(), SpecError> {
        let guard_names: Vec<&str> = self
            .step
            .actions()
            .iter()
            .flat_map(|action| action.guards().iter().map(|guard| guard.name()))
            .collect();

        let mut seen = HashSet::new();
        for name in &guard_names {
            if !seen.insert(*name) {
                return Err(SpecError::DuplicateGuardName(name.to_string()));
            }
        }

        let mut seen = HashSet::new();
        for property in &self.state_properties {
            if !seen.insert(property.name()) {
                return Err(SpecError::DuplicateStatePropertyName(
                    property.name().to_string(),
                ));
            }
        }

        // Temporal properties and invariants share one namespace.
        let mut seen = HashSet::new();
        for property in &self.temporal_properties {
            if !seen.insert(property.name()) {
                return Err(SpecError::DuplicateTemporalPropertyName(
                    property.name().to_string(),
                ));
            }
        }
        for invariant in &self.invariants {
            if !seen.insert(invariant.name()) {
                return Err(SpecError::DuplicateTemporalPropertyName(
                    invariant.name().to_string(),
                ));
            }
        }

        let mut all = HashSet::new();
        let state_names = self.state_properties.iter().map(|p| p.name());
        let temporal_names = self
            .temporal_properties
            .iter()
            .map(|p| p.name())
            .chain(self.invariants.iter().map(|i| i.name()));
        for name in guard_names.into_iter().chain(state_names).chain(temporal_names) {
            if !all.insert(name) {
                return Err(SpecError::NameCollision(name.to_string()));
            }
        }

        Ok(())
    }
}

impl<M> fmt::Debug for Specification<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specification")
            .field("step", &self.step)
            .field("state_properties", &self.state_properties)
            .field("temporal_properties", &self.temporal_properties)
            .field("invariants", &self.invariants)
            .finish_non_exhaustive()
    }
}
