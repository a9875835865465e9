use std::collections::HashSet;
use std::fmt;

use crate::specification::SpecError;

/// Produces the starting model value for a walk.
///
/// An initializer may be nondeterministic (it typically samples random
/// values) and may fail: `None` counts as one failed attempt and the engine
/// retries up to its fixed budget.
pub struct Init<M> {
    supplier: Box<dyn Fn() -> Option<M>>,
}

impl<M: 'static> Init<M> {
    pub fn new(supplier: impl Fn() -> M + 'static) -> Self {
        Self {
            supplier: Box::new(move || Some(supplier())),
        }
    }

    /// Initializer that may produce nothing on a given attempt.
    pub fn fallible(supplier: impl Fn() -> Option<M> + 'static) -> Self {
        Self {
            supplier: Box::new(supplier),
        }
    }
}

impl<M> Init<M> {
    /// One initialization attempt.
    pub fn sample(&self) -> Option<M> {
        (self.supplier)()
    }
}

/// A named predicate gating an action.
///
/// Guards are advisory filters, not hard preconditions: a false guard makes
/// the draw a blocked attempt, which the engine retries.
pub struct Guard<M> {
    name: String,
    predicate: Box<dyn Fn(&M) -> bool>,
}

impl<M: 'static> Guard<M> {
    pub fn new(name: impl Into<String>, predicate: impl Fn(&M) -> bool + 'static) -> Self {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
        }
    }
}

impl<M> Guard<M> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn holds(&self, model: &M) -> bool {
        (self.predicate)(model)
    }
}

impl<M> fmt::Debug for Guard<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("name", &self.name).finish()
    }
}

/// Result of one action application.
///
/// `Blocked` carries no payload: a false guard and a failed effect are the
/// same recoverable outcome, distinct from initialization exhaustion and
/// property violations.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied<M> {
    Next(M),
    Blocked,
}

/// A named pure transformation of the model, optionally guarded.
pub struct NamedAction<M> {
    name: String,
    effect: Box<dyn Fn(&M) -> Option<M>>,
    guards: Vec<Guard<M>>,
}

impl<M: 'static> NamedAction<M> {
    pub fn new(name: impl Into<String>, effect: impl Fn(&M) -> M + 'static) -> Self {
        Self {
            name: name.into(),
            effect: Box::new(move |model| Some(effect(model))),
            guards: Vec::new(),
        }
    }

    /// Action whose effect may fail; `None` makes the attempt blocked.
    pub fn fallible(name: impl Into<String>, effect: impl Fn(&M) -> Option<M> + 'static) -> Self {
        Self {
            name: name.into(),
            effect: Box::new(effect),
            guards: Vec::new(),
        }
    }

    pub fn guard(mut self, guard: Guard<M>) -> Self {
        self.guards.push(guard);
        self
    }
}

impl<M> NamedAction<M> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn guards(&self) -> &[Guard<M>] {
        &self.guards
    }

    /// Apply the action: all guards must hold and the effect must produce a
    /// new model value, otherwise the attempt is blocked.
    pub fn apply(&self, model: &M) -> Applied<M> {
        if !self.guards.iter().all(|guard| guard.holds(model)) {
            return Applied::Blocked;
        }
        match (self.effect)(model) {
            Some(next) => Applied::Next(next),
            None => Applied::Blocked,
        }
    }
}

impl<M> fmt::Debug for NamedAction<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedAction")
            .field("name", &self.name)
            .field("guards", &self.guards)
            .finish()
    }
}

/// The ordered, non-empty collection of actions a walk draws from.
pub struct Step<M> {
    actions: Vec<NamedAction<M>>,
}

impl<M> Step<M> {
    pub fn new(actions: Vec<NamedAction<M>>) -> Result<Self, SpecError> {
        if actions.is_empty() {
            return Err(SpecError::EmptyStep);
        }
        let mut seen = HashSet::new();
        for action in &actions {
            if action.name.trim().is_empty() {
                return Err(SpecError::BlankActionName);
            }
            if !seen.insert(action.name.clone()) {
                return Err(SpecError::DuplicateActionName(action.name.clone()));
            }
        }
        Ok(Self { actions })
    }

    pub fn actions(&self) -> &[NamedAction<M>] {
        &self.actions
    }
}

impl<M> fmt::Debug for Step<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step").field("actions", &self.actions).finish()
    }
}
