use std::fmt;

use crate::transition::Transition;

/// A named predicate over a single model value.
///
/// Must hold after every successfully applied transition.
pub struct StateProperty<M> {
    name: String,
    predicate: Box<dyn Fn(&M) -> bool>,
}

impl<M> StateProperty<M> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn holds(&self, model: &M) -> bool {
        (self.predicate)(model)
    }
}

impl<M: 'static> StateProperty<M> {
    pub fn new(name: impl Into<String>, predicate: impl Fn(&M) -> bool + 'static) -> Self {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
        }
    }

    pub fn and(self, other: StateProperty<M>) -> StateProperty<M> {
        let name = format!("({} AND {})", self.name, other.name);
        let (p, q) = (self.predicate, other.predicate);
        StateProperty {
            name,
            predicate: Box::new(move |m| p(m) && q(m)),
        }
    }

    pub fn or(self, other: StateProperty<M>) -> StateProperty<M> {
        let name = format!("({} OR {})", self.name, other.name);
        let (p, q) = (self.predicate, other.predicate);
        StateProperty {
            name,
            predicate: Box::new(move |m| p(m) || q(m)),
        }
    }

    pub fn not(self) -> StateProperty<M> {
        let name = format!("(NOT {})", self.name);
        let p = self.predicate;
        StateProperty {
            name,
            predicate: Box::new(move |m| !p(m)),
        }
    }
}

impl<M> fmt::Debug for StateProperty<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateProperty")
            .field("name", &self.name)
            .finish()
    }
}

/// A named predicate over the full ordered trace accumulated so far.
///
/// Evaluated once against the complete trace after the walk terminates (the
/// batch strategy). The constructors below cover the common temporal
/// patterns; arbitrary trace predicates go through [`TemporalProperty::new`].
pub struct TemporalProperty<M> {
    name: String,
    predicate: Box<dyn Fn(&[Transition<M>]) -> bool>,
}

impl<M> TemporalProperty<M> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn holds(&self, trace: &[Transition<M>]) -> bool {
        (self.predicate)(trace)
    }
}

impl<M: 'static> TemporalProperty<M> {
    pub fn new(
        name: impl Into<String>,
        predicate: impl Fn(&[Transition<M>]) -> bool + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
        }
    }

    /// The predicate holds in every reached state.
    pub fn always(name: impl Into<String>, predicate: impl Fn(&M) -> bool + 'static) -> Self {
        Self::new(name, move |trace: &[Transition<M>]| {
            trace.iter().all(|t| predicate(&t.to))
        })
    }

    /// The predicate holds in no reached state.
    pub fn never(name: impl Into<String>, predicate: impl Fn(&M) -> bool + 'static) -> Self {
        Self::new(name, move |trace: &[Transition<M>]| {
            !trace.iter().any(|t| predicate(&t.to))
        })
    }

    /// The predicate holds in at least one reached state.
    pub fn eventually(name: impl Into<String>, predicate: impl Fn(&M) -> bool + 'static) -> Self {
        Self::new(name, move |trace: &[Transition<M>]| {
            trace.iter().any(|t| predicate(&t.to))
        })
    }

    /// The predicate holds in the first reached state. False on an empty trace.
    pub fn initially(name: impl Into<String>, predicate: impl Fn(&M) -> bool + 'static) -> Self {
        Self::new(name, move |trace: &[Transition<M>]| {
            trace.first().map_or(false, |t| predicate(&t.to))
        })
    }

    /// The predicate holds in the last reached state. False on an empty trace.
    pub fn at_last(name: impl Into<String>, predicate: impl Fn(&M) -> bool + 'static) -> Self {
        Self::new(name, move |trace: &[Transition<M>]| {
            trace.last().map_or(false, |t| predicate(&t.to))
        })
    }

    /// The predicate holds in exactly one reached state.
    pub fn exactly_once(name: impl Into<String>, predicate: impl Fn(&M) -> bool + 'static) -> Self {
        Self::new(name, move |trace: &[Transition<M>]| {
            trace.iter().filter(|t| predicate(&t.to)).count() == 1
        })
    }

    /// Once a state satisfying `x` is reached, a state satisfying `y` must
    /// follow at or after it.
    pub fn then_eventually(
        name: impl Into<String>,
        x: impl Fn(&M) -> bool + 'static,
        y: impl Fn(&M) -> bool + 'static,
    ) -> Self {
        Self::new(name, move |trace: &[Transition<M>]| {
            let mut seen_x = false;
            for t in trace {
                seen_x = seen_x || x(&t.to);
                if seen_x && y(&t.to) {
                    return true;
                }
            }
            false
        })
    }

    /// Every transition satisfying `x` is immediately followed by one
    /// satisfying `y`. An `x` at the very end of the trace is not checked.
    pub fn followed_immediately_by(
        name: impl Into<String>,
        x: impl Fn(&Transition<M>) -> bool + 'static,
        y: impl Fn(&Transition<M>) -> bool + 'static,
    ) -> Self {
        Self::new(name, move |trace: &[Transition<M>]| {
            trace.windows(2).all(|w| !x(&w[0]) || y(&w[1]))
        })
    }

    /// `x` occurs at least once, and every occurrence is immediately
    /// followed by a transition satisfying `y`.
    pub fn occurs_and_followed_immediately_by(
        name: impl Into<String>,
        x: impl Fn(&Transition<M>) -> bool + 'static,
        y: impl Fn(&Transition<M>) -> bool + 'static,
    ) -> Self {
        Self::new(name, move |trace: &[Transition<M>]| {
            let mut occurred = false;
            for (i, t) in trace.iter().enumerate() {
                if x(t) {
                    occurred = true;
                    if i + 1 >= trace.len() || !y(&trace[i + 1]) {
                        return false;
                    }
                }
            }
            occurred
        })
    }

    pub fn and(self, other: TemporalProperty<M>) -> TemporalProperty<M> {
        let name = format!("({} AND {})", self.name, other.name);
        let (p, q) = (self.predicate, other.predicate);
        TemporalProperty {
            name,
            predicate: Box::new(move |trace| p(trace) && q(trace)),
        }
    }

    pub fn or(self, other: TemporalProperty<M>) -> TemporalProperty<M> {
        let name = format!("({} OR {})", self.name, other.name);
        let (p, q) = (self.predicate, other.predicate);
        TemporalProperty {
            name,
            predicate: Box::new(move |trace| p(trace) || q(trace)),
        }
    }

    pub fn not(self) -> TemporalProperty<M> {
        let name = format!("(NOT {})", self.name);
        let p = self.predicate;
        TemporalProperty {
            name,
            predicate: Box::new(move |trace| !p(trace)),
        }
    }
}

impl<M> fmt::Debug for TemporalProperty<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemporalProperty")
            .field("name", &self.name)
            .finish()
    }
}
