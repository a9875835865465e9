use std::fmt;

use serde::{Deserialize, Serialize};

/// Temporal kind of an invariant, determining its incremental update rule
/// and whether a violation is fatal mid-run or only at completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvariantKind {
    /// Holds in every reached state. Once false, can never recover.
    Always,
    /// Holds in no reached state. Permanently violated once observed.
    Never,
    /// Holds in at least one reached state; judged at the end of the walk.
    Eventually,
    /// Holds in the final reached state; only the last value matters.
    AtLast,
}

impl InvariantKind {
    /// Safety kinds fail fast mid-run; the rest are judged over a complete trace.
    pub fn is_safety(self) -> bool {
        matches!(self, InvariantKind::Always | InvariantKind::Never)
    }
}

/// A kind-tagged single-state predicate, evaluated incrementally
/// transition-by-transition rather than over the whole trace.
pub struct Invariant<M> {
    name: String,
    kind: InvariantKind,
    predicate: Box<dyn Fn(&M) -> bool>,
}

impl<M: 'static> Invariant<M> {
    fn with_kind(
        name: impl Into<String>,
        kind: InvariantKind,
        predicate: impl Fn(&M) -> bool + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            predicate: Box::new(predicate),
        }
    }

    pub fn always(name: impl Into<String>, predicate: impl Fn(&M) -> bool + 'static) -> Self {
        Self::with_kind(name, InvariantKind::Always, predicate)
    }

    pub fn never(name: impl Into<String>, predicate: impl Fn(&M) -> bool + 'static) -> Self {
        Self::with_kind(name, InvariantKind::Never, predicate)
    }

    pub fn eventually(name: impl Into<String>, predicate: impl Fn(&M) -> bool + 'static) -> Self {
        Self::with_kind(name, InvariantKind::Eventually, predicate)
    }

    pub fn at_last(name: impl Into<String>, predicate: impl Fn(&M) -> bool + 'static) -> Self {
        Self::with_kind(name, InvariantKind::AtLast, predicate)
    }
}

impl<M> Invariant<M> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> InvariantKind {
        self.kind
    }

    pub fn holds(&self, model: &M) -> bool {
        (self.predicate)(model)
    }
}

impl<M> fmt::Debug for Invariant<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invariant")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}
