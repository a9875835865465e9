//! Incremental invariant evaluation.
//!
//! One boolean satisfaction flag per invariant, re-derived after every
//! transition according to its kind. Safety kinds (ALWAYS, NEVER) latch false
//! and can be checked mid-run to prune the walk early; liveness kinds
//! (EVENTUALLY, AT_LAST) are only meaningful over a complete trace.

use verisim_spec::{Invariant, InvariantKind};

/// Per-invariant satisfaction state for one walk.
pub struct SatisfactionTracker<'a, M> {
    entries: Vec<Entry<'a, M>>,
}

struct Entry<'a, M> {
    invariant: &'a Invariant<M>,
    satisfied: bool,
}

impl<'a, M> SatisfactionTracker<'a, M> {
    /// ALWAYS and NEVER start satisfied (nothing violated yet); EVENTUALLY
    /// and AT_LAST start unsatisfied (nothing observed yet).
    pub fn new(invariants: &'a [Invariant<M>]) -> Self {
        let entries = invariants
            .iter()
            .map(|invariant| Entry {
                satisfied: invariant.kind().is_safety(),
                invariant,
            })
            .collect();
        Self { entries }
    }

    /// Fold the newly reached state into every flag.
    pub fn observe(&mut self, state: &M) {
        for entry in &mut self.entries {
            let holds = entry.invariant.holds(state);
            entry.satisfied = match entry.invariant.kind() {
                InvariantKind::Always => entry.satisfied && holds,
                InvariantKind::Never => entry.satisfied && !holds,
                InvariantKind::Eventually => entry.satisfied || holds,
                InvariantKind::AtLast => holds,
            };
        }
    }

    /// Names of safety invariants whose flag has gone false. A once-false
    /// ALWAYS or NEVER can never recover, so these abort the walk.
    pub fn safety_violations(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.invariant.kind().is_safety() && !entry.satisfied)
            .map(|entry| entry.invariant.name().to_string())
            .collect()
    }

    /// Names of all invariants whose flag is false; the final check after the
    /// walk terminates.
    pub fn final_failures(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| !entry.satisfied)
            .map(|entry| entry.invariant.name().to_string())
            .collect()
    }
}
