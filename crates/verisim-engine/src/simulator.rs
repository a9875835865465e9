use rand::rngs::ThreadRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use verisim_spec::{Applied, Init, SimulationOptions, Specification, Transition};

use crate::nondet::{NonDet, RngNonDet};
use crate::outcome::{OutcomeSimulation, OutcomeStatus, Report};
use crate::tracker::SatisfactionTracker;
use crate::INIT_RETRY_BUDGET;

/// Attempt to obtain a starting model value, retrying initializer failures
/// up to the fixed budget.
pub(crate) fn try_init<M>(init: &Init<M>) -> Option<M> {
    for attempt in 0..INIT_RETRY_BUDGET {
        if let Some(model) = init.sample() {
            return Some(model);
        }
        trace!(attempt, "initializer produced nothing, retrying");
    }
    None
}

/// Runs N independent randomized walks against a specification and collects
/// one outcome per walk. Budgets reset for each walk; a failing walk never
/// stops the remaining ones.
pub struct Simulator<N: NonDet> {
    options: SimulationOptions,
    nondet: N,
}

impl Simulator<RngNonDet<ThreadRng>> {
    /// Simulator backed by the process-wide generator.
    pub fn new(options: SimulationOptions) -> Self {
        Self::with_nondet(options, RngNonDet::from_thread_rng())
    }
}

impl Simulator<RngNonDet<ChaCha8Rng>> {
    /// Reproducible simulator. Same seed, same walks.
    pub fn seeded(options: SimulationOptions, seed: u64) -> Self {
        Self::with_nondet(options, RngNonDet::seeded(seed))
    }
}

impl<N: NonDet> Simulator<N> {
    pub fn with_nondet(options: SimulationOptions, nondet: N) -> Self {
        Self { options, nondet }
    }

    pub fn run<M: Clone>(&mut self, spec: &Specification<M>) -> Report<M> {
        let outcomes = (0..self.options.number_of_simulations())
            .map(|walk| {
                debug!(walk, "starting walk");
                self.run_walk(spec)
            })
            .collect();
        Report::new(outcomes)
    }

    fn run_walk<M: Clone>(&mut self, spec: &Specification<M>) -> OutcomeSimulation<M> {
        let mut model = match try_init(spec.init()) {
            Some(model) => model,
            None => return OutcomeSimulation::new(OutcomeStatus::FailedInit),
        };

        let fail_fast = self.options.stop_on_constraint_violation();
        let mut transitions: Vec<Transition<M>> = Vec::new();
        let mut transition_count: usize = 1;
        let mut attempt_count: usize = 1;
        let mut deferred_state_failures: Vec<String> = Vec::new();
        let mut tracker = SatisfactionTracker::new(spec.invariants());

        while transition_count <= self.options.max_transitions()
            && attempt_count <= self.options.max_attempts()
        {
            let action = self.nondet.one_of(spec.step().actions());

            let next = match action.apply(&model) {
                Applied::Next(next) => next,
                Applied::Blocked => {
                    trace!(
                        action = action.name(),
                        attempt = attempt_count,
                        "blocked attempt"
                    );
                    attempt_count += 1;
                    continue;
                }
            };

            let failing: Vec<String> = spec
                .state_properties()
                .iter()
                .filter(|property| !property.holds(&next))
                .map(|property| property.name().to_string())
                .collect();

            if !failing.is_empty() {
                if fail_fast {
                    debug!(
                        transition = transition_count,
                        "state property violated, stopping walk"
                    );
                    return OutcomeSimulation::new(OutcomeStatus::FailedStateProperties)
                        .with_failed_state_properties(failing)
                        .with_transitions(transitions);
                }
                for name in failing {
                    if !deferred_state_failures.contains(&name) {
                        deferred_state_failures.push(name);
                    }
                }
            }

            transitions.push(Transition::new(
                model.clone(),
                next.clone(),
                action.name(),
                transition_count,
                attempt_count,
            ));
            tracker.observe(&next);

            if fail_fast {
                let violated = tracker.safety_violations();
                if !violated.is_empty() {
                    debug!(
                        transition = transition_count,
                        "safety invariant violated, stopping walk"
                    );
                    return OutcomeSimulation::new(OutcomeStatus::FailedTemporalProperties)
                        .with_failed_temporal_properties(violated)
                        .with_transitions(transitions);
                }
            }

            transition_count += 1;
            attempt_count += 1;
            model = next;
        }

        let mut failed_temporal: Vec<String> = spec
            .temporal_properties()
            .iter()
            .filter(|property| !property.holds(&transitions))
            .map(|property| property.name().to_string())
            .collect();
        failed_temporal.extend(tracker.final_failures());

        if !deferred_state_failures.is_empty() {
            return OutcomeSimulation::new(OutcomeStatus::FailedStateProperties)
                .with_failed_state_properties(deferred_state_failures)
                .with_failed_temporal_properties(failed_temporal)
                .with_transitions(transitions);
        }
        if !failed_temporal.is_empty() {
            return OutcomeSimulation::new(OutcomeStatus::FailedTemporalProperties)
                .with_failed_temporal_properties(failed_temporal)
                .with_transitions(transitions);
        }
        OutcomeSimulation::new(OutcomeStatus::Success).with_transitions(transitions)
    }
}
