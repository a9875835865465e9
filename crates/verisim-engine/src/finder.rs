use rand::rngs::ThreadRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use verisim_spec::{Applied, FinderOptions, Specification, Transition};

use crate::nondet::{NonDet, RngNonDet};
use crate::simulator::try_init;
use crate::INIT_RETRY_BUDGET;

/// A specification breach: the name of the failed state property and the
/// exact transition where it was first observed.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterExample<M> {
    pub property: String,
    pub transition: Transition<M>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FinderError {
    #[error("could not initialize the model after {budget} attempts")]
    InitExhausted { budget: usize },
}

/// Runs a single extended walk hunting for the first state-property
/// violation. Intended for interactive debugging rather than statistical
/// coverage.
pub struct CounterExampleFinder<N: NonDet> {
    options: FinderOptions,
    nondet: N,
}

impl CounterExampleFinder<RngNonDet<ThreadRng>> {
    /// Finder backed by the process-wide generator.
    pub fn new(options: FinderOptions) -> Self {
        Self::with_nondet(options, RngNonDet::from_thread_rng())
    }
}

impl CounterExampleFinder<RngNonDet<ChaCha8Rng>> {
    /// Reproducible finder. Same seed, same walk.
    pub fn seeded(options: FinderOptions, seed: u64) -> Self {
        Self::with_nondet(options, RngNonDet::seeded(seed))
    }
}

impl<N: NonDet> CounterExampleFinder<N> {
    pub fn with_nondet(options: FinderOptions, nondet: N) -> Self {
        Self { options, nondet }
    }

    /// `Ok(None)` means no violation was observed within the budgets.
    /// Initializer exhaustion is a hard error here, unlike the simulator's
    /// non-throwing `FailedInit` outcome.
    pub fn run<M: Clone>(
        &mut self,
        spec: &Specification<M>,
    ) -> Result<Option<CounterExample<M>>, FinderError> {
        let mut model = match try_init(spec.init()) {
            Some(model) => model,
            None => {
                return Err(FinderError::InitExhausted {
                    budget: INIT_RETRY_BUDGET,
                })
            }
        };

        let mut transition_count: usize = 1;
        let mut attempt_count: usize = 1;

        while transition_count <= self.options.max_transitions()
            && attempt_count <= self.options.max_attempts()
        {
            let action = self.nondet.one_of(spec.step().actions());

            let next = match action.apply(&model) {
                Applied::Next(next) => next,
                Applied::Blocked => {
                    attempt_count += 1;
                    continue;
                }
            };

            let failing = spec
                .state_properties()
                .iter()
                .find(|property| !property.holds(&next));

            if let Some(property) = failing {
                debug!(
                    property = property.name(),
                    transition = transition_count,
                    "counterexample found"
                );
                let transition = Transition::new(
                    model,
                    next,
                    action.name(),
                    transition_count,
                    attempt_count,
                );
                return Ok(Some(CounterExample {
                    property: property.name().to_string(),
                    transition,
                }));
            }

            transition_count += 1;
            attempt_count += 1;
            model = next;
        }

        Ok(None)
    }
}
