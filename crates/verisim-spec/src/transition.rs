/// An immutable record of one successfully applied action.
///
/// Lives only inside a trace; never mutated after creation. Both counters are
/// 1-based: `number` is the position in the trace, `attempt` is the attempt
/// at which the action applied (blocked attempts advance it too).
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<M> {
    pub from: M,
    pub to: M,
    /// Name of the applied action. Never blank — `Step` rejects blank names.
    pub action: String,
    pub number: usize,
    pub attempt: usize,
}

impl<M> Transition<M> {
    pub fn new(from: M, to: M, action: impl Into<String>, number: usize, attempt: usize) -> Self {
        Self {
            from,
            to,
            action: action.into(),
            number,
            attempt,
        }
    }
}
