use std::collections::HashSet;

use verisim_engine::Report;

/// Emits a deduplicated directed-graph description of the observed state
/// space: one edge per distinct `(from, to)` state-name pair across every
/// recorded walk, self-loops skipped, wrapped for PlantUML.
pub struct StateSpaceDigraph<M> {
    describe: Box<dyn Fn(&M) -> String>,
}

impl<M: 'static> StateSpaceDigraph<M> {
    pub fn new(describe: impl Fn(&M) -> String + 'static) -> Self {
        Self {
            describe: Box::new(describe),
        }
    }

    pub fn run(&self, report: &Report<M>) -> String {
        let mut out = String::from("@startuml\ndigraph StateSpace {\n");
        let mut seen: HashSet<(String, String)> = HashSet::new();

        for outcome in &report.outcomes {
            for transition in &outcome.transitions {
                let from = (self.describe)(&transition.from);
                let to = (self.describe)(&transition.to);

                if from == to {
                    continue;
                }

                if seen.insert((from.clone(), to.clone())) {
                    out.push_str(&format!("\t{from} -> {to}\n"));
                }
            }
        }

        out.push_str("}\n@enduml");
        out
    }
}
