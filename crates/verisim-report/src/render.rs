use std::fmt::Display;

use verisim_engine::Report;

/// Renders a report as a human-readable trace listing:
/// one `[sim#] (transition#/attempt# - action) -> state` line per transition,
/// a per-walk status line, and bullet lists of failed property names.
pub struct ReportRenderer<M> {
    describe: Box<dyn Fn(&M) -> String>,
}

impl<M: 'static> ReportRenderer<M> {
    pub fn new(describe: impl Fn(&M) -> String + 'static) -> Self {
        Self {
            describe: Box::new(describe),
        }
    }

    pub fn run(&self, report: &Report<M>) -> String {
        let mut out = String::new();

        for (index, outcome) in report.outcomes.iter().enumerate() {
            let sim = index + 1;

            for transition in &outcome.transitions {
                out.push_str(&format!(
                    "[{}] ({}/{} - {}) -> {}\n",
                    sim,
                    transition.number,
                    transition.attempt,
                    transition.action,
                    (self.describe)(&transition.to)
                ));
            }

            out.push_str(&format!("\nSimulation {}: {}\n", sim, outcome.status.label()));

            if !outcome.failed_state_properties.is_empty() {
                out.push_str("\nFailed state properties:");
                for name in &outcome.failed_state_properties {
                    out.push_str(&format!("\n\t - {name}"));
                }
                out.push('\n');
            }

            if !outcome.failed_temporal_properties.is_empty() {
                out.push_str("\nFailed temporal properties:");
                for name in &outcome.failed_temporal_properties {
                    out.push_str(&format!("\n\t - {name}"));
                }
                out.push('\n');
            }

            out.push('\n');
            out.push_str(&"-".repeat(140));
            out.push_str("\n\n");
        }

        out
    }
}

impl<M: Display + 'static> ReportRenderer<M> {
    /// Renderer that describes states through their `Display` impl.
    pub fn display() -> Self {
        Self::new(|model: &M| model.to_string())
    }
}
