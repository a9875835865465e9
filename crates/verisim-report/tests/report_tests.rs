use verisim_engine::{
    OutcomeSimulation, OutcomeStatus, Report, Simulator,
};
use verisim_report::{summarize, ReportRenderer, StateSpaceDigraph};
use verisim_spec::{
    Init, NamedAction, SimulationOptions, Specification, Step, Transition,
};

fn sample_report() -> Report<i64> {
    let success = OutcomeSimulation::new(OutcomeStatus::Success).with_transitions(vec![
        Transition::new(0, 1, "increment", 1, 1),
        Transition::new(1, 2, "increment", 2, 2),
    ]);
    let failed = OutcomeSimulation::new(OutcomeStatus::FailedStateProperties)
        .with_transitions(vec![Transition::new(0, -1, "decrement", 1, 1)])
        .with_failed_state_properties(vec!["nonnegative".to_string()]);
    Report::new(vec![success, failed])
}

#[test]
fn test_render_trace_lines_and_status() {
    let rendered = ReportRenderer::<i64>::display().run(&sample_report());

    assert!(rendered.contains("[1] (1/1 - increment) -> 1"));
    assert!(rendered.contains("[1] (2/2 - increment) -> 2"));
    assert!(rendered.contains("[2] (1/1 - decrement) -> -1"));
    assert!(rendered.contains("\nSimulation 1: Success\n"));
    assert!(rendered.contains("\nSimulation 2: Failed state properties\n"));
}

#[test]
fn test_render_failed_property_bullets() {
    let rendered = ReportRenderer::<i64>::display().run(&sample_report());

    assert!(rendered.contains("Failed state properties:"));
    assert!(rendered.contains("\n\t - nonnegative"));
    // The successful walk contributes no bullet lists.
    assert_eq!(rendered.matches("Failed state properties:").count(), 1);
    assert!(!rendered.contains("Failed temporal properties:"));
}

#[test]
fn test_render_with_custom_describe() {
    let renderer = ReportRenderer::new(|n: &i64| format!("S{n}"));
    let rendered = renderer.run(&sample_report());
    assert!(rendered.contains("[1] (1/1 - increment) -> S1"));
}

#[test]
fn test_digraph_dedups_edges_and_skips_self_loops() {
    let outcome = OutcomeSimulation::new(OutcomeStatus::Success).with_transitions(vec![
        Transition::new(0, 1, "increment", 1, 1),
        Transition::new(1, 0, "decrement", 2, 2),
        Transition::new(0, 1, "increment", 3, 3),
        Transition::new(1, 1, "noop", 4, 4),
    ]);
    let report = Report::new(vec![outcome]);

    let digraph = StateSpaceDigraph::new(|n: &i64| format!("S{n}")).run(&report);

    assert!(digraph.starts_with("@startuml\ndigraph StateSpace {\n"));
    assert!(digraph.ends_with("}\n@enduml"));
    // Repeated edge appears once; the self-loop not at all.
    assert_eq!(digraph.matches("\tS0 -> S1\n").count(), 1);
    assert_eq!(digraph.matches("\tS1 -> S0\n").count(), 1);
    assert!(!digraph.contains("S1 -> S1"));
}

#[test]
fn test_digraph_spans_all_walks() {
    let digraph = StateSpaceDigraph::new(|n: &i64| format!("S{n}")).run(&sample_report());
    assert!(digraph.contains("\tS0 -> S1\n"));
    assert!(digraph.contains("\tS0 -> S-1\n"));
}

#[test]
fn test_summary_counts_and_deduplicates_names() {
    let summary = summarize(&sample_report());

    assert_eq!(summary.simulations, 2);
    assert_eq!(summary.successes, 1);
    assert_eq!(summary.failed_state_properties, 1);
    assert_eq!(summary.failed_temporal_properties, 0);
    assert_eq!(summary.failed_init, 0);
    assert_eq!(summary.failed_state_property_names, vec!["nonnegative"]);
    assert!(summary.failed_temporal_property_names.is_empty());
}

#[test]
fn test_summary_serializes_to_json() {
    let summary = summarize(&sample_report());
    let json = serde_json::to_string(&summary).unwrap();

    assert!(json.contains("\"simulations\":2"));
    assert!(json.contains("\"successes\":1"));

    let back: verisim_report::ReportSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, summary);
}

#[test]
fn test_full_pipeline_from_seeded_run() {
    let step = Step::new(vec![
        NamedAction::new("increment", |n: &i64| n + 1),
        NamedAction::new("decrement", |n: &i64| n - 1),
    ])
    .unwrap();
    let spec = Specification::new(Init::new(|| 0), step).unwrap();

    let options = SimulationOptions::new(2, 2000, 10, true).unwrap();
    let report = Simulator::seeded(options, 17).run(&spec);

    let rendered = ReportRenderer::<i64>::display().run(&report);
    assert!(rendered.contains("Simulation 1: Success"));
    assert!(rendered.contains("Simulation 2: Success"));

    let summary = summarize(&report);
    assert_eq!(summary.simulations, 2);
    assert_eq!(summary.successes, 2);
}
