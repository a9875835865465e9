//! Post-processing views over simulation reports: human-readable trace
//! listings, machine-readable summaries, and a state-space digraph export.
//! The engine only exposes data; everything here is presentation.

pub mod digraph;
pub mod render;
pub mod summary;

pub use digraph::StateSpaceDigraph;
pub use render::ReportRenderer;
pub use summary::{summarize, ReportSummary};
