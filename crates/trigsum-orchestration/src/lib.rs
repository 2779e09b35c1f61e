//! # trigsum-orchestration
//!
//! Strategy selection, timed execution, and result analysis.

pub mod interfaces;
pub mod orchestrator;
pub mod report;
pub mod summer_selection;

pub use interfaces::{ResultPresenter, SummationResult};
pub use orchestrator::{analyze_comparison_results, execute_summations};
pub use report::{build_report, ComparisonReport};
