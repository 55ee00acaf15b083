//! Text report for curve evaluations and the circle radius summary.

pub mod format;
pub mod pipeline;
pub mod report;

pub use format::{Real, Triple};
pub use pipeline::{diagnostic, run};
pub use report::{write_circle_summary, write_evaluations, write_report, REPORT_PARAMETER};
