pub mod cli;
pub mod report;
pub mod runner;

pub use report::{render_key_list, render_report, DashboardReport, ModelsView};
pub use runner::{run_dashboard, RunOutcome};
