mod comparison;
mod measurements;
mod report;

pub use comparison::{ComparisonReport, MetricComparison};
pub use measurements::{duration_ms, NoTrialsError, TrialMeasurements};
pub use report::print_summary;
