mod tables;

use tabled::settings::Style;
use tabled::Table;

use crate::comparison::ComparisonReport;
use crate::measurements::TrialMeasurements;
use crate::report::tables::{ComparisonRow, TrialSetRow};

/// Print the end-of-run summary for the two backends.
pub fn print_summary(
    cdn: &TrialMeasurements,
    s3: &TrialMeasurements,
    comparisons: &ComparisonReport,
) {
    println!("\nTrial sets");
    let mut table = Table::new([TrialSetRow::new("CDN", cdn), TrialSetRow::new("S3", s3)]);
    table.with(Style::modern());
    println!("{table}");

    println!("\nS3 relative to CDN");
    let mut table = Table::new(ComparisonRow::rows(cdn, s3, comparisons));
    table.with(Style::modern());
    println!("{table}");
}
