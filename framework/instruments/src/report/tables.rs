use tabled::Tabled;

use crate::comparison::ComparisonReport;
use crate::measurements::TrialMeasurements;

#[derive(Tabled)]
pub(crate) struct TrialSetRow {
    pub backend: &'static str,
    pub trials: usize,
    #[tabled(display = "float2")]
    pub total_ms: f64,
    #[tabled(display = "float2")]
    pub average_ms: f64,
    #[tabled(display = "float2")]
    pub min_ms: f64,
    #[tabled(display = "float2")]
    pub max_ms: f64,
}

impl TrialSetRow {
    pub(crate) fn new(backend: &'static str, measurements: &TrialMeasurements) -> Self {
        // min/max are table-only; the report carries the raw trial durations.
        let min_ms = measurements
            .trials_ms
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        let max_ms = measurements
            .trials_ms
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);

        Self {
            backend,
            trials: measurements.trial_count(),
            total_ms: measurements.all_trials_ms,
            average_ms: measurements.average_ms,
            min_ms,
            max_ms,
        }
    }
}

#[derive(Tabled)]
pub(crate) struct ComparisonRow {
    pub metric: String,
    #[tabled(display = "float2")]
    pub cdn_ms: f64,
    #[tabled(display = "float2")]
    pub s3_ms: f64,
    #[tabled(display = "float2")]
    pub diff_ms: f64,
    #[tabled(display = "float2")]
    pub time_reduction_pct: f64,
    #[tabled(display = "float2")]
    pub performance_increase_pct: f64,
    #[tabled(display = "float2")]
    pub faster_by: f64,
}

impl ComparisonRow {
    pub(crate) fn rows(
        cdn: &TrialMeasurements,
        s3: &TrialMeasurements,
        comparisons: &ComparisonReport,
    ) -> Vec<Self> {
        let mut rows = vec![Self {
            metric: "all trials".to_string(),
            cdn_ms: cdn.all_trials_ms,
            s3_ms: s3.all_trials_ms,
            diff_ms: comparisons.diffs.all_trials,
            time_reduction_pct: comparisons.time_reduction_percent.all_trials,
            performance_increase_pct: comparisons.performance_increase_percent.all_trials,
            faster_by: comparisons.faster_by_multiple.all_trials,
        }];

        for trial in 0..comparisons.diffs.trials.len() {
            rows.push(Self {
                metric: format!("trial {trial}"),
                cdn_ms: cdn.trials_ms[trial],
                s3_ms: s3.trials_ms[trial],
                diff_ms: comparisons.diffs.trials[trial],
                time_reduction_pct: comparisons.time_reduction_percent.trials[trial],
                performance_increase_pct: comparisons.performance_increase_percent.trials[trial],
                faster_by: comparisons.faster_by_multiple.trials[trial],
            });
        }

        rows.push(Self {
            metric: "average".to_string(),
            cdn_ms: cdn.average_ms,
            s3_ms: s3.average_ms,
            diff_ms: comparisons.diffs.average,
            time_reduction_pct: comparisons.time_reduction_percent.average,
            performance_increase_pct: comparisons.performance_increase_percent.average,
            faster_by: comparisons.faster_by_multiple.average,
        });

        rows
    }
}

fn float2(n: &f64) -> String {
    format!("{:.2}", n)
}
