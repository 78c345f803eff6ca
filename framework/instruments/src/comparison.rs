use serde::Serialize;

use crate::measurements::TrialMeasurements;

/// One derived metric across the three views of a trial set: the whole loop,
/// each paired trial, and the average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricComparison {
    #[serde(rename = "allTrials")]
    pub all_trials: f64,
    pub trials: Vec<f64>,
    pub average: f64,
}

impl MetricComparison {
    fn derive(
        baseline: &TrialMeasurements,
        candidate: &TrialMeasurements,
        metric: impl Fn(f64, f64) -> f64,
    ) -> Self {
        Self {
            all_trials: metric(baseline.all_trials_ms, candidate.all_trials_ms),
            trials: baseline
                .trials_ms
                .iter()
                .zip(&candidate.trials_ms)
                .map(|(&baseline_ms, &candidate_ms)| metric(baseline_ms, candidate_ms))
                .collect(),
            average: metric(baseline.average_ms, candidate.average_ms),
        }
    }
}

/// How the candidate backend's timings relate to the baseline's.
///
/// The percentage denominators are asymmetric: time reduction is relative to
/// the candidate, performance increase relative to the baseline. A zero
/// denominator surfaces as NaN or infinity, never as zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub diffs: MetricComparison,
    #[serde(rename = "timeReductionPercent")]
    pub time_reduction_percent: MetricComparison,
    #[serde(rename = "performanceIncreasePercent")]
    pub performance_increase_percent: MetricComparison,
    #[serde(rename = "fasterByMultiple")]
    pub faster_by_multiple: MetricComparison,
}

impl ComparisonReport {
    pub fn new(baseline: &TrialMeasurements, candidate: &TrialMeasurements) -> Self {
        Self {
            diffs: MetricComparison::derive(baseline, candidate, |baseline, candidate| {
                candidate - baseline
            }),
            time_reduction_percent: MetricComparison::derive(
                baseline,
                candidate,
                |baseline, candidate| (candidate - baseline) / candidate * 100.0,
            ),
            performance_increase_percent: MetricComparison::derive(
                baseline,
                candidate,
                |baseline, candidate| (candidate - baseline) / baseline * 100.0,
            ),
            faster_by_multiple: MetricComparison::derive(
                baseline,
                candidate,
                |baseline, candidate| candidate / baseline,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn measurements(trials_ms: &[u64]) -> TrialMeasurements {
        TrialMeasurements::from_timings(
            Duration::from_millis(trials_ms.iter().sum()),
            trials_ms.iter().map(|&ms| Duration::from_millis(ms)).collect(),
        )
        .unwrap()
    }

    #[test]
    fn candidate_twice_as_fast() {
        let baseline = measurements(&[200, 200]);
        let candidate = measurements(&[100, 100]);

        let report = ComparisonReport::new(&baseline, &candidate);

        assert_eq!(report.diffs.average, -100.0);
        assert_eq!(report.time_reduction_percent.average, -100.0);
        assert_eq!(report.performance_increase_percent.average, -50.0);
        assert_eq!(report.faster_by_multiple.average, 0.5);
    }

    #[test]
    fn equal_trial_sets_compare_as_identical() {
        let baseline = measurements(&[100, 300]);
        let candidate = measurements(&[100, 300]);

        let report = ComparisonReport::new(&baseline, &candidate);

        assert_eq!(report.diffs.all_trials, 0.0);
        assert_eq!(report.diffs.trials, vec![0.0, 0.0]);
        assert_eq!(report.diffs.average, 0.0);
        assert_eq!(report.time_reduction_percent.average, 0.0);
        assert_eq!(report.performance_increase_percent.average, 0.0);
        assert_eq!(report.faster_by_multiple.average, 1.0);
    }

    #[test]
    fn diffs_negate_when_the_arguments_swap() {
        let first = measurements(&[120, 80]);
        let second = measurements(&[90, 140]);

        let forward = ComparisonReport::new(&first, &second);
        let swapped = ComparisonReport::new(&second, &first);

        assert_eq!(forward.diffs.all_trials, -swapped.diffs.all_trials);
        assert_eq!(forward.diffs.average, -swapped.diffs.average);
        for (forward_ms, swapped_ms) in forward.diffs.trials.iter().zip(&swapped.diffs.trials) {
            assert_eq!(*forward_ms, -swapped_ms);
        }
    }

    #[test]
    fn trials_are_compared_pairwise_in_order() {
        let baseline = measurements(&[100, 200, 300]);
        let candidate = measurements(&[150, 150, 150]);

        let report = ComparisonReport::new(&baseline, &candidate);

        assert_eq!(report.diffs.trials, vec![50.0, -50.0, -150.0]);
        assert_eq!(report.faster_by_multiple.trials, vec![1.5, 0.75, 0.5]);
    }

    #[test]
    fn zero_denominators_stay_representable() {
        let zeros = TrialMeasurements::from_timings(Duration::ZERO, vec![Duration::ZERO]).unwrap();
        let nonzero = measurements(&[100]);

        let report = ComparisonReport::new(&nonzero, &zeros);

        // (0 - 100) / 0 and 0 / 100 against a zero candidate.
        assert!(report.time_reduction_percent.average.is_infinite());
        assert_eq!(report.faster_by_multiple.average, 0.0);

        let report = ComparisonReport::new(&zeros, &zeros);

        assert!(report.time_reduction_percent.average.is_nan());
        assert!(report.faster_by_multiple.average.is_nan());
    }
}
