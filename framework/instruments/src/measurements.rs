use std::time::Duration;

use serde::Serialize;

/// The timings collected by running a set of trials against one backend.
///
/// `average_ms` is always exactly `all_trials_ms / trials_ms.len()`. The
/// serialized field names match the report format consumed downstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialMeasurements {
    /// Wall-clock duration of the whole trial loop.
    #[serde(rename = "allTrialsMs")]
    pub all_trials_ms: f64,
    /// Wall-clock duration of each trial, in run order.
    #[serde(rename = "trialsMs")]
    pub trials_ms: Vec<f64>,
    #[serde(rename = "averageMs")]
    pub average_ms: f64,
}

/// Building measurements from no trials at all would divide by zero.
#[derive(Debug, thiserror::Error)]
#[error("measurements need at least one trial")]
pub struct NoTrialsError;

impl TrialMeasurements {
    /// Build measurements from the overall wall-clock duration of the trial
    /// loop and the individual trial durations.
    pub fn from_timings(
        all_trials: Duration,
        trials: Vec<Duration>,
    ) -> Result<Self, NoTrialsError> {
        if trials.is_empty() {
            return Err(NoTrialsError);
        }

        let all_trials_ms = duration_ms(all_trials);
        Ok(Self {
            all_trials_ms,
            average_ms: all_trials_ms / trials.len() as f64,
            trials_ms: trials.into_iter().map(duration_ms).collect(),
        })
    }

    pub fn trial_count(&self) -> usize {
        self.trials_ms.len()
    }
}

/// Milliseconds with fractional precision.
pub fn duration_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn average_is_the_exact_division_of_the_total() {
        let measurements = TrialMeasurements::from_timings(
            Duration::from_millis(600),
            vec![
                Duration::from_millis(100),
                Duration::from_millis(200),
                Duration::from_millis(300),
            ],
        )
        .unwrap();

        assert_eq!(measurements.all_trials_ms, 600.0);
        assert_eq!(measurements.trials_ms, vec![100.0, 200.0, 300.0]);
        assert_eq!(measurements.average_ms, 200.0);
        assert_eq!(
            measurements.average_ms,
            measurements.all_trials_ms / measurements.trial_count() as f64
        );
    }

    #[test]
    fn trial_count_matches_the_recorded_trials() {
        let measurements = TrialMeasurements::from_timings(
            Duration::from_millis(10),
            vec![Duration::from_millis(4), Duration::from_millis(5)],
        )
        .unwrap();

        assert_eq!(measurements.trial_count(), 2);
    }

    #[test]
    fn zero_trials_are_rejected() {
        let result = TrialMeasurements::from_timings(Duration::ZERO, Vec::new());

        assert!(result.is_err());
    }

    #[test]
    fn serializes_with_the_report_field_names() {
        let measurements = TrialMeasurements::from_timings(
            Duration::from_millis(100),
            vec![Duration::from_millis(100)],
        )
        .unwrap();

        let json = serde_json::to_value(&measurements).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "allTrialsMs": 100.0,
                "trialsMs": [100.0],
                "averageMs": 100.0,
            })
        );
    }
}
