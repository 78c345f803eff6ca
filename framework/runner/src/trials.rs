use std::time::Instant;

use reqwest::Client;
use slipstream_core::prelude::MediaSet;
use slipstream_instruments::{duration_ms, TrialMeasurements};

use crate::client::fetch_all_media;
use crate::progress::trial_progress;

/// How many timed batch downloads make up one trial set.
pub const NUM_TRIALS: usize = 5;

/// Run `trial_count` sequential batch downloads against the media set and
/// collect the timings.
///
/// A trial's batch must fully settle before the next trial starts, so the
/// timings reflect repeated, non-overlapping load on the backend. All
/// timestamps are captured locally; nothing is shared between invocations.
pub async fn run_trials(
    client: &Client,
    media: &MediaSet,
    trial_count: usize,
    label: &str,
    show_progress: bool,
) -> anyhow::Result<TrialMeasurements> {
    anyhow::ensure!(trial_count > 0, "trial count must be at least 1");

    let progress = trial_progress(label, trial_count, show_progress);

    let mut trials = Vec::with_capacity(trial_count);
    let run_start = Instant::now();
    for trial in 0..trial_count {
        let trial_start = Instant::now();
        let failed = fetch_all_media(client, media).await;
        let elapsed = trial_start.elapsed();

        if failed > 0 {
            log::warn!(
                "{label} trial {trial}: {failed} of {} downloads failed",
                media.len()
            );
        }
        log::debug!("{label} trial {trial} took {:.2}ms", duration_ms(elapsed));

        trials.push(elapsed);
        progress.inc(1);
    }
    let all_trials = run_start.elapsed();
    progress.finish_and_clear();

    Ok(TrialMeasurements::from_timings(all_trials, trials)?)
}
