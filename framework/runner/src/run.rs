use anyhow::Context;
use serde::Serialize;
use slipstream_core::prelude::{extract_media, to_storage_urls};
use slipstream_instruments::{print_summary, ComparisonReport, TrialMeasurements};

use crate::cli::SlipstreamCli;
use crate::client::{fetch_home, HOME_ENDPOINT};
use crate::trials::{run_trials, NUM_TRIALS};

/// The result handed back to the caller once a run completes.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub message: String,
    pub data: ReportData,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub cdn: TrialMeasurements,
    pub s3: TrialMeasurements,
    pub comparisons: ComparisonReport,
}

/// Run the full benchmark: fetch the home payload, time the CDN URL set,
/// rewrite it onto S3 and time that, then compare the two.
///
/// A single pass with no retries; the first failure ends the run before any
/// report is produced.
pub fn run(cli: SlipstreamCli) -> anyhow::Result<RunReport> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to create Tokio runtime")?;

    runtime.block_on(async {
        let client = reqwest::Client::new();

        log::info!("Fetching the home screen payload");
        let home = fetch_home(&client, HOME_ENDPOINT)
            .await
            .context("Failed to fetch the home screen payload")?;

        let media =
            extract_media(&home).context("Failed to extract media URLs from the home payload")?;
        log::info!(
            "Extracted {} media URLs ({} banner, {} carousel, {} hero)",
            media.len(),
            media.banner.len(),
            media.carousel.len(),
            media.hero.len(),
        );

        let show_progress = !cli.no_progress;

        log::info!("Testing CDN...");
        let cdn = run_trials(&client, &media, NUM_TRIALS, "CDN", show_progress).await?;

        log::info!("Testing S3...");
        let storage_media = to_storage_urls(&media);
        let s3 = run_trials(&client, &storage_media, NUM_TRIALS, "S3", show_progress).await?;

        let comparisons = ComparisonReport::new(&cdn, &s3);

        if !cli.no_summary {
            print_summary(&cdn, &s3, &comparisons);
        }

        Ok(RunReport {
            message: "Test Completed!".to_string(),
            data: ReportData {
                cdn,
                s3,
                comparisons,
            },
        })
    })
}
