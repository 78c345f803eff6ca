use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over the trials in one set.
///
/// Hidden when disabled so the trial loop can drive it unconditionally.
pub(crate) fn trial_progress(label: &str, trial_count: usize, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(trial_count as u64);
    bar.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} {msg} [{wide_bar:.cyan/blue}] {pos}/{len} trials",
        )
        .expect("Failed to set progress style")
        .progress_chars("#>-"),
    );
    bar.set_message(label.to_string());

    bar
}
