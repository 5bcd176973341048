//! Progress display for batches written to an output directory

use crate::io::configuration::{MIN_PROGRESS_BATCH, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many patterns of a batch have been written
///
/// Batches of [`MIN_PROGRESS_BATCH`] items or fewer finish too quickly to
/// need a bar, so none is drawn for them.
#[derive(Default)]
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a manager with no bar yet
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Prepare the bar for a batch of `total` items
    pub fn initialize(&mut self, total: usize) {
        if total <= MIN_PROGRESS_BATCH {
            return;
        }

        let bar = ProgressBar::new(total as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Show which input is being generated
    pub fn start_item(&self, input: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(input.to_owned());
        }
    }

    /// Count one item as written
    pub fn complete_item(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Items counted so far
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Remove the bar from the terminal and report how many items it counted
    pub fn finish(&self) -> u64 {
        let written = self.position();
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
            tracing::debug!(written, "batch progress finished");
        }
        written
    }
}
