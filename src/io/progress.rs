//! Progress display for batch maze generation

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Mazes: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many mazes of a batch have been written
///
/// Single mazes finish too quickly to be worth a bar, so nothing is drawn
/// unless the batch has more than one entry.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a progress display for `count` mazes
    pub fn new(count: usize) -> Self {
        let bar = (count > 1).then(|| {
            let bar = ProgressBar::new(count as u64);
            bar.set_style(BATCH_STYLE.clone());
            bar
        });
        Self { bar }
    }

    /// Create a manager that never draws anything
    pub const fn hidden() -> Self {
        Self { bar: None }
    }

    /// Whether a bar is being drawn
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Record one finished maze
    pub fn complete_one(&self, label: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(label.to_string());
            bar.inc(1);
        }
    }

    /// Clear the display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
