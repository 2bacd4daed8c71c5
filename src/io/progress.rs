//! Progress display for one collapse run

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static COLLAPSE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Cells: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks collapsed cells against the lattice size during a run
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar sized to the lattice
    pub fn new(total_cells: usize) -> Self {
        let bar = ProgressBar::new(total_cells as u64);
        bar.set_style(COLLAPSE_STYLE.clone());
        Self { bar }
    }

    /// Report collapsed cell count and observation steps so far
    pub fn update(&self, collapsed: usize, observations: usize) {
        self.bar.set_position(collapsed as u64);
        self.bar.set_message(format!("{observations} observations"));
    }

    /// Complete the display after a successful run
    pub fn finish(&self, observations: usize) {
        self.bar
            .finish_with_message(format!("collapsed in {observations} observations"));
    }

    /// Abandon the display after a failed run
    pub fn abandon(&self, reason: &str) {
        self.bar.abandon_with_message(reason.to_owned());
    }
}
