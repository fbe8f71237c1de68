//! Progress bar display for installations

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for artifact materialization
pub struct ProgressDisplay {
    file_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total file count
    pub fn new(total_files: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let file_pb = ProgressBar::new(total_files);
        file_pb.set_style(style);

        Self { file_pb }
    }

    /// Create a display that draws nothing (tests, --json output)
    pub fn hidden() -> Self {
        Self {
            file_pb: ProgressBar::hidden(),
        }
    }

    /// Record one written file
    pub fn file_written(&self, label: &str) {
        self.file_pb.set_message(label.to_string());
        self.file_pb.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.file_pb.finish_and_clear();
    }
}
