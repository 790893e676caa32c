/// Trait for reporting audit progress.
///
/// The CLI implements it with indicatif spinners. All methods default to no-ops.
pub trait ProgressReporter: Send + Sync {
    fn on_scan_start(&self) {}
    fn on_scan_complete(&self, _images: usize, _sources: usize, _duration_secs: f64) {}
    fn on_extract_progress(&self, _files_read: usize, _total_files: usize, _current_file: &str) {}
    fn on_extract_complete(&self, _references: usize, _duration_secs: f64) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
