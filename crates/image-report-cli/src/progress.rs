use image_report_core::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// CLI progress reporter using indicatif spinners on stderr.
pub struct CliReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl CliReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn start_spinner(&self, message: &str) {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));

        if let Ok(mut guard) = self.bar.lock() {
            if let Some(old) = guard.take() {
                old.finish_and_clear();
            }
            *guard = Some(pb);
        }
    }

    fn finish_bar(&self) {
        if let Ok(mut guard) = self.bar.lock() {
            if let Some(pb) = guard.take() {
                pb.finish_and_clear();
            }
        }
    }
}

impl ProgressReporter for CliReporter {
    fn on_scan_start(&self) {
        self.start_spinner("Scanning for images and source files...");
    }

    fn on_scan_complete(&self, images: usize, sources: usize, _duration_secs: f64) {
        self.start_spinner(&format!(
            "Found {} images, {} source files. Reading references...",
            images, sources
        ));
    }

    fn on_extract_progress(&self, files_read: usize, total_files: usize, current_file: &str) {
        if let Ok(guard) = self.bar.lock() {
            if let Some(pb) = guard.as_ref() {
                pb.set_message(format!(
                    "Reading references {}/{}: {}",
                    files_read, total_files, current_file
                ));
            }
        }
    }

    fn on_extract_complete(&self, _references: usize, _duration_secs: f64) {
        self.finish_bar();
    }
}

impl Drop for CliReporter {
    fn drop(&mut self) {
        self.finish_bar();
    }
}
