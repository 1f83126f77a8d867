use indicatif::{ProgressBar, ProgressStyle};

/// A progress sequence over a fixed number of steps.
pub trait ProgressHandle {
    fn inc(&self);
    fn finish(&self, msg: &str);
}

/// Factory for progress sequences. The reorganizer only reports lengths and
/// completed steps through this seam, so non-interactive runs can plug in a
/// no-op without changing behavior.
pub trait ProgressReporter {
    fn for_len(&self, len: u64, label: &str) -> Box<dyn ProgressHandle>;
}

/// Create a progress bar with the given length and label
fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(&format!(
            "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
            label
        ))
        .expect("progress bar template is valid")
        .progress_chars("#>-"),
    );
    pb
}

/// Reporter that draws an indicatif bar per sequence
pub struct IndicatifReporter;

impl ProgressReporter for IndicatifReporter {
    fn for_len(&self, len: u64, label: &str) -> Box<dyn ProgressHandle> {
        Box::new(create_progress_bar(len, label))
    }
}

impl ProgressHandle for ProgressBar {
    fn inc(&self) {
        ProgressBar::inc(self, 1);
    }

    fn finish(&self, msg: &str) {
        self.finish_with_message(msg.to_string());
    }
}

/// Reporter that discards all progress updates
pub struct NoopReporter;

struct NoopHandle;

impl ProgressHandle for NoopHandle {
    fn inc(&self) {}
    fn finish(&self, _msg: &str) {}
}

impl ProgressReporter for NoopReporter {
    fn for_len(&self, _len: u64, _label: &str) -> Box<dyn ProgressHandle> {
        Box::new(NoopHandle)
    }
}
