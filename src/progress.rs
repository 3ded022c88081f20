use cancel_this::Cancellable;
use log::info;

/// A cooperative cancellation and progress reporting hook.
///
/// The search algorithms call [`ProgressSink::check`] at the start of every search node and
/// abort with the returned error (if any). Progress is reported as a fraction in `[0, 1]`
/// by the algorithms that can estimate it.
///
/// Global cancellation (e.g. [`cancel_this::on_timeout`]) is checked independently of any
/// sink.
pub trait ProgressSink: Send + Sync {
    fn check(&self) -> Cancellable<()> {
        Ok(())
    }

    fn set_progress(&self, _fraction: f64) {}
}

/// A [`ProgressSink`] that never cancels and reports progress through `log::info!`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn set_progress(&self, fraction: f64) {
        info!("Progress: {:.1}%", fraction * 100.0);
    }
}
