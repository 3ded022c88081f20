use crate::progress::ProgressSink;
use cancel_this::Cancellable;
use std::sync::Arc;

/// A "flat" configuration object shared by all support enumeration procedures.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumerationConfig {
    /// Use strong (strict) domination when pruning dominated actions (default: `true`).
    ///
    /// Only used by [`crate::enumeration::AllUndominatedSubsupports`]; the possible-Nash
    /// search always prunes strong dominations first and weak dominations afterwards.
    pub strong: bool,
    /// Compare actions conditionally on reaching their information set instead of
    /// comparing expected payoffs of the whole game (default: `true`).
    pub conditional: bool,
    /// Cancel the procedure once it visits more than the given number of search nodes
    /// (default: `usize::MAX`).
    pub max_visited: usize,
    /// An optional cancellation and progress hook, polled at every search node
    /// (default: `None`).
    #[cfg_attr(feature = "serde", serde(skip))]
    pub progress: Option<Arc<dyn ProgressSink>>,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        EnumerationConfig::new(true, true)
    }
}

impl From<&EnumerationConfig> for EnumerationConfig {
    fn from(value: &EnumerationConfig) -> Self {
        value.clone()
    }
}

impl EnumerationConfig {
    /// Create a new [`EnumerationConfig`] with the given domination flags, no budget
    /// and no progress sink.
    pub fn new(strong: bool, conditional: bool) -> EnumerationConfig {
        EnumerationConfig {
            strong,
            conditional,
            max_visited: usize::MAX,
            progress: None,
        }
    }

    /// Replace the progress sink.
    pub fn with_progress<P: ProgressSink + 'static>(mut self, progress: P) -> EnumerationConfig {
        self.progress = Some(Arc::new(progress));
        self
    }

    /// Poll the progress sink (if any) for cancellation.
    pub fn check_progress(&self) -> Cancellable<()> {
        match &self.progress {
            Some(progress) => progress.check(),
            None => Ok(()),
        }
    }

    pub fn set_progress(&self, fraction: f64) {
        if let Some(progress) = &self.progress {
            progress.set_progress(fraction);
        }
    }
}
