//! Chain run metrics.
//!
//! Collected on every datetime run; cheap enough that there is no separate
//! fast path. The CLI prints them in verbose datetime reports.

use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the chain run.
    pub total: Duration,
    /// One entry per rule the trigger scan admitted, in the order they ran.
    pub steps: Vec<StepMetrics>,
    /// Rules skipped because the input lacked their buckets.
    pub skipped: usize,
}

/// Timing of a single rule attempt.
#[derive(Debug, Clone)]
pub struct StepMetrics {
    pub rule: &'static str,
    pub duration: Duration,
    pub matched: bool,
}

impl RunMetrics {
    pub fn matched(&self) -> usize {
        self.steps.iter().filter(|s| s.matched).count()
    }
}
