//! Timing and invocation statistics for the classifier.

use std::time::Duration;
use tracing::info;

/// Metrics collected across the classifier's lifetime.
///
/// The classifier is single-threaded by contract, so plain fields suffice.
#[derive(Debug, Default)]
pub struct InferenceMetrics {
    /// How many forward passes completed successfully.
    inferences_run: u64,
    /// How many forward passes failed.
    inferences_failed: u64,
    /// One-time initialization cost.
    init_time: Option<Duration>,
    /// Per-inference latencies in microseconds.
    inference_times: Vec<u64>,
}

impl InferenceMetrics {
    /// Create an empty metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the one-time initialization duration.
    pub fn record_init(&mut self, elapsed: Duration) {
        self.init_time = Some(elapsed);
    }

    /// Record one successful forward pass.
    pub fn record_inference(&mut self, elapsed: Duration) {
        self.inferences_run += 1;
        self.inference_times.push(elapsed.as_micros() as u64);
        // Keep only the most recent window for memory efficiency
        if self.inference_times.len() > 10_000 {
            self.inference_times.drain(0..5_000);
        }
    }

    /// Record a failed forward pass.
    pub fn record_failure(&mut self) {
        self.inferences_failed += 1;
    }

    /// Count of successful forward passes.
    pub fn inferences_run(&self) -> u64 {
        self.inferences_run
    }

    /// Count of failed forward passes.
    pub fn inferences_failed(&self) -> u64 {
        self.inferences_failed
    }

    /// Initialization duration, once recorded.
    pub fn init_time(&self) -> Option<Duration> {
        self.init_time
    }

    /// Latency statistics over the recorded window.
    pub fn inference_stats(&self) -> InferenceStats {
        if self.inference_times.is_empty() {
            return InferenceStats::default();
        }

        let mut sorted = self.inference_times.clone();
        sorted.sort_unstable();

        let sum: u64 = sorted.iter().sum();
        let count = sorted.len();

        InferenceStats {
            count: count as u64,
            mean_us: sum / count as u64,
            p50_us: sorted[count / 2],
            p99_us: sorted[(count as f64 * 0.99) as usize],
            max_us: *sorted.last().unwrap_or(&0),
        }
    }

    /// Log a summary of collected statistics.
    pub fn print_summary(&self) {
        let stats = self.inference_stats();
        info!(
            inferences = self.inferences_run,
            failures = self.inferences_failed,
            init_ms = self.init_time.map(|d| d.as_millis() as u64).unwrap_or(0),
            mean_us = stats.mean_us,
            p50_us = stats.p50_us,
            p99_us = stats.p99_us,
            max_us = stats.max_us,
            "Classifier metrics summary"
        );
    }
}

/// Latency statistics in microseconds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InferenceStats {
    pub count: u64,
    pub mean_us: u64,
    pub p50_us: u64,
    pub p99_us: u64,
    pub max_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_recording() {
        let mut metrics = InferenceMetrics::new();

        metrics.record_init(Duration::from_millis(12));
        metrics.record_inference(Duration::from_micros(100));
        metrics.record_inference(Duration::from_micros(300));
        metrics.record_failure();

        assert_eq!(metrics.inferences_run(), 2);
        assert_eq!(metrics.inferences_failed(), 1);
        assert_eq!(metrics.init_time(), Some(Duration::from_millis(12)));

        let stats = metrics.inference_stats();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean_us, 200);
        assert_eq!(stats.max_us, 300);
    }

    #[test]
    fn test_empty_stats_are_zero() {
        let metrics = InferenceMetrics::new();
        assert_eq!(metrics.inference_stats(), InferenceStats::default());
    }
}
