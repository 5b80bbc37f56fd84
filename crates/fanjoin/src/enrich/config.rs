use std::num::NonZeroUsize;

/// Tuning knobs for batch enrichment.
///
/// The pool is bounded: a batch never runs more concurrent computations
/// than `max_concurrency`, and never spawns more workers than it has
/// records.
///
/// # Example
///
/// ```
/// use fanjoin::EnrichConfig;
///
/// let config = EnrichConfig::new().max_concurrency(16);
/// assert_eq!(config.concurrency(), 16);
/// ```
#[derive(Clone, Debug)]
pub struct EnrichConfig {
    max_concurrency: usize,
}

impl EnrichConfig {
    /// Creates a config with the default pool width.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of concurrent workers.
    ///
    /// Clamped to at least one worker; a zero-width pool could never
    /// drain a batch.
    #[must_use]
    pub fn max_concurrency(mut self, workers: usize) -> Self {
        self.max_concurrency = workers.max(1);
        self
    }

    /// Returns the configured pool width.
    pub fn concurrency(&self) -> usize {
        self.max_concurrency
    }
}

impl Default for EnrichConfig {
    /// Defaults the pool width to the host's available parallelism, or
    /// one worker when that cannot be determined.
    fn default() -> Self {
        let workers = std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        Self {
            max_concurrency: workers,
        }
    }
}
