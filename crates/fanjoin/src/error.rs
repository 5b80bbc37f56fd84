//! Error types for batch enrichment.
//!
//! One enum covers every way a batch can fail. A batch is atomic from
//! the caller's perspective: any of these means no enriched records are
//! returned at all.
//!
//! ## Error cases
//! - `Computation`: the per-record computation failed; its error is
//!   carried as the source.
//! - `DuplicateId`: the input repeated a record id.
//! - `Worker`: a worker task panicked or was aborted by the runtime.
//! - `MissingRecord`: reassembly found no table entry for an id that
//!   was in the order index.

/// A result type defaulting to the crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors a batch enrichment call can produce.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A per-record computation failed.
    ///
    /// The computation's own error is surfaced verbatim as the source.
    /// The first failure observed wins; partial results are discarded.
    #[error("record computation failed: {source}")]
    Computation {
        #[source]
        source: Box<dyn core::error::Error + Send + Sync>,
    },

    /// The input contained the same record id more than once.
    ///
    /// Duplicate ids would overwrite each other in the result table, so
    /// the batch is rejected before any worker starts.
    #[error("duplicate record id in batch: {id}")]
    DuplicateId { id: String },

    /// A worker task panicked or was aborted by the runtime.
    #[error("worker task failed: {context}")]
    Worker { context: String },

    /// An id from the order index had no entry in the result table
    /// after every worker completed cleanly.
    ///
    /// This indicates a bug in the claim/insert protocol and is
    /// reported as an error rather than a panic.
    #[error("missing enriched record for id: {id}")]
    MissingRecord { id: String },

    /// The result table lock was poisoned by a panicking worker.
    ///
    /// Only produced when the `parking-lot` feature is disabled;
    /// `parking_lot` locks do not poison.
    #[cfg(not(feature = "parking-lot"))]
    #[error("result table lock poisoned")]
    LockPoisoned,
}

#[cfg(not(feature = "parking-lot"))]
// Convert all poisoned lock errors to a simplified `LockPoisoned`
impl<T> From<crate::PoisonError<crate::MutexGuard<'_, T>>> for Error {
    fn from(_: crate::PoisonError<crate::MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
