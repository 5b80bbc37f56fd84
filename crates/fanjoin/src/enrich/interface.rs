use crate::Record;
use core::future::Future;

/// The per-record enrichment computation.
///
/// Called exactly once per record, with no dependency on any other
/// record — which is what makes a batch safe to parallelize. The
/// computation is opaque to the batch machinery: any I/O it performs
/// and any error it fails with are its own. A failure aborts the whole
/// batch, and the error is surfaced verbatim inside
/// [`Error::Computation`].
///
/// The returned future must be `Send` because computations run on
/// spawned worker tasks. Implementations can use plain `async fn`
/// syntax as long as the resulting future is `Send`.
///
/// # Example
///
/// ```
/// use fanjoin::{Enrich, Record};
/// use std::convert::Infallible;
///
/// struct Row(u64);
///
/// impl Record for Row {
///     type Id = u64;
///     fn id(&self) -> u64 {
///         self.0
///     }
/// }
///
/// struct Labeler;
///
/// impl Enrich<Row> for Labeler {
///     type Output = String;
///     type Error = Infallible;
///
///     async fn enrich(&self, row: &Row) -> Result<String, Infallible> {
///         Ok(format!("row-{}", row.0))
///     }
/// }
/// ```
///
/// [`Error::Computation`]: crate::Error::Computation
pub trait Enrich<R: Record> {
    /// The enriched record, produced one-to-one from an input record.
    type Output: Send + 'static;

    /// Error the computation can fail with.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Enriches a single record.
    fn enrich(
        &self,
        record: &R,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send;
}
