use super::worker::worker_loop;
use crate::{
    Enrich, EnrichConfig, Error, Record, Result,
    mutex::{Mutex, lock},
};
use futures::future::join_all;
use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, atomic::AtomicUsize},
};
use tokio_util::sync::CancellationToken;

/// Order-preserving concurrent batch enricher.
///
/// Fans an ordered batch of records out across a bounded pool of worker
/// tasks, one computation per record, and fans the results back in. The
/// output order always equals the input order, no matter which workers
/// finish first.
///
/// ## Guarantees
///
/// - ✅ Output order equals input order
/// - ✅ All-or-nothing: a single failure discards the whole batch
/// - ✅ Bounded concurrency ([`EnrichConfig::max_concurrency`])
/// - ✅ No worker outlives the call: failure cancels the shared token
///   and the supervisor joins every worker before returning
///
/// ## How it works
///
/// The input order is captured as an index of record ids before any
/// worker starts. Workers claim records through a shared atomic counter
/// and insert `(id, output)` pairs into a mutex-guarded table, holding
/// the lock only for the insert. After all workers are joined, the
/// output is reassembled by walking the order index.
///
/// # Example
///
/// ```
/// use fanjoin::{BatchEnricher, Enrich, Record};
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
/// struct Doubler;
///
/// impl Enrich<Row> for Doubler {
///     type Output = u64;
///     type Error = Infallible;
///
///     async fn enrich(&self, row: &Row) -> Result<u64, Infallible> {
///         Ok(row.0 * 2)
///     }
/// }
///
/// # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # rt.block_on(async {
/// let enricher = BatchEnricher::new(Doubler);
/// let out = enricher.enrich_all(vec![Row(1), Row(2), Row(3)]).await.unwrap();
/// assert_eq!(out, vec![2, 4, 6]);
/// # });
/// ```
pub struct BatchEnricher<E> {
    enricher: Arc<E>,
    config: EnrichConfig,
}

impl<E> BatchEnricher<E> {
    /// Creates an enricher with the default [`EnrichConfig`].
    pub fn new(enricher: E) -> Self {
        Self::with_config(enricher, EnrichConfig::default())
    }

    /// Creates an enricher with an explicit config.
    pub fn with_config(enricher: E, config: EnrichConfig) -> Self {
        Self {
            enricher: Arc::new(enricher),
            config,
        }
    }

    /// Returns the active config.
    pub fn config(&self) -> &EnrichConfig {
        &self.config
    }

    /// Enriches a batch, returning outputs in the input order.
    ///
    /// An empty batch is valid and returns an empty vector without
    /// spawning anything. Duplicate record ids are rejected with
    /// [`Error::DuplicateId`] before any work starts.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any single computation fails ([`Error::Computation`]). The
    ///   remaining workers are cancelled and joined; partial results
    ///   are never returned.
    /// - The input repeats a record id ([`Error::DuplicateId`]).
    /// - A worker task panics ([`Error::Worker`]).
    pub async fn enrich_all<R>(&self, records: Vec<R>) -> Result<Vec<E::Output>>
    where
        R: Record + Send + Sync + 'static,
        E: Enrich<R> + Send + Sync + 'static,
    {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        // Capture the input order before any concurrent work so the
        // result can be restored no matter which worker finishes first.
        let order: Vec<R::Id> = records.iter().map(Record::id).collect();

        let mut seen = HashSet::with_capacity(order.len());
        for id in &order {
            if !seen.insert(id) {
                return Err(Error::DuplicateId {
                    id: format!("{id:?}"),
                });
            }
        }

        let num_workers = self.config.concurrency().min(records.len());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "enriching batch of {} records across {num_workers} workers",
            records.len()
        );

        let records = Arc::new(records);
        let next = Arc::new(AtomicUsize::new(0));
        let table = Arc::new(Mutex::new(HashMap::with_capacity(order.len())));
        let cancel = CancellationToken::new();

        let mut handles = Vec::with_capacity(num_workers);
        for worker_id in 0..num_workers {
            handles.push(tokio::spawn(worker_loop(
                worker_id,
                Arc::clone(&records),
                Arc::clone(&next),
                Arc::clone(&table),
                cancel.clone(),
                Arc::clone(&self.enricher),
            )));
        }

        // Every worker is joined before the outcome is decided: a
        // failing batch leaves no straggler running in the background.
        for joined in join_all(handles).await {
            match joined {
                Ok(Ok(())) => {}
                Ok(Err(e)) => return Err(e),
                Err(e) => {
                    return Err(Error::Worker {
                        context: e.to_string(),
                    });
                }
            }
        }

        let mut table = lock(&table)?;
        let mut enriched = Vec::with_capacity(order.len());
        for id in order {
            let Some(item) = table.remove(&id) else {
                return Err(Error::MissingRecord {
                    id: format!("{id:?}"),
                });
            };
            enriched.push(item);
        }

        Ok(enriched)
    }
}
