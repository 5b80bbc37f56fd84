use crate::{
    Enrich, Error, Record, Result,
    mutex::{Mutex, lock},
};
use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};
use tokio_util::sync::CancellationToken;

/// Worker task body for one pool slot.
///
/// Claims record indices from the shared `next` counter until the batch
/// is drained or cancelled. Each claimed record runs through the
/// enrichment computation; the result table lock is held only for the
/// single insert, never for the computation, so inserts do not
/// serialize the parallel work.
///
/// Cancellation is observed at two safe points: before claiming the
/// next index, and mid-computation via `select!`. On computation
/// failure the worker cancels the shared token so its siblings stop at
/// their next safe point, then returns the error to the supervisor.
pub(crate) async fn worker_loop<R, E>(
    _worker_id: usize,
    records: Arc<Vec<R>>,
    next: Arc<AtomicUsize>,
    table: Arc<Mutex<HashMap<R::Id, E::Output>>>,
    cancel: CancellationToken,
    enricher: Arc<E>,
) -> Result<()>
where
    R: Record + Send + Sync + 'static,
    E: Enrich<R> + Send + Sync + 'static,
{
    #[cfg(feature = "tracing")]
    tracing::trace!("worker {_worker_id} started");

    loop {
        if cancel.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::debug!("worker {_worker_id} observed cancellation");
            break;
        }

        // Each index is claimed by exactly one worker.
        let idx = next.fetch_add(1, Ordering::Relaxed);
        let Some(record) = records.get(idx) else {
            break;
        };

        let enriched = tokio::select! {
            () = cancel.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::debug!("worker {_worker_id} cancelled mid-computation");
                break;
            }
            res = enricher.enrich(record) => match res {
                Ok(enriched) => enriched,
                Err(e) => {
                    cancel.cancel();
                    return Err(Error::Computation {
                        source: Box::new(e),
                    });
                }
            },
        };

        lock(&table)
            .inspect_err(|_| cancel.cancel())?
            .insert(record.id(), enriched);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!("worker {_worker_id} stopped");

    Ok(())
}
