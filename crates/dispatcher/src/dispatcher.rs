//! Dispatcher - one concurrent task per enabled collector
//!
//! Each task is a full fetch -> transform -> sink cycle for its kind.
//! Failures stay inside the task: a collector that cannot read produces
//! nothing, a document that cannot be written is skipped, and no failure
//! reaches a sibling task.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

use contracts::{CollectorKind, CollectorSet, DocumentStore, MetricSource, RunContext};

use crate::metrics::{DispatchMetrics, DispatchSnapshot};
use crate::sink;

/// Fans one collection cycle out across the enabled collector kinds
pub struct Dispatcher<S, T> {
    ctx: RunContext<S, T>,
    collectors: CollectorSet,
    metrics: Arc<DispatchMetrics>,
}

impl<S, T> Dispatcher<S, T>
where
    S: MetricSource + Send + Sync + 'static,
    T: DocumentStore + Send + Sync + 'static,
{
    pub fn new(ctx: RunContext<S, T>, collectors: CollectorSet) -> Self {
        Self {
            ctx,
            collectors,
            metrics: Arc::new(DispatchMetrics::new()),
        }
    }

    /// Shared handle to this run's counters
    pub fn metrics(&self) -> Arc<DispatchMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Spawn one task per enabled collector and return the handles.
    ///
    /// Disabled kinds are never spawned and never touch the source. The
    /// caller decides whether to await the handles or let the tasks run
    /// detached.
    pub fn spawn_enabled(&self) -> Vec<JoinHandle<()>> {
        let handles: Vec<_> = self
            .collectors
            .enabled()
            .map(|(kind, index_prefix)| {
                tokio::spawn(run_collector(
                    self.ctx.clone(),
                    kind,
                    index_prefix.to_string(),
                    Arc::clone(&self.metrics),
                ))
            })
            .collect();

        info!(tasks = handles.len(), "Spawned collector tasks");
        handles
    }

    /// Spawn all enabled collectors and wait for every task to finish
    pub async fn run_to_completion(&self) -> DispatchSnapshot {
        for handle in self.spawn_enabled() {
            if let Err(err) = handle.await {
                error!(error = %err, "Collector task panicked");
            }
        }
        self.metrics.snapshot()
    }
}

/// One collector's full cycle: read the source, sink each document
#[instrument(skip(ctx, metrics), fields(collector = %kind))]
async fn run_collector<S, T>(
    ctx: RunContext<S, T>,
    kind: CollectorKind,
    index_prefix: String,
    metrics: Arc<DispatchMetrics>,
) where
    S: MetricSource + Send + Sync + 'static,
    T: DocumentStore + Send + Sync + 'static,
{
    let documents = match collectors::collect(kind, ctx.source.as_ref(), ctx.read_timeout).await {
        Ok(documents) => documents,
        Err(err) => {
            warn!(error = %err, "Collection failed, nothing to sink");
            metrics.inc_collect_failures();
            observability::record_collect_failure(kind.name());
            return;
        }
    };

    debug!(count = documents.len(), "Collected documents");

    for document in documents {
        let written = sink::write_document(
            ctx.target.as_ref(),
            ctx.timezone_shift,
            &ctx.alias,
            &index_prefix,
            document,
        )
        .await;

        match written {
            Ok(()) => {
                metrics.inc_documents_written();
                observability::record_document_sunk(kind.name());
            }
            Err(err) => {
                // One rejected document must not starve the rest of this cycle
                error!(error = %err, "Failed to sink document, skipping");
                metrics.inc_write_failures();
                observability::record_write_failure(kind.name());
            }
        }
    }
}
