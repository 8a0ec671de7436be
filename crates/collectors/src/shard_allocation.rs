//! Shard allocation collector
//!
//! One document per row of the `/_cat/allocation` listing (node, shard
//! count, disk usage in byte units).

use std::time::Duration;

use contracts::{CollectorKind, MetricDocument, MetricSource, TelemetryError};

use crate::rows::documents_from_rows;

/// Fetch per-node allocation and fan out one document per row
pub async fn collect<S: MetricSource + Sync>(
    source: &S,
    timeout: Duration,
) -> Result<Vec<MetricDocument>, TelemetryError> {
    let response = source.cat_allocation(timeout).await?;
    documents_from_rows(CollectorKind::ShardAllocation.endpoint(), response)
}
