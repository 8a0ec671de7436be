//! Index status collector
//!
//! One document per row of the `/_cat/indices` listing (health, status,
//! index, shard counts, doc counts, store size).

use std::time::Duration;

use contracts::{CollectorKind, MetricDocument, MetricSource, TelemetryError};

use crate::rows::documents_from_rows;

/// Fetch the tabular index listing and fan out one document per row
pub async fn collect<S: MetricSource + Sync>(
    source: &S,
    timeout: Duration,
) -> Result<Vec<MetricDocument>, TelemetryError> {
    let response = source.cat_indices(timeout).await?;
    documents_from_rows(CollectorKind::IndicesStatus.endpoint(), response)
}
