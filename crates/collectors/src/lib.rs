//! # Collectors
//!
//! The five independent metric collectors. Each issues one bounded read
//! against the source cluster and flattens the response into zero or more
//! documents; the dispatcher owns sinking and failure isolation.
//!
//! Per-kind fan-out:
//! - cluster_health: single document
//! - nodes_stats: one document per node (+ `node_name`, `cluster_name`)
//! - indices_stats: one document per index, `.`-prefixed names excluded
//!   (+ `index_name`)
//! - indices_status: one document per cat-indices row
//! - shard_allocation: one document per cat-allocation row

mod cluster_health;
mod indices_stats;
mod indices_status;
mod nodes_stats;
mod rows;
mod shard_allocation;

use std::time::Duration;

use contracts::{CollectorKind, MetricDocument, MetricSource, TelemetryError};

/// Run one collector kind's fetch + transform
///
/// # Errors
/// - Read timeout (carries the endpoint and configured timeout)
/// - Any other read or response-shape failure
pub async fn collect<S: MetricSource + Sync>(
    kind: CollectorKind,
    source: &S,
    timeout: Duration,
) -> Result<Vec<MetricDocument>, TelemetryError> {
    match kind {
        CollectorKind::ClusterHealth => cluster_health::collect(source, timeout).await,
        CollectorKind::NodesStats => nodes_stats::collect(source, timeout).await,
        CollectorKind::IndicesStats => indices_stats::collect(source, timeout).await,
        CollectorKind::IndicesStatus => indices_status::collect(source, timeout).await,
        CollectorKind::ShardAllocation => shard_allocation::collect(source, timeout).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_factory::{MockMetricSource, MockSourceConfig};
    use serde_json::json;

    #[tokio::test]
    async fn test_dispatch_hits_matching_endpoint() {
        let source = MockMetricSource::new()
            .with_response(CollectorKind::ClusterHealth, json!({"status": "green"}));

        let documents = collect(CollectorKind::ClusterHealth, &source, Duration::from_secs(5))
            .await
            .unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(source.calls(), vec![CollectorKind::ClusterHealth]);
    }

    #[tokio::test]
    async fn test_timeout_propagates_with_endpoint() {
        let source = MockMetricSource::with_config(MockSourceConfig {
            timeout_kinds: vec![CollectorKind::IndicesStats],
            ..Default::default()
        });

        let err = collect(CollectorKind::IndicesStats, &source, Duration::from_secs(3))
            .await
            .unwrap_err();

        assert!(err.is_timeout());
        assert!(err.to_string().contains("/_all/_stats"), "got: {err}");
    }
}
