//! Source/target client traits
//!
//! Defines the abstract interfaces for the read-only metric source and the
//! write-only document store. Both are implemented by the real HTTP client
//! and by the mocks in `client_factory`.

use std::time::Duration;

use serde_json::Value;

use crate::{MetricDocument, TelemetryError};

/// Read-only access to the source cluster's metric endpoints
///
/// Every call is bounded by the passed timeout; implementations must be safe
/// for concurrent use by all collectors.
#[trait_variant::make(MetricSource: Send)]
pub trait LocalMetricSource {
    /// Cluster health summary (`/_cluster/health`)
    async fn cluster_health(&self, timeout: Duration) -> Result<Value, TelemetryError>;

    /// Per-node statistics (`/_nodes/stats`)
    async fn nodes_stats(&self, timeout: Duration) -> Result<Value, TelemetryError>;

    /// Per-index statistics (`/_all/_stats`)
    async fn indices_stats(&self, timeout: Duration) -> Result<Value, TelemetryError>;

    /// Tabular index listing (`/_cat/indices`)
    async fn cat_indices(&self, timeout: Duration) -> Result<Value, TelemetryError>;

    /// Tabular per-node allocation (`/_cat/allocation`)
    async fn cat_allocation(&self, timeout: Duration) -> Result<Value, TelemetryError>;
}

/// Write-only access to the target cluster
///
/// One document per call, no document id: each write appends a new record.
/// Must tolerate concurrent invocation from all collector tasks.
#[trait_variant::make(DocumentStore: Send)]
pub trait LocalDocumentStore {
    /// Write a single document to the named index
    ///
    /// # Errors
    /// Returns write error (timeout, connection, rejected write); the store
    /// does not retry.
    async fn store(&self, index: &str, document: &MetricDocument) -> Result<(), TelemetryError>;
}
