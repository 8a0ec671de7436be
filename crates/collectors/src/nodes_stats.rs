//! Node statistics collector
//!
//! One document per node in the `/_nodes/stats` response, tagged with the
//! node key and the response-level cluster name.

use std::time::Duration;

use serde_json::Value;
use tracing::warn;

use contracts::{CollectorKind, MetricDocument, MetricSource, TelemetryError};

/// Fetch per-node statistics and fan out one document per node
pub async fn collect<S: MetricSource + Sync>(
    source: &S,
    timeout: Duration,
) -> Result<Vec<MetricDocument>, TelemetryError> {
    let response = source.nodes_stats(timeout).await?;
    documents_from(response)
}

fn documents_from(response: Value) -> Result<Vec<MetricDocument>, TelemetryError> {
    let endpoint = CollectorKind::NodesStats.endpoint();

    let Value::Object(mut top) = response else {
        return Err(TelemetryError::read(endpoint, "expected a json object"));
    };

    let cluster_name = top
        .get("cluster_name")
        .cloned()
        .ok_or_else(|| TelemetryError::read(endpoint, "missing 'cluster_name' field"))?;

    let Some(Value::Object(nodes)) = top.remove("nodes") else {
        return Err(TelemetryError::read(endpoint, "missing 'nodes' object"));
    };

    let mut documents = Vec::with_capacity(nodes.len());
    for (node_name, node) in nodes {
        let Some(mut document) = MetricDocument::from_object(node) else {
            warn!(node = %node_name, "skipping non-object node entry");
            continue;
        };
        document.insert("node_name", node_name);
        document.insert("cluster_name", cluster_name.clone());
        documents.push(document);
    }

    Ok(documents)
}
