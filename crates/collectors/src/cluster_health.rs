//! Cluster health collector
//!
//! The whole `/_cluster/health` summary becomes a single document.

use std::time::Duration;

use serde_json::Value;

use contracts::{CollectorKind, MetricDocument, MetricSource, TelemetryError};

/// Fetch and flatten the cluster health summary
pub async fn collect<S: MetricSource + Sync>(
    source: &S,
    timeout: Duration,
) -> Result<Vec<MetricDocument>, TelemetryError> {
    let response = source.cluster_health(timeout).await?;
    documents_from(response)
}

fn documents_from(response: Value) -> Result<Vec<MetricDocument>, TelemetryError> {
    let document = MetricDocument::from_object(response).ok_or_else(|| {
        TelemetryError::read(
            CollectorKind::ClusterHealth.endpoint(),
            "expected a json object",
        )
    })?;
    Ok(vec![document])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_document() {
        let documents = documents_from(json!({
            "cluster_name": "prod",
            "status": "yellow",
            "number_of_nodes": 3
        }))
        .unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].get("status"), Some(&json!("yellow")));
    }

    #[test]
    fn test_non_object_response_is_error() {
        let err = documents_from(json!(["green"])).unwrap_err();
        assert!(err.to_string().contains("/_cluster/health"), "got: {err}");
    }
}
