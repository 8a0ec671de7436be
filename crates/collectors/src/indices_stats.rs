//! Index statistics collector
//!
//! One document per index in the `/_all/_stats` response, tagged with the
//! index key. Metadata/system indices (names starting with `.`) are the one
//! filtering rule in the whole pipeline.

use std::time::Duration;

use serde_json::Value;
use tracing::warn;

use contracts::{CollectorKind, MetricDocument, MetricSource, TelemetryError};

/// Fetch per-index statistics and fan out one document per regular index
pub async fn collect<S: MetricSource + Sync>(
    source: &S,
    timeout: Duration,
) -> Result<Vec<MetricDocument>, TelemetryError> {
    let response = source.indices_stats(timeout).await?;
    documents_from(response)
}

fn documents_from(response: Value) -> Result<Vec<MetricDocument>, TelemetryError> {
    let endpoint = CollectorKind::IndicesStats.endpoint();

    let Value::Object(mut top) = response else {
        return Err(TelemetryError::read(endpoint, "expected a json object"));
    };

    let Some(Value::Object(indices)) = top.remove("indices") else {
        return Err(TelemetryError::read(endpoint, "missing 'indices' object"));
    };

    let mut documents = Vec::with_capacity(indices.len());
    for (index_name, index) in indices {
        if index_name.starts_with('.') {
            continue;
        }
        let Some(mut document) = MetricDocument::from_object(index) else {
            warn!(index = %index_name, "skipping non-object index entry");
            continue;
        };
        document.insert("index_name", index_name);
        documents.push(document);
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dot_prefixed_indices_excluded() {
        let documents = documents_from(json!({
            "indices": {
                ".kibana": { "primaries": { "docs": { "count": 12 } } },
                "logs-2024": { "primaries": { "docs": { "count": 120000 } } }
            }
        }))
        .unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].get("index_name"), Some(&json!("logs-2024")));
    }

    #[test]
    fn test_empty_indices_is_noop() {
        let documents = documents_from(json!({ "indices": {} })).unwrap();
        assert!(documents.is_empty());
    }

    #[test]
    fn test_missing_indices_is_error() {
        let err = documents_from(json!({ "_all": {} })).unwrap_err();
        assert!(err.to_string().contains("'indices'"), "got: {err}");
    }
}
