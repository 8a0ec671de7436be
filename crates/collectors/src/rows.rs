//! Shared handling for tabular (cat API) responses

use serde_json::Value;
use tracing::warn;

use contracts::{MetricDocument, TelemetryError};

/// Turn a cat-API JSON array into one document per row, as returned
pub fn documents_from_rows(
    endpoint: &str,
    response: Value,
) -> Result<Vec<MetricDocument>, TelemetryError> {
    let Value::Array(rows) = response else {
        return Err(TelemetryError::read(endpoint, "expected a json array"));
    };

    let mut documents = Vec::with_capacity(rows.len());
    for (position, row) in rows.into_iter().enumerate() {
        let Some(document) = MetricDocument::from_object(row) else {
            warn!(endpoint = %endpoint, position, "skipping non-object row");
            continue;
        };
        documents.push(document);
    }

    Ok(documents)
}
