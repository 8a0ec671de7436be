//! Mock source and store
//!
//! Test implementations with injectable failure scenarios, used by unit
//! tests across the workspace and by the integration tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use serde_json::Value;

use contracts::{
    CollectorKind, DocumentStore, MetricDocument, MetricSource, TelemetryError,
};

/// Mock source configuration (injectable failure scenarios)
#[derive(Debug, Default, Clone)]
pub struct MockSourceConfig {
    /// Kinds whose reads fail with a generic read error
    pub fail_kinds: Vec<CollectorKind>,
    /// Kinds whose reads fail with a timeout
    pub timeout_kinds: Vec<CollectorKind>,
}

/// Mock metric source with canned per-endpoint responses
pub struct MockMetricSource {
    config: MockSourceConfig,
    responses: HashMap<CollectorKind, Value>,
    /// Endpoints hit, in call order
    calls: Mutex<Vec<CollectorKind>>,
}

impl MockMetricSource {
    /// Create a mock with no canned responses
    pub fn new() -> Self {
        Self::with_config(MockSourceConfig::default())
    }

    /// Create a mock with failure scenarios
    pub fn with_config(config: MockSourceConfig) -> Self {
        Self {
            config,
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Set the canned response for one kind
    pub fn set_response(&mut self, kind: CollectorKind, response: Value) {
        self.responses.insert(kind, response);
    }

    /// Builder-style variant of [`set_response`](Self::set_response)
    pub fn with_response(mut self, kind: CollectorKind, response: Value) -> Self {
        self.set_response(kind, response);
        self
    }

    /// Kinds queried so far
    pub fn calls(&self) -> Vec<CollectorKind> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of reads issued
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn respond(&self, kind: CollectorKind, timeout: Duration) -> Result<Value, TelemetryError> {
        self.calls.lock().unwrap().push(kind);

        if self.config.timeout_kinds.contains(&kind) {
            return Err(TelemetryError::read_timeout(
                kind.endpoint(),
                timeout.as_secs(),
                "mock timeout",
            ));
        }
        if self.config.fail_kinds.contains(&kind) {
            return Err(TelemetryError::read(kind.endpoint(), "mock failure"));
        }

        self.responses
            .get(&kind)
            .cloned()
            .ok_or_else(|| TelemetryError::read(kind.endpoint(), "no canned response"))
    }
}

impl Default for MockMetricSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSource for MockMetricSource {
    async fn cluster_health(&self, timeout: Duration) -> Result<Value, TelemetryError> {
        self.respond(CollectorKind::ClusterHealth, timeout)
    }

    async fn nodes_stats(&self, timeout: Duration) -> Result<Value, TelemetryError> {
        self.respond(CollectorKind::NodesStats, timeout)
    }

    async fn indices_stats(&self, timeout: Duration) -> Result<Value, TelemetryError> {
        self.respond(CollectorKind::IndicesStats, timeout)
    }

    async fn cat_indices(&self, timeout: Duration) -> Result<Value, TelemetryError> {
        self.respond(CollectorKind::IndicesStatus, timeout)
    }

    async fn cat_allocation(&self, timeout: Duration) -> Result<Value, TelemetryError> {
        self.respond(CollectorKind::ShardAllocation, timeout)
    }
}

/// Mock document store recording every write
pub struct MockDocumentStore {
    /// 1-based write sequence numbers that should fail
    fail_on_calls: Vec<usize>,
    writes: Mutex<Vec<(String, MetricDocument)>>,
    attempts: Mutex<usize>,
}

impl MockDocumentStore {
    /// Create a store that accepts every write
    pub fn new() -> Self {
        Self::failing_on(Vec::new())
    }

    /// Create a store where the given 1-based write attempts fail
    pub fn failing_on(fail_on_calls: Vec<usize>) -> Self {
        Self {
            fail_on_calls,
            writes: Mutex::new(Vec::new()),
            attempts: Mutex::new(0),
        }
    }

    /// Successful writes, in order
    pub fn writes(&self) -> Vec<(String, MetricDocument)> {
        self.writes.lock().unwrap().clone()
    }

    /// Number of successful writes
    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    /// Number of attempted writes, failed ones included
    pub fn attempt_count(&self) -> usize {
        *self.attempts.lock().unwrap()
    }

    /// Distinct target indices written to
    pub fn indices(&self) -> Vec<String> {
        let mut indices: Vec<String> = self
            .writes
            .lock()
            .unwrap()
            .iter()
            .map(|(index, _)| index.clone())
            .collect();
        indices.dedup();
        indices
    }
}

impl Default for MockDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MockDocumentStore {
    async fn store(&self, index: &str, document: &MetricDocument) -> Result<(), TelemetryError> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            *attempts += 1;
            *attempts
        };

        if self.fail_on_calls.contains(&attempt) {
            return Err(TelemetryError::sink_write(index, "mock write failure"));
        }

        self.writes
            .lock()
            .unwrap()
            .push((index.to_string(), document.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_source_canned_response() {
        let source = MockMetricSource::new()
            .with_response(CollectorKind::ClusterHealth, json!({"status": "green"}));

        let response = source
            .cluster_health(Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(response, json!({"status": "green"}));
        assert_eq!(source.calls(), vec![CollectorKind::ClusterHealth]);
    }

    #[tokio::test]
    async fn test_mock_source_timeout_injection() {
        let source = MockMetricSource::with_config(MockSourceConfig {
            timeout_kinds: vec![CollectorKind::NodesStats],
            ..Default::default()
        });

        let err = source
            .nodes_stats(Duration::from_secs(7))
            .await
            .unwrap_err();
        assert!(err.is_timeout());
        assert!(err.to_string().contains("/_nodes/stats"), "got: {err}");
        assert!(err.to_string().contains("7"), "got: {err}");
    }

    #[tokio::test]
    async fn test_mock_store_records_writes() {
        let store = MockDocumentStore::new();
        let doc = MetricDocument::from_object(json!({"status": "green"})).unwrap();

        store.store("es-health-2026.08.24", &doc).await.unwrap();
        assert_eq!(store.write_count(), 1);
        assert_eq!(store.writes()[0].0, "es-health-2026.08.24");
    }

    #[tokio::test]
    async fn test_mock_store_fails_selected_attempt() {
        let store = MockDocumentStore::failing_on(vec![2]);
        let doc = MetricDocument::from_object(json!({"n": 1})).unwrap();

        assert!(store.store("idx", &doc).await.is_ok());
        assert!(store.store("idx", &doc).await.is_err());
        assert!(store.store("idx", &doc).await.is_ok());
        assert_eq!(store.write_count(), 2);
        assert_eq!(store.attempt_count(), 3);
    }
}
