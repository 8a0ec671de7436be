//! # Integration Tests
//!
//! End-to-end tests over the mock clients.
//!
//! Covers:
//! - Configuration loading through the real loader
//! - Full collection cycles (mock source -> collectors -> dispatcher -> mock store)
//! - Failure isolation across collector kinds and across documents

#[cfg(test)]
mod config_tests {
    use config_loader::{ConfigFormat, ConfigLoader};
    use contracts::CollectorKind;

    const FULL_TOML: &str = r#"
[source]
url = "https://metrics-src.example.com"
port = 9243
username = "reader"
password = "s3cret"
read_timeout_secs = 15
alias = "prod-eu"

[target]
url = "http://metrics-dst.internal"
timezone_shift = true

[collectors.cluster_health]
enabled = true
index_prefix = "es-health"

[collectors.nodes_stats]
enabled = true
index_prefix = "es-nodes"

[collectors.indices_stats]
enabled = true
index_prefix = "es-indices"

[collectors.indices_status]
enabled = true
index_prefix = "es-cat-indices"

[collectors.shard_allocation]
enabled = true
index_prefix = "es-allocation"
"#;

    #[test]
    fn test_full_config_parses() {
        let settings = ConfigLoader::load_from_str(FULL_TOML, ConfigFormat::Toml).unwrap();

        assert_eq!(
            settings.source.connection.base_url(),
            "https://metrics-src.example.com:9243"
        );
        assert_eq!(settings.source.alias, "prod-eu");
        assert_eq!(settings.read_timeout().as_secs(), 15);
        assert!(settings.target.timezone_shift);
        assert_eq!(settings.collectors.enabled_count(), 5);
        assert_eq!(
            settings.collectors.get(CollectorKind::ShardAllocation).index_prefix,
            "es-allocation"
        );
    }

    #[test]
    fn test_collectors_default_to_disabled() {
        let minimal = r#"
[source]
url = "http://localhost"
alias = "dev"

[target]
url = "http://localhost"
"#;
        let settings = ConfigLoader::load_from_str(minimal, ConfigFormat::Toml).unwrap();
        assert_eq!(settings.collectors.enabled_count(), 0);
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use client_factory::{MockDocumentStore, MockMetricSource, MockSourceConfig};
    use config_loader::{ConfigFormat, ConfigLoader};
    use contracts::{CollectorKind, RunContext, Settings};
    use dispatcher::Dispatcher;
    use serde_json::json;

    const E2E_TOML: &str = r#"
[source]
url = "https://metrics-src.example.com"
alias = "prod-eu"
read_timeout_secs = 5

[target]
url = "https://metrics-dst.example.com"

[collectors.cluster_health]
enabled = true
index_prefix = "es-health"

[collectors.nodes_stats]
enabled = true
index_prefix = "es-nodes"

[collectors.indices_stats]
enabled = true
index_prefix = "es-indices"
"#;

    fn settings() -> Settings {
        ConfigLoader::load_from_str(E2E_TOML, ConfigFormat::Toml).unwrap()
    }

    fn healthy_source() -> MockMetricSource {
        MockMetricSource::new()
            .with_response(
                CollectorKind::ClusterHealth,
                json!({"cluster_name": "prod", "status": "green", "number_of_nodes": 3}),
            )
            .with_response(
                CollectorKind::NodesStats,
                json!({
                    "cluster_name": "prod",
                    "nodes": {
                        "a1": {"name": "node-a", "jvm": {"mem": {"heap_used_percent": 41}}},
                        "b2": {"name": "node-b", "jvm": {"mem": {"heap_used_percent": 67}}}
                    }
                }),
            )
            .with_response(
                CollectorKind::IndicesStats,
                json!({
                    "indices": {
                        ".kibana": {"primaries": {"docs": {"count": 12}}},
                        "logs-2026.08": {"primaries": {"docs": {"count": 100}}}
                    }
                }),
            )
    }

    fn run_context(
        source: MockMetricSource,
        target: MockDocumentStore,
        settings: &Settings,
    ) -> RunContext<MockMetricSource, MockDocumentStore> {
        RunContext::new(Arc::new(source), Arc::new(target), settings)
    }

    /// End-to-end test: config -> RunContext -> Dispatcher -> store
    ///
    /// Three enabled collectors, healthy responses: one health document,
    /// two node documents, one index document (dot-prefixed one excluded).
    #[tokio::test]
    async fn test_e2e_full_cycle() {
        let settings = settings();
        let ctx = run_context(healthy_source(), MockDocumentStore::new(), &settings);

        let snapshot = Dispatcher::new(ctx.clone(), settings.collectors.clone())
            .run_to_completion()
            .await;

        assert_eq!(snapshot.documents_written, 4);
        assert_eq!(snapshot.collect_failures, 0);
        assert_eq!(snapshot.write_failures, 0);

        let writes = ctx.target.writes();
        assert_eq!(writes.len(), 4);

        // Every written document carries the run tag and a bucketed timestamp
        for (index, document) in &writes {
            assert_eq!(document.get("alias"), Some(&json!("prod-eu")), "in {index}");
            let timestamp = document
                .get("@timestamp")
                .and_then(|v| v.as_str())
                .unwrap_or_else(|| panic!("no @timestamp in {index}"));
            assert!(timestamp.ends_with(":00"), "seconds not zeroed: {timestamp}");
        }

        let mut prefixes: Vec<&str> = writes
            .iter()
            .map(|(index, _)| index.rsplit_once('-').map(|(p, _)| p).unwrap_or(index))
            .collect();
        prefixes.sort();
        prefixes.dedup();
        assert_eq!(prefixes, vec!["es-health", "es-indices", "es-nodes"]);
    }

    #[tokio::test]
    async fn test_e2e_dot_indices_never_reach_the_store() {
        let settings = settings();
        let ctx = run_context(healthy_source(), MockDocumentStore::new(), &settings);

        Dispatcher::new(ctx.clone(), settings.collectors.clone())
            .run_to_completion()
            .await;

        for (_, document) in ctx.target.writes() {
            if let Some(name) = document.get("index_name").and_then(|v| v.as_str()) {
                assert!(!name.starts_with('.'), "system index leaked: {name}");
            }
        }
    }

    #[tokio::test]
    async fn test_e2e_node_documents_carry_identity() {
        let settings = settings();
        let ctx = run_context(healthy_source(), MockDocumentStore::new(), &settings);

        Dispatcher::new(ctx.clone(), settings.collectors.clone())
            .run_to_completion()
            .await;

        let node_docs: Vec<_> = ctx
            .target
            .writes()
            .into_iter()
            .filter(|(index, _)| index.starts_with("es-nodes-"))
            .collect();

        assert_eq!(node_docs.len(), 2);
        for (_, document) in &node_docs {
            assert_eq!(document.get("cluster_name"), Some(&json!("prod")));
            assert!(document.get("node_name").is_some());
        }
    }

    #[tokio::test]
    async fn test_e2e_disabled_kinds_never_queried() {
        let settings = settings();
        let ctx = run_context(healthy_source(), MockDocumentStore::new(), &settings);

        Dispatcher::new(ctx.clone(), settings.collectors.clone())
            .run_to_completion()
            .await;

        let calls = ctx.source.calls();
        assert!(!calls.contains(&CollectorKind::IndicesStatus));
        assert!(!calls.contains(&CollectorKind::ShardAllocation));
        assert_eq!(calls.len(), 3);
    }

    /// One kind times out; the other two still land their documents.
    #[tokio::test]
    async fn test_e2e_timeout_is_isolated() {
        let settings = settings();
        let source = MockMetricSource::with_config(MockSourceConfig {
            timeout_kinds: vec![CollectorKind::NodesStats],
            ..Default::default()
        })
        .with_response(CollectorKind::ClusterHealth, json!({"status": "green"}))
        .with_response(
            CollectorKind::IndicesStats,
            json!({"indices": {"logs": {"docs": 1}}}),
        );
        let ctx = run_context(source, MockDocumentStore::new(), &settings);

        let snapshot = Dispatcher::new(ctx.clone(), settings.collectors.clone())
            .run_to_completion()
            .await;

        assert_eq!(snapshot.collect_failures, 1);
        assert_eq!(snapshot.documents_written, 2);
        assert!(ctx
            .target
            .indices()
            .iter()
            .all(|index| !index.starts_with("es-nodes-")));
    }

    /// A rejected write skips that document only; the cycle keeps going.
    #[tokio::test]
    async fn test_e2e_write_failure_is_per_document() {
        let settings = settings();
        let ctx = run_context(healthy_source(), MockDocumentStore::failing_on(vec![1]), &settings);

        let snapshot = Dispatcher::new(ctx.clone(), settings.collectors.clone())
            .run_to_completion()
            .await;

        assert_eq!(snapshot.write_failures, 1);
        assert_eq!(snapshot.documents_written, 3);
        assert_eq!(ctx.target.attempt_count(), 4);
    }

    /// Collector fields never win over the run's own tags.
    #[tokio::test]
    async fn test_e2e_alias_overwrites_source_field() {
        let settings = settings();
        let source = MockMetricSource::new().with_response(
            CollectorKind::ClusterHealth,
            json!({"status": "green", "alias": "spoofed"}),
        );
        let ctx = run_context(source, MockDocumentStore::new(), &settings);

        Dispatcher::new(ctx.clone(), settings.collectors.clone())
            .run_to_completion()
            .await;

        let health_docs: Vec<_> = ctx
            .target
            .writes()
            .into_iter()
            .filter(|(index, _)| index.starts_with("es-health-"))
            .collect();
        assert_eq!(health_docs.len(), 1);
        assert_eq!(health_docs[0].1.get("alias"), Some(&json!("prod-eu")));
    }

    /// Direct collector run against the mock, outside the dispatcher.
    #[tokio::test]
    async fn test_collect_matches_dispatcher_fanout() {
        let source = healthy_source();
        let documents = collectors::collect(
            CollectorKind::NodesStats,
            &source,
            Duration::from_secs(5),
        )
        .await
        .unwrap();

        assert_eq!(documents.len(), 2);
    }
}
