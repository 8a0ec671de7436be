//! Settings - Config Loader output
//!
//! Describes one collection run: source cluster + alias, target cluster +
//! timezone shift, and the five per-collector toggles.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::CollectorKind;

/// Complete run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Source cluster: where metrics are read from
    pub source: SourceSettings,

    /// Target cluster: where observations are written
    pub target: TargetSettings,

    /// Per-collector enablement and index prefixes
    #[serde(default)]
    pub collectors: CollectorSet,
}

impl Settings {
    /// Source read timeout as a Duration
    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.source.read_timeout_secs)
    }
}

/// Connection parameters shared by both clusters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionSettings {
    /// Base URL including scheme (e.g., "https://es.example.com")
    pub url: String,

    /// Port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Basic-auth username (empty = anonymous)
    #[serde(default)]
    pub username: String,

    /// Basic-auth password
    #[serde(default)]
    pub password: String,
}

impl ConnectionSettings {
    /// Scheme://host:port, without a trailing slash
    pub fn base_url(&self) -> String {
        format!("{}:{}", self.url.trim_end_matches('/'), self.port)
    }
}

fn default_port() -> u16 {
    9200
}

/// Source cluster settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    #[serde(flatten)]
    pub connection: ConnectionSettings,

    /// Per-read timeout in seconds, must be > 0
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,

    /// Logical tag stored on every document produced from this source
    pub alias: String,
}

fn default_read_timeout_secs() -> u64 {
    10
}

/// Target cluster settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSettings {
    #[serde(flatten)]
    pub connection: ConnectionSettings,

    /// Shift the write-time bucket by a fixed 7 hours before truncation
    #[serde(default)]
    pub timezone_shift: bool,
}

/// Enablement and index prefix for one collector kind
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectorToggle {
    /// Whether this kind runs at all
    #[serde(default)]
    pub enabled: bool,

    /// Index-name prefix; must be non-empty when enabled
    #[serde(default)]
    pub index_prefix: String,
}

/// The five per-kind toggles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectorSet {
    #[serde(default)]
    pub cluster_health: CollectorToggle,

    #[serde(default)]
    pub nodes_stats: CollectorToggle,

    #[serde(default)]
    pub indices_stats: CollectorToggle,

    #[serde(default)]
    pub indices_status: CollectorToggle,

    #[serde(default)]
    pub shard_allocation: CollectorToggle,
}

impl CollectorSet {
    /// Toggle for one kind
    pub fn get(&self, kind: CollectorKind) -> &CollectorToggle {
        match kind {
            CollectorKind::ClusterHealth => &self.cluster_health,
            CollectorKind::NodesStats => &self.nodes_stats,
            CollectorKind::IndicesStats => &self.indices_stats,
            CollectorKind::IndicesStatus => &self.indices_status,
            CollectorKind::ShardAllocation => &self.shard_allocation,
        }
    }

    /// Enabled kinds with their index prefixes, in configuration order
    pub fn enabled(&self) -> impl Iterator<Item = (CollectorKind, &str)> {
        CollectorKind::ALL.iter().filter_map(move |&kind| {
            let toggle = self.get(kind);
            toggle
                .enabled
                .then_some((kind, toggle.index_prefix.as_str()))
        })
    }

    /// Number of enabled kinds
    pub fn enabled_count(&self) -> usize {
        self.enabled().count()
    }
}
