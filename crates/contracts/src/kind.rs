//! CollectorKind - the five metric kinds

use serde::{Deserialize, Serialize};

/// One metric kind, collected independently of the others
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectorKind {
    ClusterHealth,
    NodesStats,
    IndicesStats,
    IndicesStatus,
    ShardAllocation,
}

impl CollectorKind {
    /// All kinds, in configuration order
    pub const ALL: [CollectorKind; 5] = [
        CollectorKind::ClusterHealth,
        CollectorKind::NodesStats,
        CollectorKind::IndicesStats,
        CollectorKind::IndicesStatus,
        CollectorKind::ShardAllocation,
    ];

    /// Configuration key and logging name
    pub fn name(&self) -> &'static str {
        match self {
            CollectorKind::ClusterHealth => "cluster_health",
            CollectorKind::NodesStats => "nodes_stats",
            CollectorKind::IndicesStats => "indices_stats",
            CollectorKind::IndicesStatus => "indices_status",
            CollectorKind::ShardAllocation => "shard_allocation",
        }
    }

    /// Source API endpoint, used in diagnostics
    pub fn endpoint(&self) -> &'static str {
        match self {
            CollectorKind::ClusterHealth => "/_cluster/health",
            CollectorKind::NodesStats => "/_nodes/stats",
            CollectorKind::IndicesStats => "/_all/_stats",
            CollectorKind::IndicesStatus => "/_cat/indices",
            CollectorKind::ShardAllocation => "/_cat/allocation",
        }
    }
}

impl std::fmt::Display for CollectorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let names: std::collections::HashSet<_> =
            CollectorKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), CollectorKind::ALL.len());
    }

    #[test]
    fn test_serde_matches_name() {
        for kind in CollectorKind::ALL {
            let serialized = serde_json::to_value(kind).unwrap();
            assert_eq!(serialized, serde_json::json!(kind.name()));
        }
    }
}
