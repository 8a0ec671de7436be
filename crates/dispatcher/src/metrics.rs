//! In-process dispatch counters
//!
//! Complements the exported Prometheus counters with cheap atomics that
//! tests and the shutdown summary can read back directly.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by all collector tasks of one run
#[derive(Debug, Default)]
pub struct DispatchMetrics {
    documents_written: AtomicU64,
    write_failures: AtomicU64,
    collect_failures: AtomicU64,
}

impl DispatchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc_documents_written(&self) {
        self.documents_written.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_write_failures(&self) {
        self.write_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_collect_failures(&self) {
        self.collect_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn documents_written(&self) -> u64 {
        self.documents_written.load(Ordering::Relaxed)
    }

    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    pub fn collect_failures(&self) -> u64 {
        self.collect_failures.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> DispatchSnapshot {
        DispatchSnapshot {
            documents_written: self.documents_written(),
            write_failures: self.write_failures(),
            collect_failures: self.collect_failures(),
        }
    }
}

/// Point-in-time copy of the dispatch counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSnapshot {
    pub documents_written: u64,
    pub write_failures: u64,
    pub collect_failures: u64,
}
