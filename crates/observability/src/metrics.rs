//! Counter names and record helpers
//!
//! All counters carry a `collector` label so per-kind failure isolation is
//! visible in the exported metrics.

use metrics::{counter, describe_counter, Unit};

/// Documents successfully written to the target store
pub const DOCUMENTS_SUNK: &str = "espulse_documents_sunk_total";

/// Collector read/transform failures (timeouts included)
pub const COLLECT_FAILURES: &str = "espulse_collect_failures_total";

/// Per-document write failures
pub const WRITE_FAILURES: &str = "espulse_write_failures_total";

/// Register counter descriptions with the installed recorder
pub fn describe_metrics() {
    describe_counter!(
        DOCUMENTS_SUNK,
        Unit::Count,
        "Documents written to the target store"
    );
    describe_counter!(
        COLLECT_FAILURES,
        Unit::Count,
        "Collector runs that produced no documents due to a read failure"
    );
    describe_counter!(
        WRITE_FAILURES,
        Unit::Count,
        "Documents skipped due to a failed target write"
    );
}

/// Record one successful document write
pub fn record_document_sunk(collector: &'static str) {
    counter!(DOCUMENTS_SUNK, "collector" => collector).increment(1);
}

/// Record one failed collector run
pub fn record_collect_failure(collector: &'static str) {
    counter!(COLLECT_FAILURES, "collector" => collector).increment(1);
}

/// Record one skipped document
pub fn record_write_failure(collector: &'static str) {
    counter!(WRITE_FAILURES, "collector" => collector).increment(1);
}
