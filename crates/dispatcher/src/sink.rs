//! Sink - timestamps, tags, and writes one document
//!
//! Index name contract: `<prefix>-<YYYY.MM.DD>` where the date comes from
//! the write-time bucket. Minute-level truncation keeps the stored timestamp
//! stable within a minute window; daily partitioning bounds index growth.

use chrono::{Duration as TimeDelta, Local, NaiveDateTime, Timelike};
use tracing::trace;

use contracts::{DocumentStore, MetricDocument, TelemetryError};

/// Fixed offset applied when the timezone-shift flag is set.
///
/// Configuration-derived constant, not auto-detected: exactly 7 hours,
/// subtracted before truncation.
pub const TIMEZONE_SHIFT_HOURS: i64 = 7;

/// Bucket a wall-clock time: optional fixed shift, then truncate to the minute
pub fn bucket_time(now: NaiveDateTime, timezone_shift: bool) -> NaiveDateTime {
    let shifted = if timezone_shift {
        now - TimeDelta::hours(TIMEZONE_SHIFT_HOURS)
    } else {
        now
    };
    shifted
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(shifted)
}

/// Daily-partitioned index name for a bucketed time
pub fn index_name(prefix: &str, bucket: NaiveDateTime) -> String {
    format!("{}-{}", prefix, bucket.format("%Y.%m.%d"))
}

/// Stored `@timestamp` value: second precision, seconds always zero
fn timestamp_field(bucket: NaiveDateTime) -> String {
    bucket.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Timestamp, tag, and write one document to the target store
///
/// `@timestamp` and `alias` overwrite any collector-supplied fields of the
/// same names. A failed write propagates to the caller; there is no retry.
pub async fn write_document<T: DocumentStore + Sync>(
    store: &T,
    timezone_shift: bool,
    alias: &str,
    index_prefix: &str,
    mut document: MetricDocument,
) -> Result<(), TelemetryError> {
    let bucket = bucket_time(Local::now().naive_local(), timezone_shift);
    let index = index_name(index_prefix, bucket);

    document.insert("@timestamp", timestamp_field(bucket));
    document.insert("alias", alias);

    trace!(index = %index, fields = document.len(), "Sinking document");
    store.store(&index, &document).await
}
