//! RunContext - immutable state shared by all collector tasks

use std::sync::Arc;
use std::time::Duration;

use crate::Settings;

/// Everything a collector task needs for one collection cycle.
///
/// No field is mutated after construction; clones share the two client
/// handles, so concurrent reads are safe without locking.
pub struct RunContext<S, T> {
    /// Read-only source cluster handle
    pub source: Arc<S>,

    /// Write-only target cluster handle
    pub target: Arc<T>,

    /// Bound for every source read
    pub read_timeout: Duration,

    /// Apply the fixed timezone shift when bucketing write time
    pub timezone_shift: bool,

    /// Logical source tag stored on every document
    pub alias: String,
}

impl<S, T> RunContext<S, T> {
    /// Build a context from connected clients and validated settings
    pub fn new(source: Arc<S>, target: Arc<T>, settings: &Settings) -> Self {
        Self {
            source,
            target,
            read_timeout: settings.read_timeout(),
            timezone_shift: settings.target.timezone_shift,
            alias: settings.source.alias.clone(),
        }
    }
}

// Manual impl: S and T need not be Clone themselves.
impl<S, T> Clone for RunContext<S, T> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            target: Arc::clone(&self.target),
            read_timeout: self.read_timeout,
            timezone_shift: self.timezone_shift,
            alias: self.alias.clone(),
        }
    }
}
