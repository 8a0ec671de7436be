//! # Dispatcher
//!
//! Fans a collection cycle out across the enabled collectors and sinks
//! their documents into daily-partitioned target indices.
//!
//! ## Usage
//!
//! ```ignore
//! let dispatcher = Dispatcher::new(ctx, settings.collectors.clone());
//! let snapshot = dispatcher.run_to_completion().await;
//! ```

mod dispatcher;
mod metrics;
pub mod sink;

pub use crate::dispatcher::Dispatcher;
pub use crate::metrics::{DispatchMetrics, DispatchSnapshot};
