//! # Contracts
//!
//! Frozen interface contracts (ICD), defining inter-crate data structures and traits.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Time Model
//! - Write time is bucketed to whole minutes before it is stored or used for
//!   index naming; the optional fixed timezone shift is applied first.

mod clients;
mod document;
mod error;
mod kind;
mod run_context;
mod settings;

pub use clients::{DocumentStore, LocalDocumentStore, LocalMetricSource, MetricSource};
pub use document::MetricDocument;
pub use error::TelemetryError;
pub use kind::CollectorKind;
pub use run_context::RunContext;
pub use settings::{
    CollectorSet, CollectorToggle, ConnectionSettings, Settings, SourceSettings, TargetSettings,
};
