//! # Client Factory
//!
//! Builds connected cluster clients: the `Connect(params) -> Client | error`
//! step. A connect probes the cluster once and fails fast; callers treat a
//! failed startup probe as fatal.
//!
//! Also hosts the mock source/store used by tests across the workspace.

mod error;
mod http_client;
mod mock;

pub use error::{ClientFactoryError, Result};
pub use http_client::HttpClusterClient;
pub use mock::{MockDocumentStore, MockMetricSource, MockSourceConfig};

use contracts::ConnectionSettings;
use tracing::{info, instrument};

/// Build a client for the given cluster and verify it is reachable
///
/// # Errors
/// - Invalid base URL
/// - Unreachable cluster or non-success ping response
#[instrument(name = "client_connect", skip(settings), fields(url = %settings.url, port = settings.port))]
pub async fn connect(settings: &ConnectionSettings) -> Result<HttpClusterClient> {
    let client = HttpClusterClient::new(settings)?;
    client.ping().await?;
    info!(endpoint = %client.base_url(), "Connected to cluster");
    Ok(client)
}
