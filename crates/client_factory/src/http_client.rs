//! HTTP cluster client
//!
//! Implements both `MetricSource` and `DocumentStore` over the cluster's
//! REST API with basic auth. Read timeouts are applied per request.

use std::time::Duration;

use reqwest::RequestBuilder;
use serde_json::Value;
use tracing::{debug, instrument};

use contracts::{
    ConnectionSettings, DocumentStore, MetricDocument, MetricSource, TelemetryError,
};

use crate::error::{ClientFactoryError, Result};

/// Timeout for the startup connectivity probe
const PING_TIMEOUT: Duration = Duration::from_secs(5);

/// Column set for `/_cat/indices`, matching the sunk row fields
const CAT_INDICES_COLUMNS: &str =
    "health,status,index,shardsPrimary,shardsReplica,docsCount,docsDeleted,storeSize";

/// Column set for `/_cat/allocation`
const CAT_ALLOCATION_COLUMNS: &str =
    "node,shards,diskIndices,diskUsed,diskAvail,diskTotal,diskPercent";

/// A connected cluster handle, safe for concurrent use
#[derive(Debug, Clone)]
pub struct HttpClusterClient {
    base_url: String,
    username: String,
    password: String,
    http: reqwest::Client,
}

impl HttpClusterClient {
    /// Build a client without probing connectivity (see [`crate::connect`])
    pub fn new(settings: &ConnectionSettings) -> Result<Self> {
        if !settings.url.starts_with("http://") && !settings.url.starts_with("https://") {
            return Err(ClientFactoryError::invalid_url(
                &settings.url,
                "missing http(s) scheme",
            ));
        }

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientFactoryError::Build {
                message: e.to_string(),
            })?;

        Ok(Self {
            base_url: settings.base_url(),
            username: settings.username.clone(),
            password: settings.password.clone(),
            http,
        })
    }

    /// Cluster base URL (scheme://host:port)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Startup connectivity probe: any transport error or non-2xx is fatal
    #[instrument(name = "cluster_ping", skip(self), fields(endpoint = %self.base_url))]
    pub async fn ping(&self) -> Result<()> {
        let request = self.authorize(self.http.get(format!("{}/", self.base_url)));
        let response = request
            .timeout(PING_TIMEOUT)
            .send()
            .await
            .map_err(|e| ClientFactoryError::unreachable(&self.base_url, e.to_string()))?;

        response
            .error_for_status()
            .map_err(|e| ClientFactoryError::unreachable(&self.base_url, e.to_string()))?;

        debug!(endpoint = %self.base_url, "Cluster reachable");
        Ok(())
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        if self.username.is_empty() {
            request
        } else {
            request.basic_auth(&self.username, Some(&self.password))
        }
    }

    async fn get_json(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
        timeout: Duration,
    ) -> std::result::Result<Value, TelemetryError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let request = self.authorize(self.http.get(url)).query(query);

        let response = request
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify_read_error(endpoint, timeout, e))?
            .error_for_status()
            .map_err(|e| TelemetryError::read(endpoint, e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| TelemetryError::read(endpoint, format!("invalid json body: {e}")))
    }
}

/// Distinguish a read timeout from any other transport failure
fn classify_read_error(endpoint: &str, timeout: Duration, e: reqwest::Error) -> TelemetryError {
    if e.is_timeout() {
        TelemetryError::read_timeout(endpoint, timeout.as_secs(), e.to_string())
    } else {
        TelemetryError::read(endpoint, e.to_string())
    }
}

impl MetricSource for HttpClusterClient {
    async fn cluster_health(&self, timeout: Duration) -> std::result::Result<Value, TelemetryError> {
        self.get_json("/_cluster/health", &[], timeout).await
    }

    async fn nodes_stats(&self, timeout: Duration) -> std::result::Result<Value, TelemetryError> {
        self.get_json("/_nodes/stats", &[], timeout).await
    }

    async fn indices_stats(&self, timeout: Duration) -> std::result::Result<Value, TelemetryError> {
        self.get_json("/_all/_stats", &[], timeout).await
    }

    async fn cat_indices(&self, timeout: Duration) -> std::result::Result<Value, TelemetryError> {
        self.get_json(
            "/_cat/indices",
            &[("h", CAT_INDICES_COLUMNS), ("format", "json")],
            timeout,
        )
        .await
    }

    async fn cat_allocation(&self, timeout: Duration) -> std::result::Result<Value, TelemetryError> {
        self.get_json(
            "/_cat/allocation",
            &[
                ("h", CAT_ALLOCATION_COLUMNS),
                ("bytes", "b"),
                ("format", "json"),
            ],
            timeout,
        )
        .await
    }
}

impl DocumentStore for HttpClusterClient {
    #[instrument(
        name = "http_store_document",
        skip(self, document),
        fields(index = %index)
    )]
    async fn store(
        &self,
        index: &str,
        document: &MetricDocument,
    ) -> std::result::Result<(), TelemetryError> {
        let url = format!("{}/{}/_doc", self.base_url, index);
        let request = self.authorize(self.http.post(url)).json(document);

        let response = request
            .send()
            .await
            .map_err(|e| TelemetryError::sink_write(index, e.to_string()))?;

        response
            .error_for_status()
            .map_err(|e| TelemetryError::sink_write(index, e.to_string()))?;

        debug!(index = %index, "Document stored");
        Ok(())
    }
}
