//! Metric sink trait and the HTTP implementation.

use std::time::Duration;

use async_trait::async_trait;
use bridge_core::{DeliveryError, Error, MetricRecord, Result};
use reqwest::{header, StatusCode};
use tracing::{debug, warn};
use url::Url;

use crate::config::DeliveryConfig;

/// Destination for normalized metric batches.
///
/// The production implementation POSTs to the configured HTTP endpoint;
/// tests substitute a capturing mock.
#[async_trait]
pub trait MetricSink: Send + Sync {
    /// Deliver the whole batch in one attempt. No partial delivery.
    async fn send(&self, metrics: &[MetricRecord]) -> Result<()>;
}

/// HTTP sink delivering each batch as a single JSON array POST.
pub struct HttpSink {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpSink {
    /// Creates a sink for `config.endpoint`.
    pub fn new(config: &DeliveryConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            Error::config(format!(
                "invalid delivery endpoint {:?}: {e}",
                config.endpoint
            ))
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DeliveryError::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, endpoint })
    }

    /// Returns the endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl MetricSink for HttpSink {
    async fn send(&self, metrics: &[MetricRecord]) -> Result<()> {
        let payload = serde_json::to_vec(metrics).map_err(DeliveryError::Serialize)?;

        debug!(endpoint = %self.endpoint, count = metrics.len(), "Delivering metric batch");

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Delivery request failed");
                DeliveryError::transport(e.to_string())
            })?;

        // Success is 200 exactly, not any 2xx.
        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = %status, "Delivery endpoint rejected batch");
            return Err(DeliveryError::Status(status.as_u16()).into());
        }

        Ok(())
    }
}
