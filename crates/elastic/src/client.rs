//! Search client over the backend's HTTP API.

use std::time::Duration;

use bridge_core::{QueryError, Result, SearchResponse, TimeWindow};
use serde_json::json;
use tracing::{debug, warn};

use crate::config::ElasticConfig;

/// Thin search client for metric queries.
#[derive(Clone)]
pub struct ElasticClient {
    http: reqwest::Client,
    config: ElasticConfig,
}

impl ElasticClient {
    /// Creates a new client with the configured request timeout.
    ///
    /// The timeout is the deadline for each search call; expiry aborts the
    /// in-flight request and surfaces as a `QueryError`.
    pub fn new(config: ElasticConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| QueryError::transport(format!("failed to build HTTP client: {e}")))?;

        debug!(url = %config.base_url(), "Created search client");

        Ok(Self { http, config })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ElasticConfig {
        &self.config
    }

    /// Runs the metric search against `index_pattern`.
    ///
    /// Matches documents whose `metric_name` equals `metric_name` exactly
    /// and whose `@timestamp` falls inside `window`.
    pub async fn search(
        &self,
        index_pattern: &str,
        metric_name: &str,
        window: &TimeWindow,
    ) -> Result<SearchResponse> {
        let url = format!("{}/{}/_search", self.config.base_url(), index_pattern);
        let body = build_search_body(metric_name, window);

        debug!(url = %url, metric = metric_name, "Executing search");

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Search request failed");
                QueryError::transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Search backend returned error");
            return Err(QueryError::backend(status.as_u16(), body).into());
        }

        let decoded: SearchResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse search response");
            QueryError::decode(e.to_string())
        })?;

        debug!(
            total = decoded.hits.total.value,
            hits = decoded.hits.hits.len(),
            "Search completed"
        );

        Ok(decoded)
    }
}

/// Builds the bool query body: exact metric-name match AND timestamp range.
pub fn build_search_body(metric_name: &str, window: &TimeWindow) -> serde_json::Value {
    json!({
        "query": {
            "bool": {
                "must": [
                    { "match": { "metric_name": metric_name } },
                    {
                        "range": {
                            "@timestamp": {
                                "gte": window.gte(),
                                "lte": window.lte(),
                            }
                        }
                    }
                ]
            }
        }
    })
}
