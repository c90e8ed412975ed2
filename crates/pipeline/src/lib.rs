//! The query → transform → deliver pipeline.
//!
//! Strictly sequential, one shot per process run. A stage failure
//! propagates immediately; later stages never execute.

use bridge_core::{normalize_metrics, Error, Result, TimeWindow};
use delivery_client::MetricSink;
use elastic_client::ElasticClient;
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

/// Query parameters for a single bridge run.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QueryParams {
    /// Index pattern to search (e.g. "metrics-*")
    #[serde(default = "default_index_pattern")]
    #[validate(length(min = 1))]
    pub index_pattern: String,
    /// Metric name to match exactly
    #[serde(default = "default_metric_name")]
    #[validate(length(min = 1))]
    pub metric_name: String,
    /// Look-back window in minutes (at most 30 days)
    #[serde(default = "default_window_minutes")]
    #[validate(range(min = 1, max = 43200))]
    pub window_minutes: u32,
}

fn default_index_pattern() -> String {
    "metrics-*".to_string()
}

fn default_metric_name() -> String {
    "cpu_usage".to_string()
}

fn default_window_minutes() -> u32 {
    30
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            index_pattern: default_index_pattern(),
            metric_name: default_metric_name(),
            window_minutes: default_window_minutes(),
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy)]
pub struct PipelineReport {
    /// Backend-reported total for the query
    pub hits_total: i64,
    /// Records normalized and delivered
    pub delivered: usize,
}

/// Runs the three stages strictly in sequence.
pub async fn run(
    client: &ElasticClient,
    sink: &dyn MetricSink,
    params: &QueryParams,
) -> Result<PipelineReport> {
    params
        .validate()
        .map_err(|e| Error::config(e.to_string()))?;

    let window = TimeWindow::last_minutes(params.window_minutes);
    info!(
        index = %params.index_pattern,
        metric = %params.metric_name,
        gte = %window.gte(),
        lte = %window.lte(),
        "Querying search backend"
    );

    let response = client
        .search(&params.index_pattern, &params.metric_name, &window)
        .await?;

    let records = normalize_metrics(&response);
    info!(
        total = response.hits.total.value,
        records = records.len(),
        "Normalized search hits"
    );

    sink.send(&records).await?;
    info!(delivered = records.len(), "Delivered metric batch");

    Ok(PipelineReport {
        hits_total: response.hits.total.value,
        delivered: records.len(),
    })
}
