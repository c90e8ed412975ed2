//! Search result and normalized metric models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Value of the `source` label attached to every normalized record.
pub const SOURCE_LABEL: &str = "kibana";

/// Search response as returned by the backend's `_search` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub hits: SearchHits,
}

/// Hit collection with the backend-reported total.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHits {
    pub total: SearchTotal,
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchTotal {
    pub value: i64,
}

/// A single hit: the originating index plus the stored document.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_source")]
    pub source: HitSource,
}

/// Stored metric document.
#[derive(Debug, Clone, Deserialize)]
pub struct HitSource {
    pub metric_name: String,
    pub value: f64,
    #[serde(rename = "@timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// Normalized metric record sent to the delivery endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricRecord {
    pub name: String,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
    pub labels: BTreeMap<String, String>,
}

/// Maps each hit into a normalized record, preserving order.
///
/// One record per hit, no filtering or aggregation. Every record carries
/// exactly two labels: `source` (always "kibana") and `index` (the hit's
/// originating index).
pub fn normalize_metrics(response: &SearchResponse) -> Vec<MetricRecord> {
    response
        .hits
        .hits
        .iter()
        .map(|hit| {
            let mut labels = BTreeMap::new();
            labels.insert("source".to_string(), SOURCE_LABEL.to_string());
            labels.insert("index".to_string(), hit.index.clone());

            MetricRecord {
                name: hit.source.metric_name.clone(),
                value: hit.source.value,
                timestamp: hit.source.timestamp,
                labels,
            }
        })
        .collect()
}
