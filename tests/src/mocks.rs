//! Mock implementations for testing.

use async_trait::async_trait;
use bridge_core::{DeliveryError, MetricRecord, Result};
use delivery_client::MetricSink;
use parking_lot::Mutex;
use std::sync::Arc;

/// Mock sink that captures delivered batches in memory.
///
/// This implements the same `MetricSink` trait as the real `HttpSink`,
/// allowing tests to verify the exact records the pipeline would deliver
/// without a live endpoint.
#[derive(Clone, Default)]
pub struct MockSink {
    /// All batches delivered through this sink.
    batches: Arc<Mutex<Vec<Vec<MetricRecord>>>>,
    /// Simulate failures if set.
    should_fail: Arc<Mutex<bool>>,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all delivered batches.
    pub fn batches(&self) -> Vec<Vec<MetricRecord>> {
        self.batches.lock().clone()
    }

    /// Get the number of send calls.
    pub fn send_count(&self) -> usize {
        self.batches.lock().len()
    }

    /// Get the records across all batches.
    pub fn records(&self) -> Vec<MetricRecord> {
        self.batches.lock().iter().flatten().cloned().collect()
    }

    /// Clear delivered batches.
    pub fn clear(&self) {
        self.batches.lock().clear();
    }

    /// Set failure mode for testing error handling.
    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.lock() = fail;
    }
}

#[async_trait]
impl MetricSink for MockSink {
    async fn send(&self, metrics: &[MetricRecord]) -> Result<()> {
        if *self.should_fail.lock() {
            return Err(DeliveryError::transport("mock sink failure").into());
        }

        self.batches.lock().push(metrics.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn test_record(name: &str, value: f64) -> MetricRecord {
        MetricRecord {
            name: name.into(),
            value,
            timestamp: Utc::now(),
            labels: BTreeMap::new(),
        }
    }

    #[tokio::test]
    async fn test_mock_sink_captures_batches() {
        let sink = MockSink::new();

        sink.send(&[test_record("cpu_usage", 42.0)]).await.unwrap();

        assert_eq!(sink.send_count(), 1);
        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "cpu_usage");
    }

    #[tokio::test]
    async fn test_mock_sink_failure_mode() {
        let sink = MockSink::new();
        sink.set_should_fail(true);

        let result = sink.send(&[]).await;
        assert!(result.is_err());
        assert_eq!(sink.send_count(), 0);
    }
}
