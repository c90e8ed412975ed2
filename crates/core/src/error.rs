//! Unified error types for the metrics bridge.
//!
//! Two failure kinds cover the whole pipeline: the query stage fails with
//! `QueryError`, the delivery stage with `DeliveryError`. Both are fatal
//! for the run; there is no retry or partial delivery at this layer.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure while querying the search backend.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The search request could not be sent, or timed out in flight.
    #[error("search backend unreachable: {0}")]
    Transport(String),

    /// The backend answered with an error status.
    #[error("search backend returned {status}: {body}")]
    Backend { status: u16, body: String },

    /// The response body did not decode into the expected search shape.
    #[error("malformed search response: {0}")]
    Decode(String),
}

impl QueryError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn backend(status: u16, body: impl Into<String>) -> Self {
        Self::Backend {
            status,
            body: body.into(),
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

/// Failure while delivering normalized metrics downstream.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The metrics batch could not be serialized to JSON.
    #[error("failed to serialize metrics payload: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The POST could not be built or sent.
    #[error("delivery endpoint unreachable: {0}")]
    Transport(String),

    /// The endpoint answered with anything other than 200.
    #[error("delivery endpoint returned status {0}")]
    Status(u16),
}

impl DeliveryError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}

/// Unified error type for the bridge.
#[derive(Debug, Error)]
pub enum Error {
    #[error("query failed: {0}")]
    Query(#[from] QueryError),

    #[error("delivery failed: {0}")]
    Delivery(#[from] DeliveryError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
