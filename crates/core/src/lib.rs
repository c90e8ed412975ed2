//! Core types and transforms for the metrics bridge.

pub mod error;
pub mod metrics;
pub mod window;

pub use error::{DeliveryError, Error, QueryError, Result};
pub use metrics::*;
pub use window::TimeWindow;
