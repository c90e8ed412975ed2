//! Tracing setup for the metrics bridge.

pub mod tracing_setup;

pub use tracing_setup::*;
