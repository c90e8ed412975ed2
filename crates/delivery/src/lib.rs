//! Delivery sink for normalized metric batches.

pub mod config;
pub mod sink;

pub use config::*;
pub use sink::*;
