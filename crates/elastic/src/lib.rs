//! Elasticsearch query client for the metrics bridge.

pub mod client;
pub mod config;
pub mod health;

pub use client::*;
pub use config::*;
