//! Search backend connectivity check.

use std::time::Duration;

use tracing::{debug, error};

use crate::config::ElasticConfig;

/// Probe the backend root endpoint.
///
/// Startup diagnostic only: failures are logged, never fatal. A dead
/// backend still fails the run in the query stage.
pub async fn check_connection(config: &ElasticConfig) -> bool {
    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build probe client: {}", e);
            return false;
        }
    };

    match client
        .get(config.base_url())
        .basic_auth(&config.username, Some(&config.password))
        .send()
        .await
    {
        Ok(response) if response.status().is_success() => {
            debug!(status = %response.status(), "Search backend reachable");
            true
        }
        Ok(response) => {
            error!(status = %response.status(), "Search backend rejected probe");
            false
        }
        Err(e) => {
            error!("Failed to reach search backend: {}", e);
            false
        }
    }
}
