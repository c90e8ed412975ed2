//! Kibana metrics bridge.
//!
//! One-shot batch pipeline:
//! - query the search backend for recent values of a named metric
//! - normalize each hit into a metric record with provenance labels
//! - POST the batch to the delivery endpoint, then exit

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};

use delivery_client::{DeliveryConfig, HttpSink};
use elastic_client::{ElasticClient, ElasticConfig};
use pipeline::QueryParams;
use telemetry::init_tracing_from_env;

/// Application configuration.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct Config {
    #[serde(default)]
    elastic: ElasticConfig,
    #[serde(default)]
    delivery: DeliveryConfig,
    #[serde(default)]
    query: QueryParams,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing_from_env();

    info!("Starting metrics bridge v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;

    info!(
        backend = %config.elastic.base_url(),
        endpoint = %config.delivery.endpoint,
        index = %config.query.index_pattern,
        metric = %config.query.metric_name,
        window_minutes = config.query.window_minutes,
        "Loaded bridge config"
    );

    let client =
        ElasticClient::new(config.elastic.clone()).context("Failed to create search client")?;

    let sink = HttpSink::new(&config.delivery).context("Failed to create delivery sink")?;

    check_health(&config).await;

    let report = tokio::select! {
        result = pipeline::run(&client, &sink, &config.query) => {
            result.context("Bridge run failed")?
        }
        _ = shutdown_signal() => {
            anyhow::bail!("Interrupted before the run completed");
        }
    };

    info!(
        hits_total = report.hits_total,
        delivered = report.delivered,
        "Successfully delivered metrics"
    );

    Ok(())
}

/// Load configuration from defaults, an optional file, and the environment.
fn load_config() -> Result<Config> {
    let config = config::Config::builder()
        // Start with defaults
        .add_source(config::Config::try_from(&Config::default())?)
        // Load from config file if exists
        .add_source(
            config::File::with_name("config/default")
                .required(false)
                .format(config::FileFormat::Toml),
        )
        // Override with environment variables
        .add_source(
            config::Environment::default()
                .separator("__")
                .prefix("BRIDGE")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    let mut config: Config = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    // Flat variable overrides; the config crate's nested parsing doesn't
    // work reliably with underscored field names, and deployments set
    // these directly
    if let Ok(host) = std::env::var("ES_HOST") {
        config.elastic.host = host;
    }
    if let Ok(port) = std::env::var("ES_PORT") {
        config.elastic.port = port.parse().context("Invalid ES_PORT")?;
    }
    if let Ok(username) = std::env::var("ES_USERNAME") {
        config.elastic.username = username;
    }
    if let Ok(password) = std::env::var("ES_PASSWORD") {
        config.elastic.password = password;
    }
    if let Ok(endpoint) = std::env::var("DELIVERY_ENDPOINT") {
        config.delivery.endpoint = endpoint;
    }
    if let Ok(pattern) = std::env::var("INDEX_PATTERN") {
        config.query.index_pattern = pattern;
    }
    if let Ok(metric) = std::env::var("METRIC_NAME") {
        config.query.metric_name = metric;
    }
    if let Ok(minutes) = std::env::var("TIME_RANGE_MINUTES") {
        config.query.window_minutes = minutes.parse().context("Invalid TIME_RANGE_MINUTES")?;
    }

    Ok(config)
}

/// Check backend connectivity on startup.
async fn check_health(config: &Config) {
    if elastic_client::health::check_connection(&config.elastic).await {
        info!("Search backend connection: healthy");
    } else {
        // Logged only; the query stage reports the fatal error
        error!("Search backend connection: unhealthy");
    }
}

/// Ctrl-C / SIGTERM handler racing the pipeline.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            info!("Received terminate signal");
        }
    }
}
