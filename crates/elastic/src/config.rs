//! Search backend configuration.

use serde::{Deserialize, Serialize};

/// Elasticsearch client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElasticConfig {
    /// Backend host
    #[serde(default = "default_host")]
    pub host: String,
    /// Backend HTTP port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Basic auth username
    #[serde(default = "default_username")]
    pub username: String,
    /// Basic auth password
    #[serde(default = "default_password")]
    pub password: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    9200
}

fn default_username() -> String {
    "elastic".to_string()
}

fn default_password() -> String {
    "changeme".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ElasticConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            username: default_username(),
            password: default_password(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ElasticConfig {
    /// Returns the backend base URL.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
