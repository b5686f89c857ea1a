use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use livestock_market_data::ApiConfig;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
// Must outlast the upstream worst case: 3 attempts of 10 s plus 2 waits of 1 s.
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 45000;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub api: ApiConfig,
}

impl Config {
    /// Loads `.env` (if any) and reads the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup. Fails when the
    /// upstream credentials or base URL are missing or invalid.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let listen_addr: SocketAddr = var("LP_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("Invalid LP_LISTEN_ADDR")?;
        let cors_allow = var("LP_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = var("LP_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);

        let api = ApiConfig::new(
            &var("LP_API_KEY").unwrap_or_default(),
            &var("LP_API_ID").unwrap_or_default(),
            &var("LP_API_BASE_URL").unwrap_or_default(),
        )
        .context("Invalid upstream API configuration (LP_API_KEY, LP_API_ID, LP_API_BASE_URL)")?;

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            api,
        })
    }

    /// Default server settings around an already validated upstream config.
    pub fn new(api: ApiConfig) -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            api,
        }
    }
}
