use std::sync::Arc;

use crate::config::Config;
use livestock_market_data::{KamisProvider, PriceProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub price_provider: Arc<dyn PriceProvider>,
}

impl AppState {
    pub fn new(price_provider: Arc<dyn PriceProvider>) -> Self {
        Self { price_provider }
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("LP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = KamisProvider::new(config.api.clone())?;
    tracing::info!(
        "Price provider {} targeting {}",
        provider.id(),
        config.api.base_url().origin().ascii_serialization()
    );
    Ok(Arc::new(AppState::new(Arc::new(provider))))
}
