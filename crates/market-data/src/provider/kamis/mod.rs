//! KAMIS livestock price provider.
//!
//! Queries the daily price-by-category endpoint of the agricultural and
//! livestock price service. One logical lookup is:
//! - build the request URL from configuration and query parameters
//! - issue the GET through the [`HttpTransport`], retrying 5xx answers
//! - normalize the JSON envelope into price records
//!
//! Every failure is logged and absorbed into [`FetchOutcome::Failed`].

mod normalize;
mod query;

pub use normalize::{normalize_body, normalize_envelope};
pub use query::{build_request_url, RETURN_TYPE};

use async_trait::async_trait;
use log::{debug, error, info, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::errors::MarketDataError;
use crate::models::{EmptyReason, FetchOutcome, LivestockCategory, QueryParameters};
use crate::provider::{HttpTransport, PriceProvider, ReqwestTransport, TransportSettings};
use crate::retry::RetryPolicy;

const PROVIDER_ID: &str = "KAMIS";

/// Price provider for the KAMIS open API.
pub struct KamisProvider<T: HttpTransport = ReqwestTransport> {
    transport: T,
    config: ApiConfig,
    retry: RetryPolicy,
}

impl KamisProvider<ReqwestTransport> {
    /// Creates a provider with the default transport settings and retry policy.
    pub fn new(config: ApiConfig) -> Result<Self, MarketDataError> {
        let transport = ReqwestTransport::new(TransportSettings::default())?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: HttpTransport> KamisProvider<T> {
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        Self {
            transport,
            config,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// One attempt: GET, classify the status, normalize the body.
    async fn fetch_once(&self, url: &Url) -> Result<FetchOutcome, MarketDataError> {
        let response = self.transport.get(url).await?;
        if let Some(err) = MarketDataError::from_status(response.status, response.body_text()) {
            return Err(err);
        }
        normalize_body(&response.body)
    }
}

#[async_trait]
impl<T: HttpTransport> PriceProvider for KamisProvider<T> {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_price_info(&self, params: &QueryParameters) -> FetchOutcome {
        let url = build_request_url(&self.config, params);
        let redacted = self.config.redact(&url);
        info!("Calling {} API: {}", PROVIDER_ID, redacted);

        match self.retry.run(&redacted, || self.fetch_once(&url)).await {
            Ok(outcome) => {
                debug!("{} lookup finished: {}", PROVIDER_ID, outcome.label());
                outcome
            }
            Err(err) => {
                error!("{} lookup failed for {}: {}", PROVIDER_ID, redacted, err);
                FetchOutcome::Failed(err.failure_kind())
            }
        }
    }

    async fn get_livestock_prices(&self, category: &str, reg_day: Option<&str>) -> FetchOutcome {
        let Some(livestock) = LivestockCategory::from_name(category) else {
            warn!("Unknown livestock category: '{}'", category);
            return FetchOutcome::Empty(EmptyReason::UnknownCategory(category.to_string()));
        };

        let params = QueryParameters::national_wholesale(reg_day);
        match self.get_price_info(&params).await {
            FetchOutcome::Success(items) => livestock.filter(items).into(),
            other => other,
        }
    }
}
