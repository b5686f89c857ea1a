//! Price provider trait definitions.
//!
//! This module defines the `PriceProvider` trait that the inbound HTTP layer
//! depends on.

use async_trait::async_trait;

use crate::models::{FetchOutcome, LivestockCategory, QueryParameters};

/// Trait for livestock price providers.
///
/// Lookups never fail: transport, HTTP and parse failures are absorbed into
/// [`FetchOutcome::Failed`] after being logged.
///
/// # Example
///
/// ```ignore
/// use livestock_market_data::{FetchOutcome, PriceProvider, QueryParameters};
///
/// async fn latest_wholesale(provider: &dyn PriceProvider) -> usize {
///     let params = QueryParameters::national_wholesale(None);
///     provider.get_price_info(&params).await.into_items().len()
/// }
/// ```
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs.
    fn id(&self) -> &'static str;

    /// Fetch all price records matching the query parameters.
    async fn get_price_info(&self, params: &QueryParameters) -> FetchOutcome;

    /// Fetch nationwide wholesale livestock prices and keep only the
    /// records of the named category.
    ///
    /// # Arguments
    ///
    /// * `category` - Category name, matched case-insensitively ("beef", "pork", "chicken")
    /// * `reg_day` - As-of date (`YYYY-MM-DD`); `None` asks for the most recent day
    async fn get_livestock_prices(&self, category: &str, reg_day: Option<&str>) -> FetchOutcome;

    async fn get_beef_prices(&self, reg_day: Option<&str>) -> FetchOutcome {
        self.get_livestock_prices(LivestockCategory::Beef.name(), reg_day)
            .await
    }

    async fn get_pork_prices(&self, reg_day: Option<&str>) -> FetchOutcome {
        self.get_livestock_prices(LivestockCategory::Pork.name(), reg_day)
            .await
    }

    async fn get_chicken_prices(&self, reg_day: Option<&str>) -> FetchOutcome {
        self.get_livestock_prices(LivestockCategory::Chicken.name(), reg_day)
            .await
    }
}
