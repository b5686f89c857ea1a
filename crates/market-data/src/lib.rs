//! Livestock Market Data Crate
//!
//! This crate fetches wholesale and retail livestock prices from the KAMIS
//! open API and narrows them to a livestock category.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! | QueryParameters  | --> |  Request URL     |  (credentials + query pairs)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  RetryPolicy     |  (fixed delay, 5xx only)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  HttpTransport   |  (reqwest, timeouts, body cap)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   Normalizer     |  (envelope -> PriceRecord list)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          | Category filter  |  (beef / pork / chicken)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`ApiConfig`] - Validated credentials and base URL
//! - [`QueryParameters`] - Outbound query with upstream defaults
//! - [`PriceRecord`] - One upstream price row, fields kept verbatim
//! - [`FetchOutcome`] - Tagged result: success, empty with a reason, or failure
//! - [`LivestockCategory`] - Category to item code mapping
//! - [`PriceProvider`] - Trait the inbound layer depends on

pub mod config;
pub mod errors;
pub mod models;
pub mod provider;
pub mod retry;

pub use config::{ApiConfig, ConfigError};
pub use errors::{MarketDataError, RetryClass};

// Re-export all public types from models
pub use models::{
    ApiEnvelope, DataBlock, DataContent, EmptyReason, FailureKind, FetchOutcome,
    LivestockCategory, PriceRecord, QueryParameters, CATEGORY_ITEM_CODES, DEFAULT_CONVERT_KG_YN,
    LIVESTOCK_ITEM_CATEGORY_CODE, RETAIL_PRODUCT_CLS_CODE, WHOLESALE_PRODUCT_CLS_CODE,
};

// Re-export provider types
pub use provider::{
    HttpTransport, KamisProvider, PriceProvider, RawResponse, ReqwestTransport, TransportSettings,
};
pub use retry::{RetryPolicy, MAX_RETRY_ATTEMPTS, RETRY_DELAY};
