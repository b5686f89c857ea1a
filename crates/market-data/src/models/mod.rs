//! Livestock market data models
//!
//! This module contains the core data types of the price pipeline:
//! - `price` - A single upstream price row (PriceRecord)
//! - `envelope` - The upstream response envelope (ApiEnvelope, DataBlock)
//! - `query` - Outbound query parameters and their defaults (QueryParameters)
//! - `category` - The livestock category to item code table (LivestockCategory)
//! - `outcome` - Tagged lookup results (FetchOutcome, EmptyReason, FailureKind)

mod category;
mod envelope;
mod outcome;
mod price;
mod query;

pub use category::{LivestockCategory, CATEGORY_ITEM_CODES};
pub use envelope::{ApiEnvelope, DataBlock, DataContent};
pub use outcome::{EmptyReason, FailureKind, FetchOutcome};
pub use price::PriceRecord;
pub use query::{
    QueryParameters, DEFAULT_CONVERT_KG_YN, LIVESTOCK_ITEM_CATEGORY_CODE,
    RETAIL_PRODUCT_CLS_CODE, WHOLESALE_PRODUCT_CLS_CODE,
};
