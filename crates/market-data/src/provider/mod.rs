//! Livestock price provider abstractions and implementations.
//!
//! This module contains:
//! - The `PriceProvider` trait that the inbound layer depends on
//! - The `HttpTransport` seam and its reqwest-backed implementation
//! - The KAMIS provider, which combines query building, retries,
//!   normalization and category filtering

mod traits;
mod transport;

pub mod kamis;

// Re-exports
pub use kamis::KamisProvider;
pub use traits::PriceProvider;
pub use transport::{
    HttpTransport, RawResponse, ReqwestTransport, TransportSettings, CONNECT_TIMEOUT,
    DEFAULT_USER_AGENT, MAX_BODY_BYTES, RESPONSE_TIMEOUT,
};
