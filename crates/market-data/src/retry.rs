//! Fixed-delay retry policy for upstream calls.
//!
//! Each logical call starts at attempt zero. A failure classified as
//! [`RetryClass::AfterDelay`] (HTTP 5xx) is re-issued after a fixed delay
//! while retries remain; every other failure ends the call immediately.
//! When retries run out, the last failure is returned.
//!
//! Attempts are strictly sequential. Dropping the returned future cancels
//! a pending delay along with any in-flight attempt.

use std::future::Future;
use std::time::Duration;

use log::{error, warn};

use crate::errors::{MarketDataError, RetryClass};

/// Retries after the first attempt (3 attempts in total).
pub const MAX_RETRY_ATTEMPTS: u32 = 2;

/// Fixed wait between attempts.
pub const RETRY_DELAY: Duration = Duration::from_secs(1);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries allowed after the first attempt.
    pub max_retries: u32,
    /// Wait before each retry. No growth, no jitter.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRY_ATTEMPTS,
            delay: RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    /// Runs `operation` until it succeeds, fails terminally, or exhausts
    /// the retry budget. `target` only labels log lines.
    pub async fn run<T, F, Fut>(&self, target: &str, mut operation: F) -> Result<T, MarketDataError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, MarketDataError>>,
    {
        let mut retries = 0;
        loop {
            let err = match operation().await {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };

            if err.retry_class() == RetryClass::Never {
                return Err(err);
            }

            if retries >= self.max_retries {
                error!(
                    "Retries exhausted after {} attempts for {}: {}",
                    retries + 1,
                    target,
                    err
                );
                return Err(err);
            }

            retries += 1;
            warn!(
                "Retrying upstream call ({}/{}) in {:?} for {}: {}",
                retries, self.max_retries, self.delay, target, err
            );
            tokio::time::sleep(self.delay).await;
        }
    }
}
