/// Classification for retry policy.
///
/// Used by [`RetryPolicy`](crate::retry::RetryPolicy) to decide whether a
/// failed upstream call is re-issued.
///
/// # Behavior Summary
///
/// | Class | Re-issue the call? | Wait before re-issuing? |
/// |-------|--------------------|-------------------------|
/// | `Never` | No | - |
/// | `AfterDelay` | Yes, while attempts remain | Yes, the policy's fixed delay |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - bad request, transport failure, or unparseable body.
    /// Re-issuing the same request is not expected to change the result.
    Never,

    /// Retry after the policy's fixed delay.
    ///
    /// Used for server-side failures (HTTP 5xx), which the upstream price
    /// service produces transiently under load.
    AfterDelay,
}
