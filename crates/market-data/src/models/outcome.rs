use std::fmt;

use super::price::PriceRecord;

/// Result of one logical price lookup.
///
/// Failures never escape the pipeline as errors; they are absorbed into
/// [`FetchOutcome::Failed`] so the boundary layer can choose a status code
/// while callers that only want a list use [`into_items`](Self::into_items).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// At least one record.
    Success(Vec<PriceRecord>),
    /// A well-formed answer without records.
    Empty(EmptyReason),
    /// The call failed after any retries.
    Failed(FailureKind),
}

/// Why a lookup produced no records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmptyReason {
    /// The response body was empty or JSON `null`.
    NoEnvelope,
    /// The upstream reported no data (missing data block or item list).
    NoData {
        condition: Option<String>,
        message: Option<String>,
        error_code: Option<String>,
    },
    /// The requested category name is not in the category table.
    UnknownCategory(String),
    /// The upstream had data, but none of it belongs to the category.
    NoMatchingItems,
}

/// Coarse kind of an absorbed failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Client(u16),
    Server(u16),
    MalformedResponse,
}

impl FetchOutcome {
    /// Collapses the outcome into a plain list; empty for `Empty` and `Failed`.
    pub fn into_items(self) -> Vec<PriceRecord> {
        match self {
            FetchOutcome::Success(items) => items,
            FetchOutcome::Empty(_) | FetchOutcome::Failed(_) => Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }

    /// Short label for logs and diagnostic headers.
    pub fn label(&self) -> &'static str {
        match self {
            FetchOutcome::Success(_) => "success",
            FetchOutcome::Empty(reason) => reason.label(),
            FetchOutcome::Failed(kind) => kind.label(),
        }
    }
}

impl From<Vec<PriceRecord>> for FetchOutcome {
    fn from(items: Vec<PriceRecord>) -> Self {
        if items.is_empty() {
            FetchOutcome::Empty(EmptyReason::NoMatchingItems)
        } else {
            FetchOutcome::Success(items)
        }
    }
}

impl EmptyReason {
    pub fn label(&self) -> &'static str {
        match self {
            EmptyReason::NoEnvelope => "no-envelope",
            EmptyReason::NoData { .. } => "no-data",
            EmptyReason::UnknownCategory(_) => "unknown-category",
            EmptyReason::NoMatchingItems => "no-matching-items",
        }
    }
}

impl FailureKind {
    pub fn label(&self) -> &'static str {
        match self {
            FailureKind::Transport => "transport-error",
            FailureKind::Client(_) => "client-error",
            FailureKind::Server(_) => "server-error",
            FailureKind::MalformedResponse => "malformed-response",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Client(status) | FailureKind::Server(status) => {
                write!(f, "{} ({})", self.label(), status)
            }
            _ => f.write_str(self.label()),
        }
    }
}
