//! Response normalization: upstream envelope to price records.

use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::MarketDataError;
use crate::models::{ApiEnvelope, DataBlock, DataContent, EmptyReason, FetchOutcome};

/// Parses a successful response body and normalizes it.
///
/// Only a body that is not JSON, or whose shape does not match the
/// envelope, is an error. Every "no data" shape is an empty outcome.
pub fn normalize_body(body: &[u8]) -> Result<FetchOutcome, MarketDataError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        warn!("Upstream returned an empty body");
        return Ok(FetchOutcome::Empty(EmptyReason::NoEnvelope));
    }

    let malformed = |e: serde_json::Error| MarketDataError::MalformedResponse(e.to_string());
    let envelope = match serde_json::from_slice::<Value>(body).map_err(malformed)? {
        Value::Null => None,
        value @ Value::Object(_) => Some(ApiEnvelope::deserialize(value).map_err(malformed)?),
        other => {
            return Err(MarketDataError::MalformedResponse(format!(
                "expected a JSON object envelope, got {}",
                json_kind(&other)
            )))
        }
    };
    Ok(normalize_envelope(envelope))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Maps a parsed envelope to an outcome. Items are returned unchanged.
pub fn normalize_envelope(envelope: Option<ApiEnvelope>) -> FetchOutcome {
    let Some(envelope) = envelope else {
        warn!("Upstream returned a null envelope");
        return FetchOutcome::Empty(EmptyReason::NoEnvelope);
    };

    debug!("Upstream condition: {:?}", envelope.condition);
    let condition = envelope.condition;

    let (message, error_code) = match envelope.data {
        Some(DataBlock::Content(DataContent {
            items: Some(items), ..
        })) if !items.is_empty() => {
            info!("Upstream returned {} price records", items.len());
            return FetchOutcome::Success(items);
        }
        Some(DataBlock::Content(content)) => (content.message, content.error_code),
        Some(DataBlock::Codes(codes)) => (None, codes.into_iter().next()),
        None => (None, None),
    };

    warn!(
        "Upstream returned no items. Message: '{}', ErrorCode: '{}'",
        message.as_deref().unwrap_or("no items or unexpected data shape"),
        error_code.as_deref().unwrap_or("N/A")
    );
    FetchOutcome::Empty(EmptyReason::NoData {
        condition,
        message,
        error_code,
    })
}
