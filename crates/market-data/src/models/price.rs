use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single price row as returned by the upstream price API.
///
/// Every field is optional text: the upstream sends untyped strings,
/// including placeholders such as `"-"`, and no field-level validation is
/// applied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(rename = "item_name", default, deserialize_with = "lenient_text")]
    pub item_name: Option<String>,

    #[serde(rename = "itemcode", default, deserialize_with = "lenient_text")]
    pub item_code: Option<String>,

    #[serde(rename = "kind_name", default, deserialize_with = "lenient_text")]
    pub kind_name: Option<String>,

    #[serde(rename = "kindcode", default, deserialize_with = "lenient_text")]
    pub kind_code: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub rank: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub unit: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub day1: Option<String>,
    /// Price on the requested day
    #[serde(default, deserialize_with = "lenient_text")]
    pub dpr1: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub day2: Option<String>,
    /// Price one day earlier
    #[serde(default, deserialize_with = "lenient_text")]
    pub dpr2: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub day3: Option<String>,
    /// Price one week earlier
    #[serde(default, deserialize_with = "lenient_text")]
    pub dpr3: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub day4: Option<String>,
    /// Price two weeks earlier
    #[serde(default, deserialize_with = "lenient_text")]
    pub dpr4: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub day5: Option<String>,
    /// Price one month earlier
    #[serde(default, deserialize_with = "lenient_text")]
    pub dpr5: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub day6: Option<String>,
    /// Price one year earlier
    #[serde(default, deserialize_with = "lenient_text")]
    pub dpr6: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub day7: Option<String>,
    /// Average-year price
    #[serde(default, deserialize_with = "lenient_text")]
    pub dpr7: Option<String>,
}

/// Accepts a string, number, boolean or null; anything else (the upstream
/// sends `[]` for some empty fields) deserializes as absent.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        Some(Value::Array(_)) | Some(Value::Object(_)) | Some(Value::Null) | None => None,
    })
}
