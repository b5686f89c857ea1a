use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::price::{lenient_text, PriceRecord};

/// Top-level response envelope of the upstream price API.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiEnvelope {
    /// Upstream condition code ("000" success, "001" no data, ...).
    /// Some endpoints echo the request conditions as an array instead,
    /// which is treated as absent.
    #[serde(default, deserialize_with = "lenient_text")]
    pub condition: Option<String>,

    #[serde(default)]
    pub data: Option<DataBlock>,
}

/// The `data` member of an [`ApiEnvelope`].
#[derive(Clone, Debug)]
pub enum DataBlock {
    /// Regular object form, carrying items or an error message.
    Content(DataContent),
    /// Bare list of result codes, e.g. `["001"]` when there is no data.
    Codes(Vec<String>),
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct DataContent {
    #[serde(default, alias = "errorCode", deserialize_with = "lenient_text")]
    pub error_code: Option<String>,

    #[serde(default, rename = "item")]
    pub items: Option<Vec<PriceRecord>>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
}

impl<'de> Deserialize<'de> for DataBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(codes) => Ok(DataBlock::Codes(
                codes
                    .into_iter()
                    .filter_map(|code| match code {
                        Value::String(text) => Some(text),
                        Value::Number(number) => Some(number.to_string()),
                        _ => None,
                    })
                    .collect(),
            )),
            other => DataContent::deserialize(other)
                .map(DataBlock::Content)
                .map_err(D::Error::custom),
        }
    }
}
