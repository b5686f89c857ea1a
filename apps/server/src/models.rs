use livestock_market_data::PriceRecord;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// One price row as returned to clients. Field names follow the upstream
/// wire format; values are passed through verbatim.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default, PartialEq)]
pub struct PriceRecordDto {
    pub item_name: Option<String>,
    #[serde(rename = "itemcode")]
    pub item_code: Option<String>,
    pub kind_name: Option<String>,
    #[serde(rename = "kindcode")]
    pub kind_code: Option<String>,
    pub rank: Option<String>,
    pub unit: Option<String>,
    pub day1: Option<String>,
    pub dpr1: Option<String>,
    pub day2: Option<String>,
    pub dpr2: Option<String>,
    pub day3: Option<String>,
    pub dpr3: Option<String>,
    pub day4: Option<String>,
    pub dpr4: Option<String>,
    pub day5: Option<String>,
    pub dpr5: Option<String>,
    pub day6: Option<String>,
    pub dpr6: Option<String>,
    pub day7: Option<String>,
    pub dpr7: Option<String>,
}

impl From<PriceRecord> for PriceRecordDto {
    fn from(r: PriceRecord) -> Self {
        Self {
            item_name: r.item_name,
            item_code: r.item_code,
            kind_name: r.kind_name,
            kind_code: r.kind_code,
            rank: r.rank,
            unit: r.unit,
            day1: r.day1,
            dpr1: r.dpr1,
            day2: r.day2,
            dpr2: r.dpr2,
            day3: r.day3,
            dpr3: r.dpr3,
            day4: r.day4,
            dpr4: r.dpr4,
            day5: r.day5,
            dpr5: r.dpr5,
            day6: r.day6,
            dpr6: r.dpr6,
            day7: r.day7,
            dpr7: r.dpr7,
        }
    }
}

/// Query string of `GET /livestock-prices/query`.
#[derive(Deserialize, IntoParams, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PriceQuery {
    /// `01` retail or `02` wholesale (default `02`)
    pub product_cls_code: Option<String>,
    /// Region code; nationwide when omitted
    pub country_code: Option<String>,
    /// As-of date `YYYY-MM-DD`; most recent day when omitted
    pub reg_day: Option<String>,
    /// `Y` converts prices to per-kg, `N` keeps the native unit (default `N`)
    pub convert_kg_yn: Option<String>,
}

/// Query string of `GET /livestock-prices/{category}`.
#[derive(Deserialize, IntoParams, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CategoryQuery {
    /// As-of date `YYYY-MM-DD`; most recent day when omitted
    pub reg_day: Option<String>,
}
