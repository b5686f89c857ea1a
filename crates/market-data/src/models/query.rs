/// Product classification code for retail prices.
pub const RETAIL_PRODUCT_CLS_CODE: &str = "01";

/// Product classification code for wholesale prices (the default).
pub const WHOLESALE_PRODUCT_CLS_CODE: &str = "02";

/// Item category code for livestock products (the default).
pub const LIVESTOCK_ITEM_CATEGORY_CODE: &str = "500";

/// Unit-conversion flag default ("do not convert to kg").
pub const DEFAULT_CONVERT_KG_YN: &str = "N";

/// Parameters of one price query.
///
/// Every field is optional; `None` and blank strings both mean "use the
/// default". Region and date have no default value of their own: leaving
/// them out asks the upstream for nationwide, most-recent prices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParameters {
    /// `01` retail, `02` wholesale
    pub product_cls_code: Option<String>,
    pub item_category_code: Option<String>,
    /// Region code (e.g. `1101` Seoul)
    pub country_code: Option<String>,
    /// As-of date, `YYYY-MM-DD`; passed through unvalidated
    pub reg_day: Option<String>,
    /// `Y` or `N`
    pub convert_kg_yn: Option<String>,
}

impl QueryParameters {
    /// Nationwide wholesale livestock prices for a day (or the most recent one).
    pub fn national_wholesale(reg_day: Option<&str>) -> Self {
        Self {
            product_cls_code: Some(WHOLESALE_PRODUCT_CLS_CODE.to_string()),
            item_category_code: Some(LIVESTOCK_ITEM_CATEGORY_CODE.to_string()),
            country_code: None,
            reg_day: reg_day.map(str::to_string),
            convert_kg_yn: Some(DEFAULT_CONVERT_KG_YN.to_string()),
        }
    }

    pub fn product_cls_code(&self) -> &str {
        non_blank(&self.product_cls_code).unwrap_or(WHOLESALE_PRODUCT_CLS_CODE)
    }

    pub fn item_category_code(&self) -> &str {
        non_blank(&self.item_category_code).unwrap_or(LIVESTOCK_ITEM_CATEGORY_CODE)
    }

    pub fn convert_kg_yn(&self) -> &str {
        non_blank(&self.convert_kg_yn).unwrap_or(DEFAULT_CONVERT_KG_YN)
    }

    /// Region code, if one was supplied.
    pub fn country_code(&self) -> Option<&str> {
        non_blank(&self.country_code)
    }

    /// As-of date, if one was supplied.
    pub fn reg_day(&self) -> Option<&str> {
        non_blank(&self.reg_day)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}
