//! Outbound request URL composition.

use url::Url;

use crate::config::{ApiConfig, API_KEY_PARAM};
use crate::models::QueryParameters;

/// Response format requested from the upstream; always JSON.
pub const RETURN_TYPE: &str = "json";

/// Builds the request URL for one price query.
///
/// Credentials, the response format, classification, category and
/// conversion flag are always present; region and date only when
/// supplied. Query pairs already on the base URL are kept.
pub fn build_request_url(config: &ApiConfig, params: &QueryParameters) -> Url {
    let mut url = config.base_url().clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair(API_KEY_PARAM, config.api_key())
            .append_pair("p_cert_id", config.api_id())
            .append_pair("p_returntype", RETURN_TYPE)
            .append_pair("p_product_cls_code", params.product_cls_code())
            .append_pair("p_item_category_code", params.item_category_code())
            .append_pair("p_convert_kg_yn", params.convert_kg_yn());

        if let Some(country_code) = params.country_code() {
            pairs.append_pair("p_country_code", country_code);
        }
        if let Some(reg_day) = params.reg_day() {
            pairs.append_pair("p_regday", reg_day);
        }
    }
    url
}
