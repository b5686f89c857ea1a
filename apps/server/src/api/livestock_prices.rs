use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{CategoryQuery, PriceQuery, PriceRecordDto},
};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use livestock_market_data::{
    FetchOutcome, QueryParameters, LIVESTOCK_ITEM_CATEGORY_CODE, RETAIL_PRODUCT_CLS_CODE,
    WHOLESALE_PRODUCT_CLS_CODE,
};

/// Names the empty reason or failure kind on 204 responses.
pub const UPSTREAM_OUTCOME_HEADER: &str = "x-upstream-outcome";

/// 200 with the records, or 204 with the outcome label.
fn outcome_response(outcome: FetchOutcome) -> Response {
    match outcome {
        FetchOutcome::Success(items) => {
            let body: Vec<PriceRecordDto> = items.into_iter().map(PriceRecordDto::from).collect();
            Json(body).into_response()
        }
        other => {
            tracing::debug!("Responding 204 for upstream outcome {}", other.label());
            (
                StatusCode::NO_CONTENT,
                [(UPSTREAM_OUTCOME_HEADER, other.label())],
            )
                .into_response()
        }
    }
}

/// Blank values count as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn validate(query: &PriceQuery) -> ApiResult<()> {
    if let Some(code) = present(&query.product_cls_code) {
        if code != RETAIL_PRODUCT_CLS_CODE && code != WHOLESALE_PRODUCT_CLS_CODE {
            return Err(ApiError::BadRequest(format!(
                "productClsCode must be '{}' or '{}', got '{}'",
                RETAIL_PRODUCT_CLS_CODE, WHOLESALE_PRODUCT_CLS_CODE, code
            )));
        }
    }
    if let Some(flag) = present(&query.convert_kg_yn) {
        if flag != "Y" && flag != "N" {
            return Err(ApiError::BadRequest(format!(
                "convertKgYn must be 'Y' or 'N', got '{}'",
                flag
            )));
        }
    }
    Ok(())
}

fn bad_query(rejection: QueryRejection) -> ApiError {
    ApiError::BadRequest(rejection.body_text())
}

#[utoipa::path(
    get,
    path = "/api/v1/livestock-prices/query",
    params(PriceQuery),
    responses(
        (status = 200, description = "Price records", body = [PriceRecordDto]),
        (status = 204, description = "No data, or the upstream call failed"),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "livestock-prices"
)]
pub(crate) async fn query_prices(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PriceQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) = query.map_err(bad_query)?;
    validate(&query)?;

    let params = QueryParameters {
        product_cls_code: query.product_cls_code,
        item_category_code: Some(LIVESTOCK_ITEM_CATEGORY_CODE.to_string()),
        country_code: query.country_code,
        reg_day: query.reg_day,
        convert_kg_yn: query.convert_kg_yn,
    };
    let outcome = state.price_provider.get_price_info(&params).await;
    Ok(outcome_response(outcome))
}

#[utoipa::path(
    get,
    path = "/api/v1/livestock-prices/{category}",
    params(
        ("category" = String, Path, description = "beef, pork or chicken"),
        CategoryQuery
    ),
    responses(
        (
            status = 200,
            description = "Nationwide wholesale prices of the category",
            body = [PriceRecordDto]
        ),
        (
            status = 204,
            description = "Unknown category, no matching records, or the upstream call failed"
        )
    ),
    tag = "livestock-prices"
)]
pub(crate) async fn category_prices(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
    query: Result<Query<CategoryQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) = query.map_err(bad_query)?;
    let outcome = state
        .price_provider
        .get_livestock_prices(&category, present(&query.reg_day))
        .await;
    Ok(outcome_response(outcome))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/livestock-prices/query", get(query_prices))
        .route("/livestock-prices/{category}", get(category_prices))
}
