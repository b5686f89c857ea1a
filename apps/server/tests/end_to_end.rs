//! Drives the full stack: router, KAMIS provider, reqwest transport and a
//! throwaway upstream on a local port.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    extract::{Query, State},
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use livestock_market_data::{
    ApiConfig, KamisProvider, ReqwestTransport, RetryPolicy, TransportSettings,
};
use livestock_server::{
    api::{app_router, UPSTREAM_OUTCOME_HEADER},
    config::Config,
    AppState,
};
use tower::ServiceExt;

const LIVESTOCK_JSON: &str = r#"{
    "condition": [["p_product_cls_code", "02"]],
    "data": {
        "error_code": "000",
        "item": [
            {
                "item_name": "소/한우",
                "itemcode": "4301",
                "kind_name": "갈비",
                "kindcode": "22",
                "rank": "1등급",
                "unit": "100g",
                "day1": "2025-05-13",
                "dpr1": "12,345"
            },
            {
                "item_name": "돼지/국산",
                "itemcode": "4304",
                "kind_name": "삼겹살",
                "kindcode": "27",
                "rank": "",
                "unit": "100g",
                "day1": "2025-05-13",
                "dpr1": "2,800"
            },
            {
                "item_name": "소/수입",
                "itemcode": "4401",
                "kind_name": "갈비",
                "kindcode": "31",
                "rank": [],
                "unit": "100g",
                "day1": "2025-05-13",
                "dpr1": "4,200"
            },
            {
                "item_name": "닭",
                "itemcode": "9901",
                "kind_name": "육계",
                "kindcode": "99",
                "rank": "",
                "unit": "1kg",
                "day1": "2025-05-13",
                "dpr1": "-"
            }
        ]
    }
}"#;

/// What the fake upstream answers, one entry per request; the last entry
/// repeats once the script runs out.
#[derive(Clone)]
struct Upstream {
    script: Arc<Vec<(StatusCode, &'static str)>>,
    hits: Arc<AtomicUsize>,
    last_query: Arc<Mutex<HashMap<String, String>>>,
}

impl Upstream {
    fn new(script: Vec<(StatusCode, &'static str)>) -> Self {
        Self {
            script: Arc::new(script),
            hits: Arc::new(AtomicUsize::new(0)),
            last_query: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    fn last_query(&self) -> HashMap<String, String> {
        self.last_query.lock().unwrap().clone()
    }
}

async fn upstream_handler(
    State(upstream): State<Upstream>,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, &'static str) {
    let hit = upstream.hits.fetch_add(1, Ordering::SeqCst);
    *upstream.last_query.lock().unwrap() = query;
    let index = hit.min(upstream.script.len() - 1);
    upstream.script[index]
}

async fn spawn_upstream(upstream: Upstream) -> SocketAddr {
    let router = Router::new()
        .route("/service/price/xml.do", get(upstream_handler))
        .with_state(upstream);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn app(upstream: &Upstream) -> Router {
    let addr = spawn_upstream(upstream.clone()).await;
    let api = ApiConfig::new(
        "e2e-key",
        "e2e-id",
        &format!(
            "http://{}/service/price/xml.do?action=dailyPriceByCategoryList",
            addr
        ),
    )
    .unwrap();
    let transport = ReqwestTransport::new(TransportSettings::default()).unwrap();
    let provider = KamisProvider::with_transport(api.clone(), transport)
        .with_retry_policy(RetryPolicy::new(2, Duration::from_millis(10)));
    app_router(Arc::new(AppState::new(Arc::new(provider))), &Config::new(api))
}

async fn call(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let outcome = response
        .headers()
        .get(UPSTREAM_OUTCOME_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, outcome, body.to_vec())
}

fn item_codes(body: &[u8]) -> Vec<String> {
    let items: Vec<serde_json::Value> = serde_json::from_slice(body).unwrap();
    items
        .iter()
        .map(|item| item["itemcode"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn beef_prices_are_filtered_from_upstream_list() {
    let upstream = Upstream::new(vec![(StatusCode::OK, LIVESTOCK_JSON)]);

    let (status, _, body) = call(
        app(&upstream).await,
        "/api/v1/livestock-prices/beef?regDay=2025-05-13",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(item_codes(&body), vec!["4301", "4401"]);
    assert_eq!(upstream.hits(), 1);

    let query = upstream.last_query();
    assert_eq!(query["action"], "dailyPriceByCategoryList");
    assert_eq!(query["p_cert_keystring"], "e2e-key");
    assert_eq!(query["p_cert_id"], "e2e-id");
    assert_eq!(query["p_returntype"], "json");
    assert_eq!(query["p_product_cls_code"], "02");
    assert_eq!(query["p_item_category_code"], "500");
    assert_eq!(query["p_convert_kg_yn"], "N");
    assert_eq!(query["p_regday"], "2025-05-13");
    assert!(!query.contains_key("p_country_code"));
}

#[tokio::test]
async fn query_endpoint_returns_every_record() {
    let upstream = Upstream::new(vec![(StatusCode::OK, LIVESTOCK_JSON)]);

    let (status, _, body) = call(
        app(&upstream).await,
        "/api/v1/livestock-prices/query?productClsCode=01&countryCode=1101",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(item_codes(&body), vec!["4301", "4304", "4401", "9901"]);

    let items: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
    assert!(items[2]["rank"].is_null());
    assert_eq!(items[3]["dpr1"], "-");

    let query = upstream.last_query();
    assert_eq!(query["p_product_cls_code"], "01");
    assert_eq!(query["p_country_code"], "1101");
    assert!(!query.contains_key("p_regday"));
}

#[tokio::test]
async fn transient_server_errors_are_retried() {
    let upstream = Upstream::new(vec![
        (StatusCode::SERVICE_UNAVAILABLE, "busy"),
        (StatusCode::BAD_GATEWAY, "busy"),
        (StatusCode::OK, LIVESTOCK_JSON),
    ]);

    let (status, _, body) = call(app(&upstream).await, "/api/v1/livestock-prices/pork").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(item_codes(&body), vec!["4304"]);
    assert_eq!(upstream.hits(), 3);
}

#[tokio::test]
async fn persistent_server_errors_give_up_after_three_attempts() {
    let upstream = Upstream::new(vec![(StatusCode::INTERNAL_SERVER_ERROR, "down")]);

    let (status, outcome, _) = call(app(&upstream).await, "/api/v1/livestock-prices/chicken").await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(outcome.as_deref(), Some("server-error"));
    assert_eq!(upstream.hits(), 3);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let upstream = Upstream::new(vec![(StatusCode::UNAUTHORIZED, "bad key")]);

    let (status, outcome, _) = call(app(&upstream).await, "/api/v1/livestock-prices/query").await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(outcome.as_deref(), Some("client-error"));
    assert_eq!(upstream.hits(), 1);
}

#[tokio::test]
async fn no_data_answers_are_no_content() {
    let bodies = [
        (r#"{"condition":"001","data":["001"]}"#, "no-data"),
        (r#"{"condition":"001","data":{"item":[]}}"#, "no-data"),
        ("null", "no-envelope"),
        ("", "no-envelope"),
    ];

    for (body, label) in bodies {
        let upstream = Upstream::new(vec![(StatusCode::OK, body)]);
        let (status, outcome, _) =
            call(app(&upstream).await, "/api/v1/livestock-prices/query").await;

        assert_eq!(status, StatusCode::NO_CONTENT, "{}", body);
        assert_eq!(outcome.as_deref(), Some(label), "{}", body);
    }
}

#[tokio::test]
async fn unparseable_body_is_not_retried() {
    for body in ["<html>maintenance</html>", "[]", r#"["000"]"#] {
        let upstream = Upstream::new(vec![(StatusCode::OK, body)]);

        let (status, outcome, _) =
            call(app(&upstream).await, "/api/v1/livestock-prices/beef").await;

        assert_eq!(status, StatusCode::NO_CONTENT, "{}", body);
        assert_eq!(outcome.as_deref(), Some("malformed-response"), "{}", body);
        assert_eq!(upstream.hits(), 1, "{}", body);
    }
}

#[tokio::test]
async fn unknown_category_never_reaches_upstream() {
    let upstream = Upstream::new(vec![(StatusCode::OK, LIVESTOCK_JSON)]);

    let (status, outcome, _) = call(app(&upstream).await, "/api/v1/livestock-prices/lamb").await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(outcome.as_deref(), Some("unknown-category"));
    assert_eq!(upstream.hits(), 0);
}
