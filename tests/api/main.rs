use btc_lookup::{
    AppState, ExchangeRate, create_router,
    http::{BlockchainClient, ClientOptions},
};
use reqwest::StatusCode;
use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ADDRESS: &str = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";
const SEGWIT_ADDRESS: &str = "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq";
const TX_A: &str = "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";
const TX_B: &str = "0e3e2357e806b6cdb1f70b54c3a3a17b6714ee1f0e68bebb44a74b1efd512098";

struct TestApp {
    base_url: String,
    exchange_rate: ExchangeRate,
}

impl TestApp {
    async fn spawn(upstream: &MockServer, rate: f64) -> Self {
        let blockchain = BlockchainClient::new(Url::parse(&upstream.uri()).unwrap(), &ClientOptions::default()).unwrap();
        let exchange_rate = ExchangeRate::new(rate);
        let router = create_router(AppState::new(blockchain, exchange_rate.clone()));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            exchange_rate,
        }
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::get(format!("{}{}", self.base_url, path)).await.unwrap()
    }

    async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        let response = self.get(path).await;
        let status = response.status();
        (status, response.json().await.unwrap())
    }
}

async fn mount_json(server: &MockServer, route: String, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn assert_error_body(status: StatusCode, body: &Value) {
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string(), "expected an error message, got {}", body);
}

#[tokio::test]
async fn btc_rate_returns_bare_number() {
    let upstream = MockServer::start().await;
    let app = TestApp::spawn(&upstream, 30000.0).await;

    let (status, body) = app.get_json("/btc_rate").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(30000.0));

    app.exchange_rate.set(31000.5).await;
    let (_, body) = app.get_json("/btc_rate").await;
    assert_eq!(body, json!(31000.5));
}

#[tokio::test]
async fn btc_rate_is_zero_before_first_refresh() {
    let upstream = MockServer::start().await;
    let app = TestApp::spawn(&upstream, 0.0).await;

    let (status, body) = app.get_json("/btc_rate").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_f64(), Some(0.0));
}

#[tokio::test]
async fn transaction_is_passed_through() {
    let upstream = MockServer::start().await;
    let tx = json!({ "hash": TX_A, "inputs": [], "out": [{ "addr": ADDRESS, "value": 5000000000u64 }] });
    mount_json(&upstream, format!("/rawtx/{}", TX_A), tx.clone()).await;
    let app = TestApp::spawn(&upstream, 30000.0).await;

    let (status, body) = app.get_json(&format!("/transaction/{}", TX_A)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, tx);
}

#[tokio::test]
async fn transaction_upstream_failure_is_json_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&upstream)
        .await;
    let app = TestApp::spawn(&upstream, 30000.0).await;

    let (status, body) = app.get_json(&format!("/transaction/{}", TX_A)).await;

    assert_error_body(status, &body);
}

#[tokio::test]
async fn wallet_info_is_passed_through() {
    let upstream = MockServer::start().await;
    let info = json!({ "address": SEGWIT_ADDRESS, "final_balance": 0, "txs": [] });
    mount_json(&upstream, format!("/rawaddr/{}", SEGWIT_ADDRESS), info.clone()).await;
    let app = TestApp::spawn(&upstream, 30000.0).await;

    let (status, body) = app.get_json(&format!("/wallet/{}", SEGWIT_ADDRESS)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, info);
}

#[tokio::test]
async fn wallet_info_for_malformed_address_is_null() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;
    let app = TestApp::spawn(&upstream, 30000.0).await;

    let (status, body) = app.get_json("/wallet/notanaddress").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn wallet_info_upstream_failure_is_json_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too many requests"))
        .mount(&upstream)
        .await;
    let app = TestApp::spawn(&upstream, 30000.0).await;

    let (status, body) = app.get_json(&format!("/wallet/{}", ADDRESS)).await;

    assert_error_body(status, &body);
    assert!(body["error"].as_str().unwrap().contains("429"));
}

#[tokio::test]
async fn wallet_transactions_are_stamped_with_one_rate_in_order() {
    let upstream = MockServer::start().await;
    mount_json(
        &upstream,
        format!("/rawaddr/{}", ADDRESS),
        json!({ "address": ADDRESS, "txs": [{ "hash": TX_A }, { "hash": TX_B }] }),
    )
    .await;
    mount_json(&upstream, format!("/rawtx/{}", TX_A), json!({ "hash": TX_A, "block_height": 0 })).await;
    mount_json(&upstream, format!("/rawtx/{}", TX_B), json!({ "hash": TX_B, "block_height": 170 })).await;
    let app = TestApp::spawn(&upstream, 30000.0).await;

    let (status, body) = app.get_json(&format!("/wallet/transactions/{}", ADDRESS)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "hash": TX_A, "block_height": 0, "btc_to_usd_rate": 30000.0 },
            { "hash": TX_B, "block_height": 170, "btc_to_usd_rate": 30000.0 },
        ])
    );
}

#[tokio::test]
async fn wallet_transactions_without_history_is_empty() {
    let upstream = MockServer::start().await;
    mount_json(&upstream, format!("/rawaddr/{}", ADDRESS), json!({ "txs": [] })).await;
    let app = TestApp::spawn(&upstream, 30000.0).await;

    let (status, body) = app.get_json(&format!("/wallet/transactions/{}", ADDRESS)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn wallet_transactions_for_malformed_address_fails() {
    let upstream = MockServer::start().await;
    let app = TestApp::spawn(&upstream, 30000.0).await;

    let (status, body) = app.get_json("/wallet/transactions/notanaddress").await;

    assert_error_body(status, &body);
}

#[tokio::test]
async fn wallet_transactions_without_txs_list_fails() {
    let upstream = MockServer::start().await;
    mount_json(&upstream, format!("/rawaddr/{}", ADDRESS), json!({ "address": ADDRESS })).await;
    let app = TestApp::spawn(&upstream, 30000.0).await;

    let (status, body) = app.get_json(&format!("/wallet/transactions/{}", ADDRESS)).await;

    assert_error_body(status, &body);
}

#[tokio::test]
async fn wallet_transactions_fail_when_one_lookup_fails() {
    let upstream = MockServer::start().await;
    mount_json(
        &upstream,
        format!("/rawaddr/{}", ADDRESS),
        json!({ "txs": [{ "hash": TX_A }, { "hash": TX_B }] }),
    )
    .await;
    mount_json(&upstream, format!("/rawtx/{}", TX_A), json!({ "hash": TX_A })).await;
    Mock::given(method("GET"))
        .and(path(format!("/rawtx/{}", TX_B)))
        .respond_with(ResponseTemplate::new(503))
        .mount(&upstream)
        .await;
    let app = TestApp::spawn(&upstream, 30000.0).await;

    let (status, body) = app.get_json(&format!("/wallet/transactions/{}", ADDRESS)).await;

    assert_error_body(status, &body);
    assert!(body["error"].as_str().unwrap().contains(TX_B));
}

#[tokio::test]
async fn wallet_balance_is_btc_and_usd_pair() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/q/addressbalance/{}", ADDRESS)))
        .respond_with(ResponseTemplate::new(200).set_body_string("200000000"))
        .mount(&upstream)
        .await;
    let app = TestApp::spawn(&upstream, 30000.0).await;

    let (status, body) = app.get_json(&format!("/wallet/balance/{}", ADDRESS)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([2.0, 60000.0]));
}

#[tokio::test]
async fn wallet_balance_failure_is_json_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal error"))
        .mount(&upstream)
        .await;
    let app = TestApp::spawn(&upstream, 30000.0).await;

    let (status, body) = app.get_json(&format!("/wallet/balance/{}", ADDRESS)).await;

    assert_error_body(status, &body);
}

#[tokio::test]
async fn unreachable_upstream_is_json_error_everywhere() {
    let unreachable = Url::parse("http://127.0.0.1:9/").unwrap();
    let blockchain = BlockchainClient::new(unreachable, &ClientOptions::default()).unwrap();
    let router = create_router(AppState::new(blockchain, ExchangeRate::new(30000.0)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    for route in [
        format!("/transaction/{}", TX_A),
        format!("/wallet/{}", ADDRESS),
        format!("/wallet/transactions/{}", ADDRESS),
        format!("/wallet/balance/{}", ADDRESS),
    ] {
        let response = reqwest::get(format!("{}{}", base_url, route)).await.unwrap();
        let status = response.status();
        let body: Value = response.json().await.unwrap();
        assert_error_body(status, &body);
    }
}

#[tokio::test]
async fn landing_page_and_assets_are_served() {
    let upstream = MockServer::start().await;
    let app = TestApp::spawn(&upstream, 30000.0).await;

    let index = app.get("/").await;
    assert_eq!(index.status(), StatusCode::OK);
    assert!(index.headers()["content-type"].to_str().unwrap().starts_with("text/html"));
    let html = index.text().await.unwrap();
    assert!(html.contains("/static/js/script.js"));
    assert!(html.contains(r#"<div id="cy">"#));

    let script = app.get("/static/js/script.js").await;
    assert_eq!(script.status(), StatusCode::OK);
    assert!(script.headers()["content-type"].to_str().unwrap().starts_with("text/javascript"));

    let (status, body) = app.get_json("/static/js/missing.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn unknown_routes_are_json_not_found() {
    let upstream = MockServer::start().await;
    let app = TestApp::spawn(&upstream, 30000.0).await;

    let (status, body) = app.get_json("/no/such/route").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found: /no/such/route" }));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let upstream = MockServer::start().await;
    let app = TestApp::spawn(&upstream, 30000.0).await;

    let (status, body) = app.get_json("/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/wallet/balance/{address}"].is_object());
}
