//! API client behaviour against a mock HTTP server.
#![cfg(feature = "client")]

use std::time::Duration;

use albrd_admin::api::ApiClient;
use albrd_admin::errors::ErrorBody;
use albrd_admin::forms::page::PageParams;
use albrd_admin::forms::survey::{ResultDeleteParams, ResultDeleteParamsDto};
use albrd_admin::providers::PoolProvider;
use albrd_admin::services::pool::list_pools;
use albrd_admin::transport::{AUTH_HEADER, HttpTransport, Session};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(base_url: &str, timeout: Duration) -> ApiClient {
    ApiClient::new(HttpTransport::from_base_url(base_url, timeout).expect("valid base url"))
}

fn session() -> Session {
    Session::new(Some("token-123".to_string()))
}

#[tokio::test]
async fn get_pools_sends_headers_and_maps_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pool"))
        .and(query_param("startIndex", "0"))
        .and(query_param("maxResults", "20"))
        .and(header(AUTH_HEADER, "token-123"))
        .and(header("accept-encoding", "gzip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalItems": 41,
            "items": [
                { "poolId": 1, "name": "Centro", "eiSerie": "EI-1", "extra": "x" },
                { "poolId": 2, "name": "Norte", "eiSerie": "EI-2", "address": "Av. 1" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server.uri(), Duration::from_secs(5))
        .get_pools(&session(), PageParams::default())
        .await
        .expect("pools page");

    assert_eq!(page.total_items, 41);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].name, "Centro");
    assert_eq!(page.items[1].address.as_deref(), Some("Av. 1"));
}

#[tokio::test]
async fn anonymous_session_omits_auth_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/survey/question"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "totalItems": 0, "items": [] })),
        )
        .mount(&server)
        .await;

    let page = client(&server.uri(), Duration::from_secs(5))
        .get_questions(&Session::anonymous())
        .await
        .expect("questions page");

    assert!(page.is_empty());
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get(AUTH_HEADER).is_none());
}

#[tokio::test]
async fn backend_error_body_passes_through_unchanged() {
    let server = MockServer::start().await;
    let body = json!({
        "errorCode": 404,
        "userMessage": "Sede no encontrada",
        "developerMessage": "pool 99 does not exist",
        "moreInfo": "https://docs.invalid/errors/404"
    });
    Mock::given(method("GET"))
        .and(path("/pool"))
        .respond_with(ResponseTemplate::new(404).set_body_json(body))
        .mount(&server)
        .await;

    let err = client(&server.uri(), Duration::from_secs(5))
        .get_pools(&session(), PageParams::default())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ErrorBody {
            error_code: 404,
            user_message: "Sede no encontrada".to_string(),
            developer_message: "pool 99 does not exist".to_string(),
            more_info: "https://docs.invalid/errors/404".to_string(),
        }
    );
}

#[tokio::test]
async fn invalid_json_is_a_parsing_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pool"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client(&server.uri(), Duration::from_secs(5))
        .get_pools(&session(), PageParams::default())
        .await
        .unwrap_err();

    assert_eq!(err.error_code, 50003);
    assert!(err.developer_message.is_empty());
    assert!(err.more_info.is_empty());
}

#[tokio::test]
async fn unexpected_payload_shape_is_a_parsing_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pool"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2, 3])))
        .mount(&server)
        .await;

    let err = client(&server.uri(), Duration::from_secs(5))
        .get_pools(&session(), PageParams::default())
        .await
        .unwrap_err();

    assert_eq!(err.error_code, 50003);
}

#[tokio::test]
async fn slow_response_is_a_timeout_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pool"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "totalItems": 0, "items": [] }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = client(&server.uri(), Duration::from_millis(100))
        .get_pools(&session(), PageParams::default())
        .await
        .unwrap_err();

    assert_eq!(err.error_code, 50004);
    assert!(!err.user_message.is_empty());
}

#[tokio::test]
async fn unreachable_server_is_a_fetch_error() {
    let err = client("http://127.0.0.1:1/", Duration::from_secs(5))
        .get_pools(&session(), PageParams::default())
        .await
        .unwrap_err();

    assert_eq!(err.error_code, 50002);
}

#[tokio::test]
async fn delete_result_accepts_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/survey/result/7"))
        .and(header(AUTH_HEADER, "token-123"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let dto = ResultDeleteParamsDto::from_payload(&json!({ "resultId": "7" })).expect("object");
    let params = ResultDeleteParams::try_from(&dto).expect("valid params");

    client(&server.uri(), Duration::from_secs(5))
        .delete_result(&session(), params)
        .await
        .expect("deleted");
}

#[tokio::test]
async fn base_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/pool"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "totalItems": 0, "items": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&format!("{}/api/v1/", server.uri()), Duration::from_secs(5));
    let raw = api
        .fetch_pools(&session(), &PageParams::default())
        .await
        .expect("raw payload");

    assert_eq!(raw["totalItems"], 0);
}

#[tokio::test]
async fn service_collapses_http_failures_into_error_model() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pool"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let api = client(&server.uri(), Duration::from_secs(5));
    let err = list_pools(&api, &session(), &PageParams::default())
        .await
        .unwrap_err();

    assert_eq!(err.code, None);
    assert_eq!(err.user_message, albrd_admin::errors::FALLBACK_MESSAGE);
}
