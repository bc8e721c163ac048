//! Integration tests for the request executor.
//!
//! These tests verify authentication header injection, the forced stable
//! ordering on GET requests, parameter sanitization, response
//! classification, and error translation against a mock server.

use people_control_api::clients::{ApiClient, ApiError, ApiRequest, ApiResponse, HttpMethod};
use people_control_api::{ApiConfig, AuthToken, BaseUrl};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str) -> ApiConfig {
    ApiConfig::builder()
        .base_url(BaseUrl::new(base_url).unwrap())
        .auth_token(AuthToken::new("test-token").unwrap())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_injects_token_authorization_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/employees/42/"))
        .and(header("Authorization", "Token test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new("/employees", test_config(&server.uri()));
    let request = ApiRequest::builder(HttpMethod::Get, "/42").build().unwrap();

    let response = client.request(request).await.unwrap();
    let value = response.single().unwrap();
    assert_eq!(value, json!({"id": 42}));
}

#[tokio::test]
async fn test_every_get_carries_ordering_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/areas/"))
        .and(query_param("ordering", "id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new("/areas", test_config(&server.uri()));
    // Caller-supplied ordering is overridden by the forced stable ordering.
    let request = ApiRequest::builder(HttpMethod::Get, "")
        .query_param("ordering", "name")
        .build()
        .unwrap();

    client.request(request).await.unwrap();
}

#[tokio::test]
async fn test_caller_headers_override_defaults() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/users/1/"))
        .and(header("Authorization", "Token other-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new("/users", test_config(&server.uri()));
    let request = ApiRequest::builder(HttpMethod::Get, "/1")
        .header("Authorization", "Token other-token")
        .build()
        .unwrap();

    client.request(request).await.unwrap();
}

#[tokio::test]
async fn test_null_query_parameters_are_stripped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/employees/"))
        .and(query_param("active", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new("/employees", test_config(&server.uri()));
    let request = ApiRequest::builder(HttpMethod::Get, "")
        .query_param("active", false)
        .query_param("search", serde_json::Value::Null)
        .build()
        .unwrap();

    client.request(request).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let sent: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    assert!(sent.iter().any(|(key, value)| key == "active" && value == "false"));
    assert!(sent.iter().all(|(key, _)| key != "search"));
}

#[tokio::test]
async fn test_delete_returning_204_yields_empty_sentinel() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/users/7/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new("/users", test_config(&server.uri()));
    let request = ApiRequest::builder(HttpMethod::Delete, "/7")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert!(response.is_empty_success());
    assert_eq!(response.status(), Some(204));
}

#[tokio::test]
async fn test_status_400_raises_bad_request_with_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/areas/9/"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid code"))
        .mount(&server)
        .await;

    let client = ApiClient::new("/areas", test_config(&server.uri()));
    let request = ApiRequest::builder(HttpMethod::Get, "/9").build().unwrap();

    let error = client.request(request).await.unwrap_err();
    assert!(matches!(
        &error,
        ApiError::BadRequest { message } if message == "invalid code"
    ));
    assert!(error.to_string().contains("invalid code"));
}

#[tokio::test]
async fn test_status_500_raises_server_error_distinct_from_bad_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/areas/9/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database gone"))
        .mount(&server)
        .await;

    let client = ApiClient::new("/areas", test_config(&server.uri()));
    let request = ApiRequest::builder(HttpMethod::Get, "/9").build().unwrap();

    let error = client.request(request).await.unwrap_err();
    assert!(matches!(&error, ApiError::ServerError { message } if message == "database gone"));
    assert!(!matches!(error, ApiError::BadRequest { .. }));
}

#[tokio::test]
async fn test_other_failure_statuses_raise_transport() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/areas/9/"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let client = ApiClient::new("/areas", test_config(&server.uri()));
    let request = ApiRequest::builder(HttpMethod::Get, "/9").build().unwrap();

    let error = client.request(request).await.unwrap_err();
    assert!(matches!(
        error,
        ApiError::Transport { code: 403, message } if message == "forbidden"
    ));
}

#[tokio::test]
async fn test_envelope_with_count_and_next_classifies_as_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/employees/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{"id": 1}],
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new("/employees", test_config(&server.uri()));
    let request = ApiRequest::builder(HttpMethod::Get, "").build().unwrap();

    let response = client.request(request).await.unwrap();
    let page = response.page().unwrap();
    assert_eq!(page.count(), 1);
    assert!(page.is_exhausted());
}

#[tokio::test]
async fn test_plain_object_classifies_as_single() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/employees/3/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 3, "first_name": "Jane"})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new("/employees", test_config(&server.uri()));
    let request = ApiRequest::builder(HttpMethod::Get, "/3").build().unwrap();

    let response = client.request(request).await.unwrap();
    assert!(matches!(response, ApiResponse::Single(_)));
}

#[tokio::test]
async fn test_patch_body_nulls_are_stripped() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/users/5/"))
        .and(body_json(json!({"username": "jdoe"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 5})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new("/users", test_config(&server.uri()));
    let request = ApiRequest::builder(HttpMethod::Patch, "/5")
        .body(json!({"username": "jdoe", "email": null, "first_name": null}))
        .build()
        .unwrap();

    client.request(request).await.unwrap();
}

#[tokio::test]
async fn test_post_body_is_sent_as_built() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/users/"))
        .and(body_json(
            json!({"username": "jdoe", "email": null}),
        ))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 8})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new("/users", test_config(&server.uri()));
    let request = ApiRequest::builder(HttpMethod::Post, "")
        .body(json!({"username": "jdoe", "email": null}))
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.single().unwrap(), json!({"id": 8}));
}
