//! Integration tests for the API client.
//!
//! These tests run the client against a local mock server standing in for
//! both the REST API and the storefront GraphQL endpoint.

use bigcommerce_api::{
    AccessToken, ApiClient, ApiError, BaseUrl, CachePolicy, ChannelId, ClientConfig, CustomerId,
    FetchRequest, GraphqlRequest, GraphqlTransport, HttpMethod, StoreHash, TransportError,
};
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN_PATH: &str = "/stores/abc123/v3/storefront/api-token-customer-impersonation";

/// Creates a client whose REST and storefront endpoints both point at `server`
fn create_client(server: &MockServer, channel_id: i64) -> ApiClient {
    let config = ClientConfig::builder()
        .store_hash(StoreHash::new("abc123").unwrap())
        .access_token(AccessToken::new("test-access-token").unwrap())
        .channel_id(ChannelId::new(channel_id))
        .api_url(BaseUrl::new(server.uri()).unwrap())
        .storefront_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    ApiClient::new(config)
}

async fn mount_token(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "token": token },
            "meta": {}
        })))
        .mount(server)
        .await;
}

#[derive(Debug, Deserialize)]
struct SiteResponse {
    data: SiteData,
}

#[derive(Debug, Deserialize)]
struct SiteData {
    site: Site,
}

#[derive(Debug, Deserialize)]
struct Site {
    id: String,
}

// ============================================================================
// Storefront URL Tests
// ============================================================================

fn create_offline_client(channel_id: i64) -> ApiClient {
    let config = ClientConfig::builder()
        .store_hash(StoreHash::new("abc123").unwrap())
        .access_token(AccessToken::new("token").unwrap())
        .channel_id(ChannelId::new(channel_id))
        .build()
        .unwrap();
    ApiClient::new(config)
}

#[test]
fn test_default_channel_storefront_url() {
    assert_eq!(
        create_offline_client(1).storefront_api_url(),
        "https://store-abc123.mybigcommerce.com/graphql"
    );
}

#[test]
fn test_secondary_channel_storefront_url() {
    assert_eq!(
        create_offline_client(5).storefront_api_url(),
        "https://store-abc123-5.mybigcommerce.com/graphql"
    );
}

#[test]
fn test_config_from_lookup_builds_client() {
    let config = ClientConfig::from_lookup(|name| match name {
        "BIGCOMMERCE_STORE_HASH" => Some("abc123".to_string()),
        "BIGCOMMERCE_ACCESS_TOKEN" => Some("token".to_string()),
        "BIGCOMMERCE_CHANNEL_ID" => Some("5".to_string()),
        _ => None,
    })
    .unwrap();

    let client = ApiClient::new(config);
    assert_eq!(
        client.storefront_api_url(),
        "https://store-abc123-5.mybigcommerce.com/graphql"
    );
}

#[test]
fn test_config_missing_field_fails() {
    let result = ClientConfig::from_lookup(|name| match name {
        "BIGCOMMERCE_STORE_HASH" => Some("abc123".to_string()),
        "BIGCOMMERCE_CHANNEL_ID" => Some("1".to_string()),
        _ => None,
    });

    assert!(result.is_err());
}

// ============================================================================
// fetch Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_sends_default_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/channels"))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/json"))
        .and(header("x-auth-token", "test-access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, 1);
    let response = client
        .fetch("/v3/channels", FetchRequest::get())
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_fetch_caller_headers_override_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v2/store"))
        .and(header("accept", "text/plain"))
        .and(header("x-custom", "yes"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, 1);
    let request = FetchRequest::builder(HttpMethod::Get)
        .header("Accept", "text/plain")
        .header("X-Custom", "yes")
        .build();

    let response = client.fetch("/v2/store", request).await.unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_fetch_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/stores/abc123/v3/channels/2"))
        .and(body_json(json!({ "name": "Wholesale" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, 1);
    let request = FetchRequest::builder(HttpMethod::Put)
        .body(json!({ "name": "Wholesale" }))
        .build();

    client.fetch("/v3/channels/2", request).await.unwrap();
}

#[tokio::test]
async fn test_fetch_sends_raw_body_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/stores/abc123/v3/channels/2"))
        .and(body_string(r#"{"name":"Wholesale"}"#))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, 1);
    let request = FetchRequest::builder(HttpMethod::Put)
        .raw_body(r#"{"name":"Wholesale"}"#)
        .build();

    let response = client.fetch("/v3/channels/2", request).await.unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_fetch_sends_bodiless_post() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/stores/abc123/v3/carts/x/redirect_urls"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, 1);
    let request = FetchRequest::builder(HttpMethod::Post).build();

    let response = client
        .fetch("/v3/carts/x/redirect_urls", request)
        .await
        .unwrap();

    assert_eq!(response.status(), 201);
    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_fetch_empty_endpoint_targets_store_root() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, 1);
    let response = client.fetch("", FetchRequest::get()).await.unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_fetch_returns_error_statuses_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&server)
        .await;

    let client = create_client(&server, 1);
    let response = client
        .fetch("/v3/missing", FetchRequest::get())
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
    assert_eq!(response.text().await.unwrap(), "not here");
}

// ============================================================================
// query Tests
// ============================================================================

#[tokio::test]
async fn test_query_exchanges_token_then_posts_document() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("x-auth-token", "test-access-token"))
        .and(header_exists("x-bc-customer-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "token": "sf-token" },
            "meta": {}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("authorization", "Bearer sf-token"))
        .and(body_json(json!({ "query": "query { site { id } }" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "site": { "id": "s1" } } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, 5);
    let response: SiteResponse = client.query("query { site { id } }").await.unwrap();

    assert_eq!(response.data.site.id, "s1");
}

#[tokio::test]
async fn test_query_token_request_body() {
    let server = MockServer::start().await;
    mount_token(&server, "sf-token").await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "site": { "id": "s1" } } })),
        )
        .mount(&server)
        .await;

    let client = create_client(&server, 5);
    let before = chrono::Utc::now().timestamp();
    let _: SiteResponse = client.query("query { site { id } }").await.unwrap();
    let after = chrono::Utc::now().timestamp();

    let requests = server.received_requests().await.unwrap();
    let token_request = requests
        .iter()
        .find(|r| r.url.path() == TOKEN_PATH)
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&token_request.body).unwrap();

    assert_eq!(body["channel_id"], 5);
    let expires_at = body["expires_at"].as_i64().unwrap();
    assert!(expires_at >= before + 300 && expires_at <= after + 300);
}

#[tokio::test]
async fn test_each_query_exchanges_its_own_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "token": "sf-token" },
            "meta": {}
        })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "site": { "id": "s1" } } })),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = create_client(&server, 1);
    let _: SiteResponse = client.query("query { site { id } }").await.unwrap();
    let _: SiteResponse = client.query("query { site { id } }").await.unwrap();
}

#[tokio::test]
async fn test_query_shape_mismatch_is_validation_error() {
    let server = MockServer::start().await;
    mount_token(&server, "sf-token").await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "site": null } })))
        .mount(&server)
        .await;

    let client = create_client(&server, 1);
    let error = client
        .query::<SiteResponse>("query { site { id } }")
        .await
        .unwrap_err();

    assert!(error.is_validation());
    assert!(!error.is_transport());
}

#[tokio::test]
async fn test_query_non_json_body_is_transport_error() {
    let server = MockServer::start().await;
    mount_token(&server, "sf-token").await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = create_client(&server, 1);
    let error = client
        .query::<SiteResponse>("query { site { id } }")
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ApiError::Transport(TransportError::InvalidJson { status: 502, .. })
    ));
}

#[tokio::test]
async fn test_query_malformed_token_response_aborts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server, 1);
    let error = client
        .query::<SiteResponse>("query { site { id } }")
        .await
        .unwrap_err();

    match error {
        ApiError::Validation(e) => assert_eq!(e.shape, "StorefrontTokenResponse"),
        other => panic!("Expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_query_unreachable_host_is_transport_error() {
    let config = ClientConfig::builder()
        .store_hash(StoreHash::new("abc123").unwrap())
        .access_token(AccessToken::new("token").unwrap())
        .channel_id(ChannelId::new(1))
        .api_url(BaseUrl::new("http://127.0.0.1:1").unwrap())
        .build()
        .unwrap();
    let client = ApiClient::new(config);

    let error = client
        .query::<SiteResponse>("query { site { id } }")
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ApiError::Transport(TransportError::Network(_))
    ));
}

// ============================================================================
// GraphqlTransport Tests
// ============================================================================

#[tokio::test]
async fn test_execute_sends_customer_and_cache_headers() {
    let server = MockServer::start().await;
    mount_token(&server, "sf-token").await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("authorization", "Bearer sf-token"))
        .and(header("x-bc-customer-id", "7"))
        .and(header("cache-control", "no-store"))
        .and(body_json(json!({
            "query": "mutation M($input: Input!) { m(input: $input) }",
            "variables": { "input": { "id": 1 } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "m": true } })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, 1);
    let request = GraphqlRequest::new("mutation M($input: Input!) { m(input: $input) }")
        .variables(json!({ "input": { "id": 1 } }))
        .customer_id(Some(CustomerId::new("7")))
        .cache(CachePolicy::NoStore);

    let data = client.execute(request).await.unwrap();
    assert_eq!(data, json!({ "m": true }));
}

#[tokio::test]
async fn test_execute_reports_top_level_errors() {
    let server = MockServer::start().await;
    mount_token(&server, "sf-token").await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{ "message": "First" }, { "message": "Second" }]
        })))
        .mount(&server)
        .await;

    let client = create_client(&server, 1);
    let error = client
        .execute(GraphqlRequest::new("query { customer { id } }"))
        .await
        .unwrap_err();

    match error {
        ApiError::Graphql(errors) => {
            assert_eq!(errors.messages, vec!["First", "Second"]);
            assert_eq!(errors.to_string(), "First\nSecond");
        }
        other => panic!("Expected GraphQL errors, got {other:?}"),
    }
}

#[tokio::test]
async fn test_execute_missing_data_is_validation_error() {
    let server = MockServer::start().await;
    mount_token(&server, "sf-token").await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = create_client(&server, 1);
    let error = client
        .execute(GraphqlRequest::new("query { customer { id } }"))
        .await
        .unwrap_err();

    assert!(error.is_validation());
}
