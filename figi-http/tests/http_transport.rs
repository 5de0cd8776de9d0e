use std::time::Duration;

use figi_core::{ApiStatus, ContentType, FigiConfig, FigiError, MappingTransport};
use figi_http::HttpTransport;
use httpmock::prelude::*;

const REQUEST: &str = r#"[{"idType":"ID_WERTPAPIER","idValue":"851399","exchCode":"US"}]"#;
const REPLY: &str = r#"[{"data":[{"figi":"BBG000BLNNH6","name":"INTL BUSINESS MACHINES CORP","ticker":"IBM","exchCode":"US"}]}]"#;

fn transport(server: &MockServer, content_type: ContentType) -> HttpTransport {
    let cfg = FigiConfig {
        endpoint: server.url("/v1/mapping"),
        content_type,
        ..FigiConfig::default()
    };
    HttpTransport::from_config(&cfg).unwrap()
}

#[tokio::test]
async fn posts_json_body_with_api_key() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/mapping")
                .header("content-type", "application/json")
                .header("x-openfigi-apikey", "secret")
                .body(REQUEST);
            then.status(200)
                .header("content-type", "application/json")
                .body(REPLY);
        })
        .await;

    let reply = transport(&server, ContentType::Json)
        .send(REQUEST, Some("secret"))
        .await;

    mock.assert_async().await;
    assert_eq!(reply.status, ApiStatus::Ok);
    assert_eq!(reply.http_code, Some(200));
    assert_eq!(reply.body, REPLY);
    assert!(reply.failure.is_none());
}

#[tokio::test]
async fn legacy_content_type_is_sent_verbatim() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/mapping")
                .header("content-type", "text/json");
            then.status(200).body("[]");
        })
        .await;

    let reply = transport(&server, ContentType::LegacyTextJson)
        .send("[]", None)
        .await;

    mock.assert_async().await;
    assert_eq!(reply.into_body().unwrap(), "[]");
}

#[tokio::test]
async fn blank_or_missing_key_sends_no_key_header() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/mapping")
                .header_missing("x-openfigi-apikey");
            then.status(200).body("[]");
        })
        .await;

    let t = transport(&server, ContentType::Json);
    assert!(t.send("[]", None).await.status.is_ok());
    assert!(t.send("[]", Some("")).await.status.is_ok());

    mock.assert_hits_async(2).await;
}

#[tokio::test]
async fn error_statuses_keep_their_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/mapping");
            then.status(413).body("Too many mapping jobs in request.");
        })
        .await;

    let reply = transport(&server, ContentType::Json)
        .send(REQUEST, None)
        .await;

    assert_eq!(reply.status, ApiStatus::TooManyJobs);
    assert_eq!(reply.http_code, Some(413));
    assert_eq!(
        reply.into_body().unwrap_err(),
        FigiError::http(ApiStatus::TooManyJobs, "Too many mapping jobs in request.")
    );
}

#[tokio::test]
async fn rate_limit_is_retryable() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/mapping");
            then.status(429).body("Too Many Requests");
        })
        .await;

    let err = transport(&server, ContentType::Json)
        .send(REQUEST, None)
        .await
        .into_body()
        .unwrap_err();

    assert_eq!(err.status(), Some(ApiStatus::TooManyRequests));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn undocumented_status_maps_to_other_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/mapping");
            then.status(503).body("maintenance");
        })
        .await;

    let reply = transport(&server, ContentType::Json)
        .send(REQUEST, None)
        .await;

    assert_eq!(reply.status, ApiStatus::OtherError);
    assert_eq!(reply.http_code, Some(503));
    assert_eq!(reply.body, "maintenance");
}

#[tokio::test]
async fn refused_connection_is_transport_failure() {
    let cfg = FigiConfig {
        endpoint: "http://127.0.0.1:1/v1/mapping".to_string(),
        timeout: Duration::from_secs(2),
        ..FigiConfig::default()
    };
    let reply = HttpTransport::from_config(&cfg)
        .unwrap()
        .send(REQUEST, None)
        .await;

    assert_eq!(reply.status.code(), 999);
    assert_eq!(reply.http_code, None);
    assert!(reply.body.is_empty());
    assert!(reply.failure.is_some());
    assert!(matches!(
        reply.into_body(),
        Err(FigiError::Transport { .. })
    ));
}

#[tokio::test]
async fn slow_reply_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/mapping");
            then.status(200).body("[]").delay(Duration::from_secs(3));
        })
        .await;

    let cfg = FigiConfig {
        endpoint: server.url("/v1/mapping"),
        timeout: Duration::from_millis(200),
        ..FigiConfig::default()
    };
    let reply = HttpTransport::from_config(&cfg)
        .unwrap()
        .send(REQUEST, None)
        .await;

    assert_eq!(reply.status, ApiStatus::OtherError);
    assert!(reply.body.is_empty());
}

#[test]
fn rejects_bad_endpoint() {
    let cfg = FigiConfig {
        endpoint: "mapping".to_string(),
        ..FigiConfig::default()
    };
    assert!(matches!(
        HttpTransport::from_config(&cfg),
        Err(FigiError::InvalidArg(_))
    ));
}

#[tokio::test]
async fn wraps_caller_supplied_client() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/mapping")
                .header("content-type", "application/json");
            then.status(200).body("[]");
        })
        .await;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    let t = HttpTransport::with_client(client, &server.url("/v1/mapping"), ContentType::Json)
        .unwrap();

    assert_eq!(t.endpoint().path(), "/v1/mapping");
    assert!(t.send("[]", None).await.status.is_ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn invalid_utf8_body_is_replaced_not_dropped() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/mapping");
            then.status(200).body(&b"[{\"warning\":\"bad \xff byte\"}]"[..]);
        })
        .await;

    let reply = transport(&server, ContentType::Json)
        .send(REQUEST, None)
        .await;

    assert_eq!(reply.http_code, Some(200));
    assert_eq!(reply.body, "[{\"warning\":\"bad \u{FFFD} byte\"}]");
}

#[test]
fn rejects_zero_timeout() {
    let cfg = FigiConfig {
        timeout: Duration::ZERO,
        ..FigiConfig::default()
    };
    assert!(matches!(
        HttpTransport::from_config(&cfg),
        Err(FigiError::InvalidArg(_))
    ));
    assert!(figi_http::check_timeout(Duration::from_millis(1)).is_ok());
}
