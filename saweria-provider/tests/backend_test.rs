//! Adapter tests against a mocked Saweria backend.

use std::time::Duration;

use saweria_provider::{BackendSession, CHECK_OPERATION, SaweriaBackend};
use saweria_types::{
    Credentials, PaymentAmount, ProviderError, SaweriaProvider, SaweriaSession, map_create,
    map_status,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "jwt-token-abc";
const USER_ID: &str = "7f3c2a10-user";

fn session(server: &MockServer) -> BackendSession {
    let backend = SaweriaBackend::new(server.uri(), Duration::from_secs(5)).unwrap();
    let credentials = Credentials::new("kedai_kopi", "owner@kedai.id", "hunter2").unwrap();
    backend.session(credentials)
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_partial_json(
            json!({"email": "owner@kedai.id", "password": "hunter2"}),
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Authorization", TOKEN)
                .set_body_json(json!({"data": {"id": USER_ID, "username": "kedai_kopi"}})),
        )
        .mount(server)
        .await;
}

async fn logged_in(server: &MockServer) -> BackendSession {
    mount_login(server).await;
    let mut session = session(server);
    session.login().await.unwrap();
    session
}

#[tokio::test]
async fn test_login_reads_token_from_header() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;

    assert!(session.is_logged_in());
}

#[tokio::test]
async fn test_login_falls_back_to_body_token_and_profile_lookup() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"token": TOKEN}})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("Authorization", TOKEN))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"id": USER_ID, "username": "kedai_kopi"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session(&server);
    session.login().await.unwrap();

    assert!(session.is_logged_in());
}

#[tokio::test]
async fn test_login_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let mut session = session(&server);
    let err = session.login().await.unwrap_err();

    assert!(matches!(err, ProviderError::Unauthorized(ref m) if m == "Invalid credentials"));
    assert!(!session.is_logged_in());
}

#[tokio::test]
async fn test_login_without_token_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": USER_ID}})))
        .mount(&server)
        .await;

    let mut session = session(&server);
    let err = session.login().await.unwrap_err();

    assert!(matches!(err, ProviderError::Unauthorized(_)));
}

#[tokio::test]
async fn test_create_before_login_fails() {
    let server = MockServer::start().await;
    let session = session(&server);

    let err = session
        .create_payment_qr(PaymentAmount::new(1000).unwrap(), 10)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::NotLoggedIn));
}

#[tokio::test]
async fn test_create_payment_qr() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;

    Mock::given(method("POST"))
        .and(path(format!("/donations/snap/{}", USER_ID)))
        .and(header("Authorization", TOKEN))
        .and(body_partial_json(json!({
            "amount": 1000,
            "payment_type": "qris",
            "currency": "IDR",
            "customer_info": {"first_name": "kedai_kopi", "email": "owner@kedai.id"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": "trx-001",
                "amount": 1000,
                "amount_raw": 1000,
                "qr_string": "00020101021226",
                "status": "Pending"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let raw = session
        .create_payment_qr(PaymentAmount::new(1000).unwrap(), 10)
        .await
        .unwrap();

    assert_eq!(raw.get("author").unwrap(), "kedai_kopi");
    assert!(raw.get("expired_in").unwrap().is_string());

    let result = map_create(raw);
    assert_eq!(result.trx_id, "trx-001");
    assert_eq!(result.qr_string, "00020101021226");
    assert_eq!(result.status, "Pending");
    assert_eq!(result.author, "kedai_kopi");
}

#[tokio::test]
async fn test_create_payment_api_error() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;

    Mock::given(method("POST"))
        .and(path(format!("/donations/snap/{}", USER_ID)))
        .respond_with(
            ResponseTemplate::new(502).set_body_json(json!({"message": "upstream unavailable"})),
        )
        .mount(&server)
        .await;

    let err = session
        .create_payment_qr(PaymentAmount::new(1000).unwrap(), 10)
        .await
        .unwrap_err();

    match err {
        ProviderError::Api { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_check_payment_translates_transaction_status() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;

    Mock::given(method("GET"))
        .and(path("/donations/qris/snap/trx-001"))
        .and(header("Authorization", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": "trx-001",
                "amount_raw": 1000,
                "transaction_status": "SUCCESS"
            }
        })))
        .mount(&server)
        .await;

    let raw = session
        .check_payment(CHECK_OPERATION, "trx-001")
        .await
        .unwrap();

    let result = map_status(raw);
    assert_eq!(result.trx_id, "trx-001");
    assert_eq!(result.status, "Paid");
    assert_eq!(result.status_simbolic, "✅ Paid");
    assert_eq!(result.username, "kedai_kopi");
}

#[tokio::test]
async fn test_check_payment_rejects_unknown_operation() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;

    let err = session.check_payment("cekpayment", "trx-001").await.unwrap_err();

    assert!(matches!(err, ProviderError::UnsupportedOperation(ref op) if op == "cekpayment"));
    assert_eq!(session.operations(), vec![CHECK_OPERATION.to_string()]);
}

#[tokio::test]
async fn test_transaction_id_cannot_escape_status_path() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"secret_profile": true}})),
        )
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/donations/qris/snap/[^/]+$"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"transaction_status": "PENDING"}})),
        )
        .expect(2)
        .mount(&server)
        .await;

    for trx_id in ["../../../users", "a?x=1"] {
        let raw = session.check_payment(CHECK_OPERATION, trx_id).await.unwrap();
        assert_eq!(raw.get("status").unwrap(), "Pending");
    }

    let requests = server.received_requests().await.unwrap();
    let status_requests: Vec<_> = requests
        .iter()
        .filter(|r| r.method.as_str() == "GET")
        .collect();
    assert_eq!(status_requests.len(), 2);
    for request in status_requests {
        assert!(request.url.path().starts_with("/donations/qris/snap/"));
        assert_eq!(request.url.query(), None);
    }
}

#[tokio::test]
async fn test_dot_segment_transaction_id_is_rejected() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;

    for trx_id in [".", ".."] {
        let err = session.check_payment(CHECK_OPERATION, trx_id).await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidTransactionId(_)));
    }

    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.url.path() == "/auth/login"));
}
