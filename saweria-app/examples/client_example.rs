//! Client example demonstrating the create/status flow against a running gateway.
//!
//! The Saweria backend is replaced by a local mock, so no real account is needed.
//!
//! Run with: cargo run -p saweria-app --example client_example

use std::net::SocketAddr;
use std::time::Duration;

use saweria_client::SaweriaApiClient;
use saweria_hex::{SaweriaService, inbound::HttpServer};
use saweria_provider::build_provider;
use saweria_types::Credentials;
use serde_json::json;
use tokio::net::TcpListener;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_backend() -> MockServer {
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Authorization", "demo-token")
                .set_body_json(json!({"data": {"id": "demo-user", "username": "kedai_kopi"}})),
        )
        .mount(&backend)
        .await;

    Mock::given(method("POST"))
        .and(path("/donations/snap/demo-user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": "trx-demo-1",
                "amount": 25000,
                "qr_string": "00020101021226610016ID.CO.SAWERIA",
                "status": "Pending"
            }
        })))
        .mount(&backend)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/donations/qris/snap/.+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": "trx-demo-1",
                "amount_raw": 25000,
                "transaction_status": "SUCCESS"
            }
        })))
        .mount(&backend)
        .await;

    backend
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let backend = mock_backend().await;
    println!("🧪 Mock Saweria backend at {}", backend.uri());

    // Find an available port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;

    let provider = build_provider(&backend.uri(), Duration::from_secs(5))?;
    let router = HttpServer::new(SaweriaService::new(provider)).router();

    println!("🚀 Starting gateway on {addr}...");
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router.into_make_service()).await {
            eprintln!("server error: {e}");
        }
    });

    let client = SaweriaApiClient::new(format!("http://{addr}"));

    let health = client.health().await?;
    println!("✅ Gateway health: {health}");

    let credentials = Credentials::new("kedai_kopi", "owner@kedai.id", "hunter2")?;

    let payment = client.create_payment(&credentials, 25000).await?;
    println!(
        "✅ Created payment {} ({}) qr={}",
        payment.trx_id, payment.status_simbolic, payment.qr_string
    );

    let status = client.check_status(&credentials, &payment.trx_id).await?;
    println!("✅ Status for {}: {}", status.trx_id, status.status_simbolic);

    Ok(())
}
