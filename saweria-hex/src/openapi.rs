//! OpenAPI document and Swagger UI wiring.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use saweria_types::domain::{NormalizedCreateResult, NormalizedStatusResult, PaymentStatus};
use saweria_types::dto::{
    CheckStatusQuery, CheckStatusResponse, CreatePaymentQuery, CreatePaymentResponse,
    ErrorResponse,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Create a QRIS payment (fixed 10 minute lifetime)
#[utoipa::path(
    get,
    path = "/saweria/create",
    tag = "saweria",
    params(CreatePaymentQuery),
    responses(
        (status = 200, description = "Payment created, or `status: false` on invalid parameters", body = CreatePaymentResponse),
        (status = 500, description = "Login, provider or internal failure", body = ErrorResponse)
    )
)]
async fn create_payment() {}

/// Check the status of a transaction
#[utoipa::path(
    get,
    path = "/saweria/status",
    tag = "saweria",
    params(CheckStatusQuery),
    responses(
        (status = 200, description = "Current status, or `status: false` on invalid parameters", body = CheckStatusResponse),
        (status = 500, description = "Login, provider or internal failure", body = ErrorResponse)
    )
)]
async fn check_status() {}

/// OpenAPI documentation for the Saweria gateway.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Saweria QR Payment Gateway API",
        version = "1.0.0",
        description = "Creates Saweria QRIS payments and checks their status, normalizing the provider's responses into a stable JSON contract.\n\nCredentials are passed per request as query parameters; every request logs in once and nothing is stored.",
        license(name = "MIT"),
    ),
    paths(health, create_payment, check_status),
    components(
        schemas(
            CreatePaymentResponse,
            CheckStatusResponse,
            ErrorResponse,
            NormalizedCreateResult,
            NormalizedStatusResult,
            PaymentStatus,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "saweria", description = "QR payment creation and status checks"),
    )
)]
pub struct ApiDoc;
