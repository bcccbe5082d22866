//! HTTP request handlers.

use std::any::Any;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use saweria_types::error::{MISSING_CREATE_PARAMS, MISSING_STATUS_PARAMS};
use saweria_types::{
    AppError, CheckStatusQuery, CheckStatusResponse, CreatePaymentQuery, CreatePaymentResponse,
    ErrorResponse, SaweriaProvider,
};

use crate::SaweriaService;

/// Application state shared across handlers.
pub struct AppState<P: SaweriaProvider> {
    pub service: SaweriaService<P>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Validation failures are reported in the body, not the status line.
        let status = match &self.0 {
            AppError::Validation(_) => StatusCode::OK,
            AppError::Authentication(_) | AppError::Provider { .. } | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorResponse::from(&self.0))).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Create a QR payment.
#[tracing::instrument(skip_all, fields(username = tracing::field::Empty))]
pub async fn create_payment<P: SaweriaProvider>(
    State(state): State<Arc<AppState<P>>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(pairs) = query.map_err(|rejection| {
        tracing::debug!("Unreadable query string: {}", rejection);
        AppError::Validation(MISSING_CREATE_PARAMS.into())
    })?;
    let query = CreatePaymentQuery::from_pairs(pairs);
    record_username(query.username.as_deref());

    let data = state.service.create_payment(&query).await?;
    Ok(Json(CreatePaymentResponse::new(data)))
}

/// Check the status of a transaction.
#[tracing::instrument(skip_all, fields(username = tracing::field::Empty))]
pub async fn check_status<P: SaweriaProvider>(
    State(state): State<Arc<AppState<P>>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(pairs) = query.map_err(|rejection| {
        tracing::debug!("Unreadable query string: {}", rejection);
        AppError::Validation(MISSING_STATUS_PARAMS.into())
    })?;
    let query = CheckStatusQuery::from_pairs(pairs);
    record_username(query.username.as_deref());

    let data = state.service.check_status(&query).await?;
    Ok(Json(CheckStatusResponse::new(data)))
}

fn record_username(username: Option<&str>) {
    if let Some(username) = username {
        tracing::Span::current().record("username", username);
    }
}

/// Turns a panic escaping a handler into the generic internal-error payload.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("Unexpected error while handling request: {}", detail);
    ApiError(AppError::Internal(detail)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_is_http_200() {
        let response = ApiError(AppError::Validation("missing".into())).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"status": false, "error": "missing"})
        );
    }

    #[tokio::test]
    async fn test_authentication_error_is_http_500() {
        let response = ApiError(AppError::Authentication("bad".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Gagal login ke Saweria");
        assert_eq!(json["detail"], "bad");
    }

    #[tokio::test]
    async fn test_panic_payload_becomes_internal_error() {
        let response = handle_panic(Box::new("kaboom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["status"], false);
        assert_eq!(json["error"], "Internal server error");
        assert_eq!(json["detail"], "kaboom");
    }
}
