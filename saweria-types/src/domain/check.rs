//! Normalized result of a payment status check.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use utoipa::ToSchema;

use super::raw::RawProviderResponse;
use super::status::PaymentStatus;

/// Response code reported when the provider does not send one.
const DEFAULT_CODE: u16 = 200;

/// Stable output schema for a status check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NormalizedStatusResult {
    pub author: String,
    /// Provider response code, passed through; defaults to 200
    #[schema(value_type = Object, example = 200)]
    pub code: Value,
    pub trx_id: String,
    pub username: String,
    #[schema(example = "Paid")]
    pub status: String,
    #[schema(example = "✅ Paid")]
    pub status_simbolic: String,
    #[schema(value_type = Option<f64>)]
    pub amount: Option<Number>,
    pub invoice_url: String,
    #[schema(value_type = Option<f64>)]
    pub total_dibayar: Option<Number>,
    pub created_at: String,
    #[schema(value_type = Option<Object>)]
    pub expired_in: Option<Value>,
    #[schema(value_type = Object)]
    pub raw: RawProviderResponse,
}

/// Maps a raw status response onto [`NormalizedStatusResult`].
///
/// The status symbol is derived from the resolved status, so a provider that reports
/// `state` instead of `status` still gets the right symbol.
pub fn map_status(raw: RawProviderResponse) -> NormalizedStatusResult {
    let status = raw.text_or(&["status", "state"], PaymentStatus::Pending.as_str());
    let status_simbolic = PaymentStatus::classify(&status).symbolic().to_string();

    NormalizedStatusResult {
        author: raw.text(&["author", "username"]),
        code: raw
            .passthrough(&["code", "statusCode"])
            .unwrap_or_else(|| Value::from(DEFAULT_CODE)),
        trx_id: raw.text(&["trx_id", "trxId", "id"]),
        username: raw.text(&["username", "saweria_username"]),
        status,
        status_simbolic,
        amount: raw.number(&["amount"]),
        invoice_url: raw.text(&["invoice_url", "invoiceUrl", "url"]),
        total_dibayar: raw.number(&["total_dibayar"]),
        created_at: raw.text(&["created_at", "createdAt"]),
        expired_in: raw.passthrough(&["expired_in", "expiredAt", "expires_at"]),
        raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn status(value: Value) -> NormalizedStatusResult {
        map_status(RawProviderResponse::new(value))
    }

    #[test]
    fn test_empty_input_yields_defaults() {
        let result = status(json!({}));

        assert_eq!(result.code, json!(200));
        assert_eq!(result.status, "Pending");
        assert_eq!(result.status_simbolic, "⏳ Pending");
        assert_eq!(result.author, "");
        assert_eq!(result.trx_id, "");
        assert_eq!(result.username, "");
        assert_eq!(result.invoice_url, "");
        assert_eq!(result.created_at, "");
        assert_eq!(result.amount, None);
        assert_eq!(result.total_dibayar, None);
        assert_eq!(result.expired_in, None);
        assert_eq!(result.raw.as_value(), &json!({}));
    }

    #[test]
    fn test_null_payload_is_empty_object() {
        let result = status(Value::Null);
        assert_eq!(result.raw.as_value(), &json!({}));
        assert_eq!(result.status, "Pending");
    }

    #[test]
    fn test_state_feeds_resolved_status_and_symbol() {
        let result = status(json!({"state": "Paid"}));
        assert_eq!(result.status, "Paid");
        assert_eq!(result.status_simbolic, "✅ Paid");

        let result = status(json!({"state": "Expired"}));
        assert_eq!(result.status_simbolic, "⛔ Expired");
    }

    #[test]
    fn test_status_wins_over_state() {
        let result = status(json!({"status": "Pending", "state": "Paid"}));
        assert_eq!(result.status, "Pending");
        assert_eq!(result.status_simbolic, "⏳ Pending");
    }

    #[test]
    fn test_code_fallbacks() {
        assert_eq!(status(json!({"code": 201})).code, json!(201));
        assert_eq!(status(json!({"statusCode": "404"})).code, json!("404"));
        assert_eq!(status(json!({"code": 0, "statusCode": 202})).code, json!(202));
    }

    #[test]
    fn test_amount_only_reads_amount_key() {
        assert_eq!(status(json!({"nominal": 5000})).amount, None);
        assert_eq!(
            status(json!({"amount": "5000"})).amount,
            Some(Number::from(5000))
        );
        assert_eq!(status(json!({"amount": "lima ribu"})).amount, None);
    }

    #[test]
    fn test_identity_fields() {
        let result = status(json!({
            "trxId": "T-1",
            "saweria_username": "kedai",
            "invoiceUrl": "https://saweria.co/receipt/T-1",
            "createdAt": "2024-01-01T00:00:00Z",
            "expires_at": 1704067800
        }));

        assert_eq!(result.trx_id, "T-1");
        assert_eq!(result.username, "kedai");
        assert_eq!(result.author, "");
        assert_eq!(result.invoice_url, "https://saweria.co/receipt/T-1");
        assert_eq!(result.created_at, "2024-01-01T00:00:00Z");
        assert_eq!(result.expired_in, Some(json!(1704067800)));
    }
}
