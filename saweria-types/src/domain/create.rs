//! Normalized result of a QR payment creation.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use utoipa::ToSchema;

use super::raw::RawProviderResponse;
use super::status::PaymentStatus;

/// Stable output schema for a created QR payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NormalizedCreateResult {
    #[schema(example = "kedai_kopi")]
    pub author: String,
    /// Provider transaction identifier
    #[schema(example = "c0ffee00-1234-5678-9abc-def012345678")]
    pub trx_id: String,
    #[schema(example = "Pending")]
    pub status: String,
    #[schema(example = "⏳ Pending")]
    pub status_simbolic: String,
    pub message: String,
    #[schema(value_type = Option<f64>, example = 10000)]
    pub amount: Option<Number>,
    /// QRIS payload to render as a QR code
    pub qr_string: String,
    pub created_at: String,
    pub invoice_url: String,
    #[schema(value_type = Option<f64>)]
    pub total_dibayar: Option<Number>,
    pub saweria_username: String,
    pub saweria_apikey: String,
    pub qr_image: String,
    /// Expiry marker, passed through from the provider
    #[schema(value_type = Option<Object>)]
    pub expired_in: Option<Value>,
    /// Provider payload exactly as received
    #[schema(value_type = Object)]
    pub raw: RawProviderResponse,
}

/// Maps a raw creation response onto [`NormalizedCreateResult`].
///
/// Total: every input, including an empty or non-object payload, yields a fully
/// populated result.
pub fn map_create(raw: RawProviderResponse) -> NormalizedCreateResult {
    let status_simbolic = raw
        .get("status")
        .and_then(Value::as_str)
        .map(PaymentStatus::classify)
        .unwrap_or_default()
        .symbolic()
        .to_string();

    NormalizedCreateResult {
        author: raw.text(&["author", "saweria_username", "username"]),
        trx_id: raw.text(&["trx_id", "trxId", "id", "invoice_id"]),
        status: raw.text_or(&["status"], PaymentStatus::Pending.as_str()),
        status_simbolic,
        message: raw.text(&["message", "note"]),
        amount: raw.number(&["amount", "nominal"]),
        qr_string: raw.text(&["qr_string", "qr", "qrText"]),
        created_at: raw.text(&["created_at", "createdAt", "date"]),
        invoice_url: raw.text(&["invoice_url", "invoiceUrl", "url"]),
        total_dibayar: raw.number(&["total_dibayar", "total_paid"]),
        saweria_username: raw.text(&["saweria_username", "username"]),
        saweria_apikey: raw.text(&["saweria_apikey", "api_key"]),
        qr_image: raw.text(&["qr_image", "image", "qr_image_url"]),
        expired_in: raw.passthrough(&["expired_in", "expiredAt", "expires_at"]),
        raw,
    }
}
