//! Wire types for the Saweria backend.

use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct CustomerInfo<'a> {
    pub first_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
}

/// QRIS donation request.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequest<'a> {
    pub agree: bool,
    pub not_underage: bool,
    pub message: &'a str,
    pub amount: u64,
    #[serde(rename = "payment_type")]
    pub payment_type: &'a str,
    pub vote: &'a str,
    pub currency: &'a str,
    #[serde(rename = "customer_info")]
    pub customer_info: CustomerInfo<'a>,
}

/// Unwraps the backend's `{"data": ...}` envelope; payloads without one pass through.
pub fn unwrap_data(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Extracts a readable error message from a failed response body.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            ["message", "error", "msg"]
                .iter()
                .find_map(|key| v.get(key).and_then(Value::as_str).map(String::from))
        })
        .unwrap_or_else(|| body.to_string())
}

/// Maps the backend's `transaction_status` onto the gateway's status vocabulary.
pub fn translate_transaction_status(status: &str) -> &'static str {
    match status.to_ascii_uppercase().as_str() {
        "SUCCESS" | "SETTLEMENT" | "PAID" => "Paid",
        "EXPIRED" | "EXPIRE" => "Expired",
        _ => "Pending",
    }
}
