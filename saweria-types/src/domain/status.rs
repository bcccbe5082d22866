//! Payment status classification.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status of a QR payment as far as the gateway is concerned.
///
/// Provider status strings pass through to the response unchanged; this enum only
/// decides which symbol accompanies them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Expired,
}

impl PaymentStatus {
    /// Classifies a provider status string. Only the exact strings `"Paid"` and
    /// `"Expired"` are recognized; everything else is pending.
    pub fn classify(status: &str) -> Self {
        match status {
            "Paid" => Self::Paid,
            "Expired" => Self::Expired,
            _ => Self::Pending,
        }
    }

    /// Canonical provider spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Expired => "Expired",
        }
    }

    /// Human-readable status with its symbol.
    pub fn symbolic(&self) -> &'static str {
        match self {
            Self::Pending => "⏳ Pending",
            Self::Paid => "✅ Paid",
            Self::Expired => "⛔ Expired",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_exact_matches() {
        assert_eq!(PaymentStatus::classify("Paid"), PaymentStatus::Paid);
        assert_eq!(PaymentStatus::classify("Expired"), PaymentStatus::Expired);
        assert_eq!(PaymentStatus::classify("Pending"), PaymentStatus::Pending);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(PaymentStatus::classify("paid"), PaymentStatus::Pending);
        assert_eq!(PaymentStatus::classify("EXPIRED"), PaymentStatus::Pending);
        assert_eq!(PaymentStatus::classify(""), PaymentStatus::Pending);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(PaymentStatus::Paid.symbolic(), "✅ Paid");
        assert_eq!(PaymentStatus::Expired.symbolic(), "⛔ Expired");
        assert_eq!(PaymentStatus::Pending.symbolic(), "⏳ Pending");
    }
}
