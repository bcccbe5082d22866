//! Payment amount value object.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A positive nominal in whole rupiah.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentAmount(u64);

impl PaymentAmount {
    /// Creates an amount, rejecting zero.
    pub fn new(value: u64) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::NonPositiveAmount);
        }
        Ok(Self(value))
    }

    /// Parses request input with integer-prefix semantics.
    ///
    /// Leading whitespace and an optional sign are allowed; parsing stops at the first
    /// non-digit, so `"1500rb"` is 1500 and `"12.9"` is 12. Input without leading digits
    /// is invalid, and so is anything that is not strictly positive.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let s = input.trim_start();
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let end = digits
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(digits.len());
        if end == 0 {
            return Err(DomainError::InvalidAmount(input.to_string()));
        }

        let value: u64 = digits[..end]
            .parse()
            .map_err(|_| DomainError::InvalidAmount(input.to_string()))?;

        if negative && value > 0 {
            return Err(DomainError::NonPositiveAmount);
        }
        Self::new(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PaymentAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
