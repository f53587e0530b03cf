//! Money and currency value objects.
//!
//! Amounts arrive at the API boundary as positive integer minor units
//! (cents) and are stored in major units as exact decimals. The division
//! by 100 happens exactly once, here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Lowercase three-letter currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Creates a currency code, normalizing to lowercase.
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into().to_lowercase();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::invalid_format(
                "currency",
                "expected a three-letter code",
            ));
        }
        Ok(Self(code))
    }

    /// US dollars, the storefront default.
    pub fn usd() -> Self {
        Self("usd".to_string())
    }

    /// Returns the inner code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::usd()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A currency amount in major units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a Money value from integer minor units (e.g. cents).
    ///
    /// The amount must be strictly positive; a zero or negative purchase
    /// amount is a caller error.
    pub fn from_minor_units(minor: i64, currency: Currency) -> Result<Self, ValidationError> {
        if minor <= 0 {
            return Err(ValidationError::invalid_format(
                "amount",
                "amount must be a positive number of minor units",
            ));
        }
        Ok(Self {
            amount: Decimal::new(minor, 2),
            currency,
        })
    }

    /// Creates a Money value from a major-unit decimal, as read from storage.
    pub fn from_major_units(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// The amount in major units.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency code.
    pub fn currency(&self) -> &Currency {
        &self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
