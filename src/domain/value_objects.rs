// Copyright 2025 Cowboy AI, LLC.

//! Money value object and the rate tables used to convert it.
//!
//! Money is immutable, compared by value, and every arithmetic operation
//! returns a new value. Rates are expressed as "units of this currency per one
//! USD"; conversion always pivots through USD.

use std::collections::HashMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::errors::{DomainError, DomainResult};
use crate::formal_domain::{DomainConcept, ValueObject};

/// Rate applied to any currency code a table does not know.
pub const NEUTRAL_RATE: f64 = 1.0;

/// Source of conversion rates, keyed by currency code.
pub trait RateProvider {
    /// Units of `currency` equivalent to one USD, if known.
    fn rate(&self, currency: &str) -> Option<f64>;

    /// Rate for `currency`, falling back to [`NEUTRAL_RATE`] for unknown codes.
    fn rate_or_neutral(&self, currency: &str) -> f64 {
        self.rate(currency).unwrap_or_else(|| {
            trace!(currency, "unknown currency code, using neutral rate");
            NEUTRAL_RATE
        })
    }
}

/// The built-in rate table: USD 1.0, GBP 0.5, EUR 1.5, CAN 1.25.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedRates;

impl RateProvider for FixedRates {
    fn rate(&self, currency: &str) -> Option<f64> {
        match currency {
            "USD" => Some(1.0),
            "GBP" => Some(0.5),
            "EUR" => Some(1.5),
            "CAN" => Some(1.25),
            _ => None,
        }
    }
}

/// Caller-supplied rate table, typically loaded from JSON.
///
/// ```rust
/// use household_domain::{Money, RateTable};
///
/// let rates = RateTable::from_json(r#"{"USD": 1.0, "JPY": 150.0}"#).unwrap();
/// assert_eq!(Money::new(2, "USD").convert_with("JPY", &rates), Money::new(300, "JPY"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct RateTable {
    rates: HashMap<String, f64>,
}

impl RateTable {
    /// Build a table from `(code, rate)` pairs.
    pub fn new<I, S>(rates: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let table = Self {
            rates: rates.into_iter().map(|(c, r)| (c.into(), r)).collect(),
        };
        table.validate()?;
        Ok(table)
    }

    /// Parse a JSON object of `code -> rate`.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> DomainResult<()> {
        // a zero rate would divide by zero when pivoting through USD
        match self.rates.iter().find(|(_, r)| !(r.is_finite() && **r > 0.0)) {
            Some((code, rate)) => Err(DomainError::ValidationError(format!(
                "rate for {code} must be positive and finite, got {rate}"
            ))),
            None => Ok(()),
        }
    }
}

impl RateProvider for RateTable {
    fn rate(&self, currency: &str) -> Option<f64> {
        self.rates.get(currency).copied()
    }
}

/// Money as an immutable value object: amount in minor units + currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Money {
    amount: i64,
    currency: String,
}

impl Money {
    /// Create Money from minor units and a currency code
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Amount in minor units
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Currency code
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Convert into `target` using the built-in [`FixedRates`] table.
    pub fn convert(&self, target: &str) -> Money {
        self.convert_with(target, &FixedRates)
    }

    /// Convert into `target` using the given rates.
    ///
    /// The amount is pivoted through USD and rounded to the nearest minor
    /// unit, ties away from zero. Unknown codes convert at the neutral rate.
    pub fn convert_with<R: RateProvider + ?Sized>(&self, target: &str, rates: &R) -> Money {
        let rate_to_usd = 1.0 / rates.rate_or_neutral(&self.currency);
        let amount_usd = self.amount as f64 * rate_to_usd;
        let converted = (amount_usd * rates.rate_or_neutral(target)).round() as i64;
        trace!(
            amount = self.amount,
            from = %self.currency,
            to = target,
            converted,
            "converted money"
        );
        Money::new(converted, target)
    }

    /// Add `other` to this amount.
    ///
    /// With mismatched currencies `self` is converted into `other`'s currency
    /// and the result carries `other`'s currency.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Money) -> Money {
        if self.currency == other.currency {
            return Money::new(self.amount + other.amount, self.currency.clone());
        }
        let converted = self.convert(&other.currency);
        Money::new(converted.amount + other.amount, other.currency.clone())
    }

    /// Subtract this amount from `other`, i.e. `other - self`.
    ///
    /// With mismatched currencies `self` is converted into `other`'s currency
    /// and the result carries `other`'s currency.
    pub fn subtract(&self, other: &Money) -> Money {
        if self.currency == other.currency {
            return Money::new(other.amount - self.amount, self.currency.clone());
        }
        let converted = self.convert(&other.currency);
        Money::new(other.amount - converted.amount, other.currency.clone())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl DomainConcept for Money {}
impl ValueObject for Money {}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("USD", "GBP", 100, 50; "usd to gbp halves")]
    #[test_case("GBP", "USD", 50, 100; "gbp to usd doubles")]
    #[test_case("USD", "EUR", 100, 150; "usd to eur")]
    #[test_case("EUR", "CAN", 150, 125; "eur to can via usd")]
    #[test_case("USD", "CAN", 2, 3; "tie rounds away from zero")]
    #[test_case("USD", "CAN", -2, -3; "negative tie rounds away from zero")]
    #[test_case("USD", "XYZ", 42, 42; "unknown target is neutral")]
    #[test_case("XYZ", "GBP", 42, 21; "unknown source is neutral")]
    fn converts_with_fixed_rates(from: &str, to: &str, amount: i64, expected: i64) {
        let converted = Money::new(amount, from).convert(to);
        assert_eq!(converted, Money::new(expected, to));
    }

    #[test]
    fn convert_to_same_currency_is_identity() {
        let m = Money::new(1234, "EUR");
        assert_eq!(m.convert("EUR"), m);
    }

    #[test]
    fn add_same_currency_sums() {
        let sum = Money::new(10, "USD").add(&Money::new(5, "USD"));
        assert_eq!(sum, Money::new(15, "USD"));
    }

    #[test]
    fn add_mixed_currency_takes_argument_currency() {
        // 10 USD -> 15 EUR, + 5 EUR
        let sum = Money::new(10, "USD").add(&Money::new(5, "EUR"));
        assert_eq!(sum.currency(), "EUR");
        assert_eq!(sum.amount(), 20);
    }

    #[test]
    fn subtract_is_argument_minus_receiver() {
        let diff = Money::new(10, "USD").subtract(&Money::new(4, "USD"));
        assert_eq!(diff, Money::new(-6, "USD"));
    }

    #[test]
    fn subtract_mixed_currency_converts_receiver() {
        // 10 GBP -> 20 USD; 50 USD - 20 USD
        let diff = Money::new(10, "GBP").subtract(&Money::new(50, "USD"));
        assert_eq!(diff, Money::new(30, "USD"));
    }

    #[test]
    fn money_display() {
        assert_eq!(Money::new(-250, "CAN").to_string(), "-250 CAN");
    }

    #[test]
    fn money_serde_roundtrip() {
        let m = Money::new(12345, "EUR");
        let json = serde_json::to_string(&m).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }

    #[test]
    fn rate_table_overrides_and_falls_back() {
        let rates = RateTable::new([("USD", 1.0), ("GBP", 0.8)]).unwrap();

        assert_eq!(Money::new(100, "USD").convert_with("GBP", &rates).amount(), 80);
        // EUR is not in this table
        assert_eq!(Money::new(100, "USD").convert_with("EUR", &rates).amount(), 100);
    }

    #[test]
    fn rate_table_rejects_non_positive_rates() {
        let err = RateTable::from_json(r#"{"USD": 1.0, "ZWL": 0.0}"#).unwrap_err();
        assert!(err.is_validation_error());

        let err = RateTable::new([("ABC", -1.0)]).unwrap_err();
        assert!(err.is_validation_error());
    }

    #[test]
    fn rate_table_reports_malformed_json() {
        let err = RateTable::from_json("[1, 2").unwrap_err();
        assert!(matches!(err, DomainError::SerializationError(_)));
    }
}
