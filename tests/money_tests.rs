// Copyright (c) 2025 - Cowboy AI, LLC.

//! Money conversion and arithmetic properties.

use household_domain::{Money, RateTable};
use proptest::prelude::*;

const CODES: [&str; 5] = ["USD", "GBP", "EUR", "CAN", "XYZ"];

fn currency() -> impl Strategy<Value = &'static str> {
    prop::sample::select(CODES.to_vec())
}

proptest! {
    #[test]
    fn convert_round_trip_is_within_one_unit(
        amount in -1_000_000i64..1_000_000,
        from in currency(),
        to in currency(),
    ) {
        let original = Money::new(amount, from);
        let back = original.convert(to).convert(from);

        prop_assert_eq!(back.currency(), from);
        prop_assert!((back.amount() - amount).abs() <= 1, "{} -> {} -> {}", original, to, back);
    }

    #[test]
    fn add_same_currency_sums(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000, c in currency()) {
        prop_assert_eq!(Money::new(a, c).add(&Money::new(b, c)), Money::new(a + b, c));
    }

    #[test]
    fn add_result_always_takes_argument_currency(
        a in -1_000_000i64..1_000_000,
        b in -1_000_000i64..1_000_000,
        from in currency(),
        to in currency(),
    ) {
        let sum = Money::new(a, from).add(&Money::new(b, to));
        prop_assert_eq!(sum.currency(), to);
    }

    #[test]
    fn subtract_same_currency_is_argument_minus_receiver(
        a in -1_000_000i64..1_000_000,
        b in -1_000_000i64..1_000_000,
    ) {
        prop_assert_eq!(Money::new(a, "GBP").subtract(&Money::new(b, "GBP")), Money::new(b - a, "GBP"));
    }
}

#[test]
fn ten_usd_plus_five_usd() {
    assert_eq!(Money::new(10, "USD").add(&Money::new(5, "USD")), Money::new(15, "USD"));
}

#[test]
fn ten_usd_plus_five_eur_is_in_euros() {
    let sum = Money::new(10, "USD").add(&Money::new(5, "EUR"));
    assert_eq!(sum, Money::new(20, "EUR"));
}

#[test]
fn subtract_mixed_currency_converts_receiver_first() {
    // 100 CAN -> 80 USD -> 40 GBP; 100 GBP - 40 GBP
    let diff = Money::new(100, "CAN").subtract(&Money::new(100, "GBP"));
    assert_eq!(diff, Money::new(60, "GBP"));
}

#[test]
fn loaded_rate_table_converts() {
    let rates = RateTable::from_json(r#"{"USD": 1.0, "MXN": 17.0}"#).unwrap();
    assert_eq!(Money::new(3, "USD").convert_with("MXN", &rates), Money::new(51, "MXN"));
    // the fixed table does not know MXN
    assert_eq!(Money::new(3, "USD").convert("MXN"), Money::new(3, "MXN"));
}
