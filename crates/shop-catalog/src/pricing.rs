//! Amount Calculator
//!
//! Sums the price components posted by the browser into one order amount.
//! Components are parsed as decimals and summed exactly; only the final
//! total is truncated toward zero, so `10.00 + 12.99` gives `22`.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::{Map, Value};

use crate::error::{Result, ValidationError};

/// Compute the order amount for a map of price components.
///
/// Values may be JSON strings (`"12.99"`) or JSON numbers (`12.99`). An empty
/// map yields `0`.
pub fn calculate_order_amount(prices: &Map<String, Value>) -> Result<i64> {
    let mut total = Decimal::ZERO;

    for (key, value) in prices {
        let price = parse_price(key, value)?;
        total = total
            .checked_add(price)
            .ok_or(ValidationError::AmountOverflow)?;
    }

    let amount = total.trunc().to_i64().ok_or(ValidationError::AmountOverflow)?;

    tracing::debug!(components = prices.len(), %total, amount, "Calculated order amount");

    Ok(amount)
}

/// Minor units as a two-place decimal for display (`2300` → `23.00`)
pub fn major_units(amount: i64) -> Decimal {
    Decimal::new(amount, 2)
}

fn parse_price(key: &str, value: &Value) -> Result<Decimal> {
    let invalid = || ValidationError::InvalidPrice {
        key: key.to_string(),
        value: value.to_string(),
    };

    let negative = |raw: String| ValidationError::NegativePrice {
        key: key.to_string(),
        value: raw,
    };

    let price = match value {
        Value::String(s) => parse_decimal(s.trim()).ok_or_else(invalid)?,
        Value::Number(n) => match parse_decimal(&n.to_string()) {
            Some(price) => price,
            // outside Decimal's range, e.g. 1e300 or 1e-300
            None => match n.as_f64() {
                Some(f) if f < 0.0 => return Err(negative(n.to_string())),
                Some(f) if f < 1.0 => Decimal::ZERO,
                _ => return Err(ValidationError::AmountOverflow),
            },
        },
        _ => return Err(invalid()),
    };

    if price < Decimal::ZERO {
        return Err(negative(price.to_string()));
    }

    Ok(price)
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn amount(value: Value) -> Result<i64> {
        calculate_order_amount(value.as_object().unwrap())
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        assert_eq!(amount(json!({ "a": "10.00", "b": "12.99" })), Ok(22));
        assert_eq!(amount(json!({ "x": "23.00" })), Ok(23));
        assert_eq!(amount(json!({ "x": "0.999" })), Ok(0));
    }

    #[test]
    fn test_major_units() {
        assert_eq!(major_units(2300).to_string(), "23.00");
        assert_eq!(major_units(2505).to_string(), "25.05");
        assert_eq!(major_units(7).to_string(), "0.07");
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(amount(json!({})), Ok(0));
    }

    #[test]
    fn test_numbers_and_strings() {
        assert_eq!(amount(json!({ "amount": 2300 })), Ok(2300));
        assert_eq!(amount(json!({ "amount": "2300" })), Ok(2300));
        assert_eq!(amount(json!({ "a": 1.5, "b": " 2.5 " })), Ok(4));
        assert_eq!(amount(json!({ "a": "1e3" })), Ok(1000));
    }

    #[test]
    fn test_exact_decimal_sum() {
        // summed as f64 in this order the total is 0.9999999999999999
        let prices = json!({ "a": "0.7", "b": "0.1", "c": "0.2" });
        assert_eq!(amount(prices), Ok(1));
        assert_eq!(dec!(0.7) + dec!(0.1) + dec!(0.2), Decimal::ONE);
    }

    #[test]
    fn test_non_numeric_rejected() {
        let err = amount(json!({ "a": "abc" })).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidPrice {
                key: "a".into(),
                value: "\"abc\"".into(),
            }
        );

        assert!(amount(json!({ "a": "" })).is_err());
        assert!(amount(json!({ "a": null })).is_err());
        assert!(amount(json!({ "a": true })).is_err());
        assert!(amount(json!({ "a": ["1"] })).is_err());
    }

    #[test]
    fn test_negative_rejected() {
        let err = amount(json!({ "a": "5", "b": "-1" })).unwrap_err();
        assert!(matches!(err, ValidationError::NegativePrice { ref key, .. } if key == "b"));
    }

    #[test]
    fn test_out_of_range_numbers() {
        assert_eq!(
            amount(json!({ "a": 1e300 })),
            Err(ValidationError::AmountOverflow)
        );
        assert!(matches!(
            amount(json!({ "a": -1e300 })),
            Err(ValidationError::NegativePrice { .. })
        ));
        assert_eq!(amount(json!({ "a": 1e-300, "b": 5 })), Ok(5));
        assert!(matches!(
            amount(json!({ "a": "1e300" })),
            Err(ValidationError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_overflow_rejected() {
        let huge = "50000000000000000000000000000";
        assert_eq!(
            amount(json!({ "a": huge, "b": huge })),
            Err(ValidationError::AmountOverflow)
        );
        assert_eq!(
            amount(json!({ "a": "99999999999999999999" })),
            Err(ValidationError::AmountOverflow)
        );
    }
}
