//! Money types for API boundary enforcement
//!
//! All monetary values cross the API as JSON strings and are exact
//! fixed-point decimals with at most two fractional digits. Binary floating
//! point never appears anywhere in the pipeline.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Monetary amounts carry at most two fractional digits.
pub const AMOUNT_SCALE: u32 = 2;

/// Format-validated monetary amount.
///
/// Validation happens during deserialization:
/// - Only JSON strings are accepted (numbers would bypass format control)
/// - Rejects `.5` (must be `0.5`) and `5.` (must be `5.0` or `5`)
/// - Rejects scientific notation and a leading `+`
/// - Rejects negative values
/// - Rejects more than two fractional digits — never silently rounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount(Decimal);

impl Amount {
    /// Get the inner Decimal value
    pub fn inner(self) -> Decimal {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Create from Decimal (for testing)
    #[cfg(test)]
    pub fn from_decimal(d: Decimal) -> Self {
        Self(d)
    }
}

impl std::ops::Deref for Amount {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let s = String::deserialize(deserializer)?;

        if s.is_empty() {
            return Err(D::Error::custom("Amount cannot be empty"));
        }
        if s.starts_with('.') {
            return Err(D::Error::custom("Invalid format: use 0.5 not .5"));
        }
        if s.ends_with('.') {
            return Err(D::Error::custom("Invalid format: use 5.0 not 5."));
        }
        if s.contains('e') || s.contains('E') {
            return Err(D::Error::custom(
                "Invalid format: scientific notation not allowed",
            ));
        }
        if s.starts_with('+') {
            return Err(D::Error::custom("Invalid format: + prefix not allowed"));
        }

        let d = Decimal::from_str(&s)
            .map_err(|e| D::Error::custom(format!("Invalid decimal: {}", e)))?;

        if d.is_sign_negative() {
            return Err(D::Error::custom("Amount cannot be negative"));
        }
        if d.scale() > AMOUNT_SCALE {
            return Err(D::Error::custom(
                "Amount cannot have more than 2 decimal places",
            ));
        }

        Ok(Amount(d))
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&format_amount(self.0))
    }
}

/// Render a balance or amount for an API response: exactly two fractional
/// digits, no exponent.
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_valid_string() {
        let a: Amount = serde_json::from_str(r#""1.5""#).unwrap();
        assert_eq!(*a, Decimal::from_str("1.5").unwrap());

        let a: Amount = serde_json::from_str(r#""500.00""#).unwrap();
        assert_eq!(*a, Decimal::from_str("500.00").unwrap());

        let a: Amount = serde_json::from_str(r#""0""#).unwrap();
        assert!(a.is_zero());
    }

    #[test]
    fn test_amount_rejects_json_number() {
        let result: Result<Amount, _> = serde_json::from_str("1.5");
        assert!(result.is_err());
    }

    #[test]
    fn test_amount_rejects_dot_prefix() {
        let result: Result<Amount, _> = serde_json::from_str(r#"".5""#);
        assert!(result.unwrap_err().to_string().contains("use 0.5 not .5"));
    }

    #[test]
    fn test_amount_rejects_dot_suffix() {
        let result: Result<Amount, _> = serde_json::from_str(r#""5.""#);
        assert!(result.unwrap_err().to_string().contains("use 5.0 not 5."));
    }

    #[test]
    fn test_amount_rejects_scientific_notation() {
        let result: Result<Amount, _> = serde_json::from_str(r#""1.5e8""#);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("scientific notation")
        );
    }

    #[test]
    fn test_amount_rejects_negative() {
        let result: Result<Amount, _> = serde_json::from_str(r#""-1.50""#);
        assert!(result.unwrap_err().to_string().contains("cannot be negative"));
    }

    #[test]
    fn test_amount_rejects_empty() {
        let result: Result<Amount, _> = serde_json::from_str(r#""""#);
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_amount_rejects_three_decimal_places() {
        // Sub-cent precision is rejected, not rounded.
        let result: Result<Amount, _> = serde_json::from_str(r#""1.005""#);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("more than 2 decimal places")
        );
    }

    #[test]
    fn test_amount_serializes_with_two_decimals() {
        let a = Amount::from_decimal(Decimal::from_str("500.5").unwrap());
        assert_eq!(serde_json::to_string(&a).unwrap(), r#""500.50""#);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Decimal::from_str("1000").unwrap()), "1000.00");
        assert_eq!(format_amount(Decimal::from_str("0.5").unwrap()), "0.50");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }
}
