//! Currency text codec for the bill splitter.
//!
//! Converts between the Brazilian display convention (`"R$ 1.234,56"`) and
//! [`MonetaryAmount`]. Formatting is a plain character-level algorithm and never
//! consults a locale database, so the output is identical on every platform.
//!
//! ## Parsing rules
//!
//! - Surrounding whitespace and a leading currency symbol are dropped
//! - `.` is a grouping separator and is removed
//! - `,` is the decimal separator
//! - Empty input means "no amount entered" and parses as zero
//! - Anything that is not a finite, non-negative number is an [`CurrencyError::InvalidAmount`]
//!
//! `parse(format(x)) == x.rounded()` holds for every amount, which lets the PDF
//! export re-read the strings the page displayed without recomputing the split.

use shared::{CurrencyConfig, MonetaryAmount};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurrencyError {
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),
}

/// Parses and formats amounts using the configured currency conventions
#[derive(Debug, Clone)]
pub struct CurrencyCodec {
    config: CurrencyConfig,
}

impl CurrencyCodec {
    pub fn new() -> Self {
        Self::with_config(CurrencyConfig::default())
    }

    pub fn with_config(config: CurrencyConfig) -> Self {
        Self { config }
    }

    /// Parse user or form text into an amount
    pub fn parse(&self, text: &str) -> Result<MonetaryAmount, CurrencyError> {
        let trimmed = text.trim();
        let without_symbol = trimmed
            .strip_prefix(self.config.currency_symbol.as_str())
            .unwrap_or(trimmed)
            .trim();

        let normalized: String = without_symbol
            .chars()
            .filter(|c| *c != self.config.grouping_separator)
            .map(|c| if c == self.config.decimal_separator { '.' } else { c })
            .collect();

        if normalized.is_empty() {
            return Ok(MonetaryAmount::zero());
        }

        normalized
            .parse::<f64>()
            .ok()
            .and_then(MonetaryAmount::new)
            .ok_or_else(|| CurrencyError::InvalidAmount(text.to_string()))
    }

    /// Format an amount as `"R$ 1.234,56"`
    pub fn format(&self, amount: MonetaryAmount) -> String {
        let fixed = format!("{:.2}", amount.rounded().value());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        format!(
            "{} {}{}{}",
            self.config.currency_symbol,
            self.group_digits(whole),
            self.config.decimal_separator,
            fraction
        )
    }

    /// Insert the grouping separator every three digits from the right
    fn group_digits(&self, digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.config.grouping_separator);
            }
            grouped.push(c);
        }
        grouped
    }
}

impl Default for CurrencyCodec {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(value: f64) -> MonetaryAmount {
        MonetaryAmount::new(value).unwrap()
    }

    #[test]
    fn test_parse_empty_is_zero() {
        let codec = CurrencyCodec::new();
        assert_eq!(codec.parse("").unwrap(), MonetaryAmount::zero());
        assert_eq!(codec.parse("   ").unwrap(), MonetaryAmount::zero());
        assert_eq!(codec.parse("R$").unwrap(), MonetaryAmount::zero());
    }

    #[test]
    fn test_parse_formatted_zero() {
        let codec = CurrencyCodec::new();
        assert_eq!(codec.parse("R$ 0,00").unwrap(), MonetaryAmount::zero());
    }

    #[test]
    fn test_parse_grouping_and_decimal_comma() {
        let codec = CurrencyCodec::new();
        assert_eq!(codec.parse("1.234,56").unwrap(), amount(1234.56));
        assert_eq!(codec.parse("R$ 1.234,56").unwrap(), amount(1234.56));
        assert_eq!(codec.parse(" R$1.234.567,8 ").unwrap(), amount(1234567.8));
        assert_eq!(codec.parse("300,00").unwrap(), amount(300.0));
        assert_eq!(codec.parse("42").unwrap(), amount(42.0));
    }

    #[test]
    fn test_parse_accepts_no_break_space() {
        let codec = CurrencyCodec::new();
        assert_eq!(codec.parse("R$\u{a0}1.234,56").unwrap(), amount(1234.56));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let codec = CurrencyCodec::new();
        assert_eq!(
            codec.parse("abc"),
            Err(CurrencyError::InvalidAmount("abc".to_string()))
        );
        assert!(codec.parse("12,34,56").is_err());
        assert!(codec.parse("US$ 10,00").is_err());
    }

    #[test]
    fn test_parse_rejects_negative_and_non_finite() {
        let codec = CurrencyCodec::new();
        assert!(codec.parse("-5,00").is_err());
        assert!(codec.parse("R$ -0,01").is_err());
        assert!(codec.parse("inf").is_err());
        assert!(codec.parse("NaN").is_err());
    }

    #[test]
    fn test_parse_negative_zero_is_zero() {
        let codec = CurrencyCodec::new();
        let parsed = codec.parse("-0").unwrap();
        assert!(parsed.is_zero());
        assert!(parsed.value().is_sign_positive());
    }

    #[test]
    fn test_format() {
        let codec = CurrencyCodec::new();
        assert_eq!(codec.format(amount(1234.56)), "R$ 1.234,56");
        assert_eq!(codec.format(amount(1234.5)), "R$ 1.234,50");
        assert_eq!(codec.format(MonetaryAmount::zero()), "R$ 0,00");
        assert_eq!(codec.format(amount(0.05)), "R$ 0,05");
        assert_eq!(codec.format(amount(999.999)), "R$ 1.000,00");
        assert_eq!(codec.format(amount(1234567.891)), "R$ 1.234.567,89");
        assert_eq!(codec.format(amount(100.0 / 3.0)), "R$ 33,33");
    }

    #[test]
    fn test_group_digits() {
        let codec = CurrencyCodec::new();
        assert_eq!(codec.group_digits("0"), "0");
        assert_eq!(codec.group_digits("999"), "999");
        assert_eq!(codec.group_digits("1000"), "1.000");
        assert_eq!(codec.group_digits("123456"), "123.456");
        assert_eq!(codec.group_digits("1234567"), "1.234.567");
    }

    #[test]
    fn test_format_then_parse_matches_rounded_amount() {
        let codec = CurrencyCodec::new();
        let samples = [
            0.0,
            0.004,
            0.005,
            1.0 / 3.0,
            66.666_666,
            1234.56,
            1234.5,
            98_765.432_1,
            12_345_678.9,
        ];
        for value in samples {
            let original = amount(value);
            let parsed = codec.parse(&codec.format(original)).unwrap();
            assert_eq!(parsed, original.rounded(), "value {}", value);
        }
    }

    #[test]
    fn test_format_large_amounts() {
        let codec = CurrencyCodec::new();
        let parsed = codec.parse("100000000000000000000").unwrap();
        assert_eq!(parsed.value(), 1.0e20);
        assert_eq!(codec.format(parsed), "R$ 100.000.000.000.000.000.000,00");
        assert_eq!(codec.parse(&codec.format(parsed)).unwrap().value(), 1.0e20);

        assert_eq!(codec.format(amount(2.0e17)), "R$ 200.000.000.000.000.000,00");
    }

    #[test]
    fn test_format_then_parse_keeps_extreme_amounts() {
        let codec = CurrencyCodec::new();
        for value in [1.0e17 + 64.0, 1.0e20, 3.5e250, f64::MAX] {
            let formatted = codec.format(amount(value));
            assert!(formatted.ends_with(",00"), "{}", formatted);
            assert_eq!(codec.parse(&formatted).unwrap().value(), value);
        }
    }

    #[test]
    fn test_format_is_idempotent_through_parse() {
        let codec = CurrencyCodec::new();
        let first = codec.format(amount(200.0 / 3.0));
        let second = codec.format(codec.parse(&first).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_config() {
        let codec = CurrencyCodec::with_config(CurrencyConfig {
            currency_symbol: "$".to_string(),
            grouping_separator: ',',
            decimal_separator: '.',
        });
        assert_eq!(codec.format(amount(1234.5)), "$ 1,234.50");
        assert_eq!(codec.parse("$1,234.50").unwrap(), amount(1234.5));
    }
}
