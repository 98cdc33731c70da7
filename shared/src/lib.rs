use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative, finite amount of money in the local currency.
///
/// Values are kept as `f64` so the share arithmetic runs on the raw amounts;
/// rounding to centavos only happens when the amount is formatted for display.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct MonetaryAmount(f64);

impl MonetaryAmount {
    /// Create an amount, rejecting negative, NaN and infinite values.
    /// A negative zero is normalized to `0.0`.
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() && value >= 0.0 {
            Some(Self(value + 0.0))
        } else {
            None
        }
    }

    /// Wrap the result of arithmetic on valid amounts.
    /// Results past `f64::MAX` saturate at the largest representable amount.
    pub fn saturating(value: f64) -> Self {
        debug_assert!(value >= 0.0, "amount arithmetic produced {}", value);
        Self(value.min(f64::MAX) + 0.0)
    }

    pub const fn zero() -> Self {
        Self(0.0)
    }

    pub const fn value(&self) -> f64 {
        self.0
    }

    /// The amount rounded to 2 decimal places, half away from zero.
    /// Amounts without a fractional part are returned as is.
    pub fn rounded(&self) -> Self {
        if self.0.fract() == 0.0 {
            return *self;
        }
        Self((self.0 * 100.0).round() / 100.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl TryFrom<f64> for MonetaryAmount {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("{} is not a valid amount", value))
    }
}

impl From<MonetaryAmount> for f64 {
    fn from(amount: MonetaryAmount) -> Self {
        amount.0
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// The two bill totals for one billing period
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BillInputs {
    /// Electricity bill total
    pub light_amount: MonetaryAmount,
    /// Water bill total
    pub water_amount: MonetaryAmount,
}

/// What each occupant owes. Occupant A is Iara, occupant B is Rodrigo.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BillShares {
    pub light_share_a: MonetaryAmount,
    pub water_share_a: MonetaryAmount,
    pub total_a: MonetaryAmount,
    pub light_share_b: MonetaryAmount,
    pub water_share_b: MonetaryAmount,
    pub total_b: MonetaryAmount,
}

/// The six shares rendered as display strings such as `"R$ 1.234,56"`.
///
/// Field names match the HTML form fields, so the same value is used to render
/// the page and to read the hidden inputs posted back for the PDF export.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormattedShares {
    pub luz_iara: String,
    pub agua_iara: String,
    pub total_iara: String,
    pub luz_rodrigo: String,
    pub agua_rodrigo: String,
    pub total_rodrigo: String,
}

impl FormattedShares {
    /// `(field name, value)` pairs in display order
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("luz_iara", self.luz_iara.as_str()),
            ("agua_iara", self.agua_iara.as_str()),
            ("total_iara", self.total_iara.as_str()),
            ("luz_rodrigo", self.luz_rodrigo.as_str()),
            ("agua_rodrigo", self.agua_rodrigo.as_str()),
            ("total_rodrigo", self.total_rodrigo.as_str()),
        ]
    }
}

/// Form posted to `/` with the raw bill amounts as typed by the user
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SplitBillRequest {
    /// Light bill, e.g. `"300,00"` or `"R$ 1.234,56"`
    #[serde(default)]
    pub luz: Option<String>,
    /// Water bill
    #[serde(default)]
    pub agua: Option<String>,
}

/// Form posted to `/download_pdf`: the six formatted shares echoed back as hidden inputs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExportPdfRequest {
    #[serde(default)]
    pub luz_iara: Option<String>,
    #[serde(default)]
    pub agua_iara: Option<String>,
    #[serde(default)]
    pub total_iara: Option<String>,
    #[serde(default)]
    pub luz_rodrigo: Option<String>,
    #[serde(default)]
    pub agua_rodrigo: Option<String>,
    #[serde(default)]
    pub total_rodrigo: Option<String>,
}

/// Display conventions for the local currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    pub currency_symbol: String,
    pub grouping_separator: char,
    pub decimal_separator: char,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "R$".to_string(),
            grouping_separator: '.',
            decimal_separator: ',',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monetary_amount_rejects_negative_and_non_finite() {
        assert!(MonetaryAmount::new(-0.01).is_none());
        assert!(MonetaryAmount::new(f64::NAN).is_none());
        assert!(MonetaryAmount::new(f64::INFINITY).is_none());
        assert_eq!(MonetaryAmount::new(12.5).map(|a| a.value()), Some(12.5));
    }

    #[test]
    fn test_monetary_amount_normalizes_negative_zero() {
        let amount = MonetaryAmount::new(-0.0).unwrap();
        assert!(amount.value().is_sign_positive());
        assert!(amount.is_zero());
    }

    #[test]
    fn test_saturating() {
        assert_eq!(MonetaryAmount::saturating(3.0).value(), 3.0);
        assert_eq!(MonetaryAmount::saturating(f64::INFINITY).value(), f64::MAX);
        assert_eq!(MonetaryAmount::saturating(f64::MAX).value(), f64::MAX);
    }

    #[test]
    fn test_rounding_to_cents() {
        let third = MonetaryAmount::new(100.0 / 3.0).unwrap();
        assert_eq!(third.rounded().value(), 33.33);
        assert_eq!(MonetaryAmount::new(0.125).unwrap().rounded().value(), 0.13);
        assert_eq!(MonetaryAmount::new(999.999).unwrap().rounded().value(), 1000.0);
    }

    #[test]
    fn test_rounding_keeps_large_amounts() {
        let large = MonetaryAmount::new(1.0e20).unwrap();
        assert_eq!(large.rounded().value(), 1.0e20);
        let max = MonetaryAmount::new(f64::MAX).unwrap();
        assert_eq!(max.rounded().value(), f64::MAX);
    }

    #[test]
    fn test_monetary_amount_serializes_as_number() {
        let inputs = BillInputs {
            light_amount: MonetaryAmount::new(300.0).unwrap(),
            water_amount: MonetaryAmount::new(100.5).unwrap(),
        };
        let json = serde_json::to_string(&inputs).unwrap();
        assert_eq!(json, r#"{"light_amount":300.0,"water_amount":100.5}"#);
    }

    #[test]
    fn test_monetary_amount_deserialization_checks_value() {
        let amount: MonetaryAmount = serde_json::from_str("12.5").unwrap();
        assert_eq!(amount.value(), 12.5);
        assert!(serde_json::from_str::<MonetaryAmount>("-5.0").is_err());

        let inputs: Result<BillInputs, _> =
            serde_json::from_str(r#"{"light_amount":-1.0,"water_amount":2.0}"#);
        assert!(inputs.is_err());
    }

    #[test]
    fn test_formatted_shares_fields_order() {
        let shares = FormattedShares {
            luz_iara: "a".to_string(),
            total_rodrigo: "f".to_string(),
            ..Default::default()
        };
        let fields = shares.fields();
        assert_eq!(fields[0], ("luz_iara", "a"));
        assert_eq!(fields[5], ("total_rodrigo", "f"));
        assert_eq!(fields[2].0, "total_iara");
    }
}
