//! Bill splitting domain logic.
//!
//! The household splits its bills with a fixed rule:
//!
//! | Bill  | Iara (A) | Rodrigo (B) |
//! |-------|----------|-------------|
//! | Light | 1/3      | 2/3         |
//! | Water | 1/2      | 1/2         |
//!
//! [`split`] applies the rule to raw amounts. [`BillSplitService`] wraps it with the
//! currency codec so the REST layer can go straight from form text to display
//! strings. Totals are always summed from the unrounded shares.

use shared::{BillInputs, BillShares, FormattedShares, MonetaryAmount};
use tracing::{debug, warn};

use super::currency::{CurrencyCodec, CurrencyError};

/// Apply the fixed split rule. Total over any valid input, no side effects.
///
/// Every share stays finite; only a total larger than `f64::MAX` saturates.
pub fn split(inputs: BillInputs) -> BillShares {
    let light = inputs.light_amount.value();
    let water = inputs.water_amount.value();

    // Divide first: `light * 2.0` overflows for light above f64::MAX / 2
    let light_share_a = light / 3.0;
    let water_share_a = water / 2.0;
    let light_share_b = light / 3.0 * 2.0;
    let water_share_b = water / 2.0;

    BillShares {
        light_share_a: MonetaryAmount::saturating(light_share_a),
        water_share_a: MonetaryAmount::saturating(water_share_a),
        total_a: MonetaryAmount::saturating(light_share_a + water_share_a),
        light_share_b: MonetaryAmount::saturating(light_share_b),
        water_share_b: MonetaryAmount::saturating(water_share_b),
        total_b: MonetaryAmount::saturating(light_share_b + water_share_b),
    }
}

/// Which bill a rejected input belonged to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillField {
    Light,
    Water,
}

impl BillField {
    /// Label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            BillField::Light => "Conta de luz",
            BillField::Water => "Conta de água",
        }
    }
}

/// An input that could not be parsed and was counted as zero
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedInput {
    pub field: BillField,
    pub error: CurrencyError,
}

/// Result of splitting the bills typed into the form
#[derive(Debug, Clone, PartialEq)]
pub struct SplitOutcome {
    pub inputs: BillInputs,
    pub shares: BillShares,
    pub formatted: FormattedShares,
    pub rejected: Vec<RejectedInput>,
}

impl SplitOutcome {
    pub fn has_rejected_inputs(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// Bill split service used by the REST layer
#[derive(Debug, Clone)]
pub struct BillSplitService {
    codec: CurrencyCodec,
}

impl BillSplitService {
    pub fn new(codec: CurrencyCodec) -> Self {
        Self { codec }
    }

    /// Parse the raw form text, split and format.
    ///
    /// Invalid amounts never block the split: they count as zero and are
    /// reported in [`SplitOutcome::rejected`].
    pub fn split_from_text(&self, light_text: &str, water_text: &str) -> SplitOutcome {
        let mut rejected = Vec::new();
        let light_amount = self.parse_field(BillField::Light, light_text, &mut rejected);
        let water_amount = self.parse_field(BillField::Water, water_text, &mut rejected);

        let inputs = BillInputs {
            light_amount,
            water_amount,
        };
        let shares = split(inputs);
        debug!(
            "Split light {} and water {} into A={} B={}",
            light_amount, water_amount, shares.total_a, shares.total_b
        );

        SplitOutcome {
            inputs,
            shares,
            formatted: self.format_shares(&shares),
            rejected,
        }
    }

    fn parse_field(
        &self,
        field: BillField,
        text: &str,
        rejected: &mut Vec<RejectedInput>,
    ) -> MonetaryAmount {
        match self.codec.parse(text) {
            Ok(amount) => amount,
            Err(error) => {
                warn!("{} treated as zero: {}", field.label(), error);
                rejected.push(RejectedInput { field, error });
                MonetaryAmount::zero()
            }
        }
    }

    /// Format all six shares for display
    pub fn format_shares(&self, shares: &BillShares) -> FormattedShares {
        FormattedShares {
            luz_iara: self.codec.format(shares.light_share_a),
            agua_iara: self.codec.format(shares.water_share_a),
            total_iara: self.codec.format(shares.total_a),
            luz_rodrigo: self.codec.format(shares.light_share_b),
            agua_rodrigo: self.codec.format(shares.water_share_b),
            total_rodrigo: self.codec.format(shares.total_b),
        }
    }

    /// Message shown above the results when some input was counted as zero
    pub fn rejection_notice(&self, rejected: &[RejectedInput]) -> Option<String> {
        if rejected.is_empty() {
            return None;
        }
        let labels: Vec<&str> = rejected.iter().map(|r| r.field.label()).collect();
        Some(format!(
            "Valor inválido em {}. O valor foi considerado {}.",
            labels.join(" e "),
            self.codec.format(MonetaryAmount::zero())
        ))
    }
}

impl Default for BillSplitService {
    fn default() -> Self {
        Self::new(CurrencyCodec::new())
    }
}
