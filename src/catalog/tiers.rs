//! Resale price tiers derived from a product's base value.
//!
//! All markups and card fees are fixed business constants.

use serde::{Deserialize, Serialize};

/// Markup applied to the base value to get the cost.
pub const COST_MARKUP: f64 = 1.03;
/// Markup for cash and card sales.
pub const RETAIL_MARKUP: f64 = 1.11;
/// Fee withheld by the card processor.
pub const CARD_FEE: f64 = 0.0576;
/// Total markups for 6, 12 and 18 monthly installments.
pub const INSTALLMENTS_6_MARKUP: f64 = 1.35;
pub const INSTALLMENTS_12_MARKUP: f64 = 1.65;
pub const INSTALLMENTS_18_MARKUP: f64 = 1.80;
/// Markup and financing fee for the special credit plan.
pub const SPECIAL_PLAN_MARKUP: f64 = 1.15;
pub const SPECIAL_PLAN_FEE: f64 = 0.0777;

/// Granularity every sale tier is rounded up to.
pub const ROUNDING_STEP: f64 = 1000.0;

/// Largest cost tiers are computed for, 2^53 - 1.
pub const MAX_COST: i64 = (1 << 53) - 1;

/// The priced tiers of one product, in local currency.
///
/// Installment tiers are the amount of each monthly payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTiers {
    /// Base value plus cost markup, to the nearest unit
    pub cost: i64,
    pub cash: i64,
    pub card: i64,
    pub installments_6: i64,
    pub installments_12: i64,
    pub installments_18: i64,
    pub special_plan: i64,
}

impl PriceTiers {
    /// Computes all tiers from a base value already in local currency.
    ///
    /// A NaN base (from a NaN exchange rate) saturates every tier to zero.
    pub fn from_base(base: f64) -> Self {
        Self::from_cost((base * COST_MARKUP).round() as i64)
    }

    /// Like [`from_base`](Self::from_base), but returns `None` unless the
    /// cost lands in `0..=MAX_COST`.
    ///
    /// Rejects NaN and infinite bases, and bases whose tiers would no longer
    /// be exact integers.
    pub fn checked_from_base(base: f64) -> Option<Self> {
        let cost = (base * COST_MARKUP).round();
        (0.0..=MAX_COST as f64).contains(&cost).then(|| Self::from_cost(cost as i64))
    }

    /// Computes the sale tiers for a known cost.
    pub fn from_cost(cost: i64) -> Self {
        let c = cost as f64;
        Self {
            cost,
            cash: round_up(c * RETAIL_MARKUP),
            card: round_up(c * RETAIL_MARKUP / (1.0 - CARD_FEE)),
            installments_6: round_up(c * INSTALLMENTS_6_MARKUP / 6.0),
            installments_12: round_up(c * INSTALLMENTS_12_MARKUP / 12.0),
            installments_18: round_up(c * INSTALLMENTS_18_MARKUP / 18.0),
            special_plan: round_up(c * SPECIAL_PLAN_MARKUP / (1.0 - SPECIAL_PLAN_FEE)),
        }
    }
}

/// Rounds up to the next multiple of [`ROUNDING_STEP`].
fn round_up(value: f64) -> i64 {
    ((value / ROUNDING_STEP).ceil() * ROUNDING_STEP) as i64
}
