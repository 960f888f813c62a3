//! Trailing price extraction and validation for candidate lines.

use super::models::{Currency, FailureReason};
use super::patterns::{is_space, PRICE_TAIL};

/// Prices below this are treated as stray numbers, not prices.
pub const MIN_PRICE: u64 = 10;

/// Largest price accepted, 2^53 - 1. Above it the value no longer converts
/// to `f64` exactly.
pub const MAX_PRICE: u64 = (1 << 53) - 1;

/// A validated price pulled from the end of a candidate line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPrice {
    /// Text before the price, trimmed
    pub name: String,
    /// Price as written, separators removed
    pub raw_price: u64,
    /// Currency marker following the price, if any (`$`, `Gs`, ...)
    pub marker: String,
    pub currency: Currency,
}

impl ExtractedPrice {
    /// Converts the raw price into local currency.
    ///
    /// The rate must be a positive number; callers validate it with
    /// [`ExchangeRate`](super::ExchangeRate). A NaN rate taints the result,
    /// which [`PriceTiers::checked_from_base`](super::PriceTiers::checked_from_base) rejects.
    pub fn base_value(&self, rate: f64) -> f64 {
        match self.currency {
            Currency::Dollar => self.raw_price as f64 * rate,
            Currency::Local => self.raw_price as f64,
        }
    }
}

/// Extracts the product name and price from a candidate line.
pub fn extract(line: &str) -> Result<ExtractedPrice, FailureReason> {
    let caps = PRICE_TAIL.captures(line).ok_or(FailureReason::UnparsablePriceLine)?;

    let digits: String = caps["digits"]
        .replace('.', "")
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();

    let raw_price = match digits.parse::<u64>() {
        Ok(value) if (MIN_PRICE..=MAX_PRICE).contains(&value) => value,
        _ => return Err(FailureReason::InvalidPriceValue),
    };

    let marker = caps.name("marker").map(|m| m.as_str().to_string()).unwrap_or_default();
    let currency = Currency::detect(&marker, raw_price);

    Ok(ExtractedPrice {
        name: caps["name"].trim_matches(is_space).to_string(),
        raw_price,
        marker,
        currency,
    })
}
