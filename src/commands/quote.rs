//! Quote command: price tiers for a single amount.

use crate::catalog::extractor::{MAX_PRICE, MIN_PRICE};
use crate::catalog::{Currency, PriceTiers, ProductRecord};
use crate::config::Config;
use crate::format::Formatter;
use anyhow::Result;
use tracing::info;

/// Computes the tiers for one raw price.
pub struct QuoteCommand {
    config: Config,
}

impl QuoteCommand {
    /// Creates a new quote command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Quotes `amount` and returns formatted output.
    ///
    /// Without an explicit currency the amount is read the same way an
    /// unmarked list price is.
    pub fn execute(&self, amount: u64, currency: Option<Currency>) -> Result<String> {
        let record = self.quote(amount, currency)?;
        Ok(Formatter::new(self.config.format).format_record(&record))
    }

    /// Builds the priced record for `amount`.
    pub fn quote(&self, amount: u64, currency: Option<Currency>) -> Result<ProductRecord> {
        if amount < MIN_PRICE {
            anyhow::bail!("Price {} is below the minimum of {}", amount, MIN_PRICE);
        }
        if amount > MAX_PRICE {
            anyhow::bail!("Price {} is above the maximum of {}", amount, MAX_PRICE);
        }

        let currency = currency.unwrap_or_else(|| Currency::detect("", amount));
        let base = match currency {
            Currency::Dollar => amount as f64 * self.config.rate()?.value(),
            Currency::Local => amount as f64,
        };

        info!("Quoting {} {} (base {})", currency, amount, base);
        let tiers = PriceTiers::checked_from_base(base)
            .ok_or_else(|| anyhow::anyhow!("Price {} {} is too large to quote", amount, currency))?;
        Ok(ProductRecord::new("", amount, currency, tiers))
    }
}
