//! Data models for priced products, failed lines, and sectioned catalogs.

use super::tiers::PriceTiers;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency a raw list price is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// US dollars, converted with the batch exchange rate.
    Dollar,
    /// Guaraníes, used as-is.
    Local,
}

impl Currency {
    /// Classifies a raw price from its currency marker.
    ///
    /// An explicit `$` always means dollars. Without a `gs` marker, amounts up
    /// to 3000 are taken as dollars and anything larger as local currency.
    pub fn detect(marker: &str, raw_price: u64) -> Self {
        let marker = marker.to_lowercase();
        if marker.contains('$') || (raw_price <= 3000 && !marker.contains("gs")) {
            Currency::Dollar
        } else {
            Currency::Local
        }
    }

    /// Display symbol used in front of an original price.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Dollar => "$",
            Currency::Local => "Gs",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Dollar => write!(f, "usd"),
            Currency::Local => write!(f, "gs"),
        }
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "usd" | "dollar" | "$" => Ok(Currency::Dollar),
            "gs" | "pyg" | "local" => Ok(Currency::Local),
            _ => Err(format!("Unknown currency: {}. Use: usd, gs", s)),
        }
    }
}

/// A priced product line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Uppercased product name
    pub name: String,
    /// Currency symbol plus the grouped raw price, e.g. `Gs 15.000`
    pub original_price_display: String,
    /// Currency the raw price was read as
    pub currency: Currency,
    /// Validated price as written in the list
    pub raw_price: u64,
    /// Derived resale prices in local currency
    #[serde(flatten)]
    pub tiers: PriceTiers,
}

impl ProductRecord {
    /// Builds a record from an extracted price.
    pub fn new(name: &str, raw_price: u64, currency: Currency, tiers: PriceTiers) -> Self {
        Self {
            name: name.to_uppercase(),
            original_price_display: format!(
                "{} {}",
                currency.symbol(),
                group_thousands(raw_price)
            ),
            currency,
            raw_price,
            tiers,
        }
    }
}

/// Why a candidate line produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// No trailing price token.
    UnparsablePriceLine,
    /// Price token unparseable or below the plausible minimum.
    InvalidPriceValue,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::UnparsablePriceLine => write!(f, "no trailing price"),
            FailureReason::InvalidPriceValue => write!(f, "invalid price"),
        }
    }
}

/// A candidate line that could not be priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedLine {
    /// Uppercased line text with bullets stripped
    pub name: String,
    /// Section active when the line was read (empty before any header)
    pub section: String,
    pub reason: FailureReason,
}

/// A named group of products, in the order they were listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub products: Vec<ProductRecord>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), products: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Result of one engine run: sections in first-seen order plus failed lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub sections: Vec<Section>,
    pub failed: Vec<FailedLine>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the section with the given name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Returns the named section, opening it at the end if unseen.
    pub fn open_section(&mut self, name: &str) -> &mut Section {
        let idx = match self.sections.iter().position(|s| s.name == name) {
            Some(idx) => idx,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[idx]
    }

    /// Iterates over every record with the name of its section.
    pub fn records(&self) -> impl Iterator<Item = (&str, &ProductRecord)> {
        self.sections
            .iter()
            .flat_map(|s| s.products.iter().map(move |p| (s.name.as_str(), p)))
    }

    /// Total number of priced products.
    pub fn product_count(&self) -> usize {
        self.sections.iter().map(|s| s.products.len()).sum()
    }

    /// Returns true if no section was opened and no line failed.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.failed.is_empty()
    }
}

/// Groups an integer the way es-ES locales print it.
///
/// Dots separate thousands, but only once the integer has five or more
/// digits: `1500` stays `1500`, `15000` becomes `15.000`.
pub fn group_thousands(value: impl Into<i128>) -> String {
    let value: i128 = value.into();
    let digits = value.unsigned_abs().to_string();
    let sign = if value < 0 { "-" } else { "" };

    if digits.len() < 5 {
        return format!("{}{}", sign, digits);
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("{}{}", sign, grouped)
}
