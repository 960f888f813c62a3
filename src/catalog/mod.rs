//! Price list engine: line classification, price extraction, and tier pricing.

pub mod classifier;
pub mod extractor;
pub mod models;
pub mod parser;
pub mod patterns;
pub mod rate;
pub mod tiers;

pub use classifier::{classify, LineKind};
pub use extractor::{extract, ExtractedPrice};
pub use models::{Catalog, Currency, FailedLine, FailureReason, ProductRecord, Section};
pub use parser::{process, Parser};
pub use rate::{ExchangeRate, RateError};
pub use tiers::PriceTiers;
