//! batch-pricer - Turns a pasted price list into a sectioned catalog with resale tiers.
//!
//! The engine in [`catalog`] classifies each line as a section header or a
//! priced product, extracts the trailing price and derives the resale tiers
//! from a caller-supplied exchange rate.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod format;

pub use catalog::{process, Catalog, Currency, ExchangeRate, FailedLine, Parser, ProductRecord};
pub use config::Config;
