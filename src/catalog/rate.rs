//! Exchange rate validation for callers of the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reasons an exchange rate cannot be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RateError {
    #[error("exchange rate is required (set --rate, PRICER_RATE or exchange_rate in config)")]
    Missing,

    #[error("exchange rate is not a number: {0:?}")]
    NotNumeric(String),

    #[error("exchange rate must be a positive finite number, got {0}")]
    OutOfRange(f64),
}

/// Guaraníes per dollar, known to be positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ExchangeRate(f64);

impl ExchangeRate {
    /// Validates a numeric rate.
    pub fn new(value: f64) -> Result<Self, RateError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(RateError::OutOfRange(value))
        }
    }

    /// Validates an optional rate, as read from config or flags.
    pub fn require(value: Option<f64>) -> Result<Self, RateError> {
        value.map_or(Err(RateError::Missing), Self::new)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl FromStr for ExchangeRate {
    type Err = RateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RateError::Missing);
        }
        let value: f64 = s.parse().map_err(|_| RateError::NotNumeric(s.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<f64> for ExchangeRate {
    type Error = RateError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ExchangeRate> for f64 {
    fn from(rate: ExchangeRate) -> Self {
        rate.0
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
