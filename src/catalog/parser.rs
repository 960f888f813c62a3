//! Turns a pasted price list into a sectioned, priced catalog.

use super::classifier::{classify, LineKind};
use super::extractor::extract;
use super::models::{Catalog, FailedLine, FailureReason, ProductRecord};
use super::rate::ExchangeRate;
use super::tiers::PriceTiers;
use tracing::{debug, trace};

/// Parser for price lists, bound to one exchange rate.
#[derive(Debug, Clone, Copy)]
pub struct Parser {
    rate: f64,
}

/// Accumulator threaded through one pass over the lines.
#[derive(Debug, Default)]
struct Partition {
    current: String,
    catalog: Catalog,
}

impl Parser {
    /// Creates a parser for a validated exchange rate.
    pub fn new(rate: ExchangeRate) -> Self {
        Self { rate: rate.value() }
    }

    /// Creates a parser without validating the rate.
    ///
    /// A NaN, infinite or non-positive rate is not rejected. Dollar prices
    /// then fail as invalid or get meaningless tiers.
    pub fn with_raw_rate(rate: f64) -> Self {
        Self { rate }
    }

    /// Returns the exchange rate dollar prices are converted with.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Parses the whole list.
    ///
    /// Every line is either dropped, opens a section, becomes a product in
    /// the active section, or is reported as failed.
    pub fn parse(&self, text: &str) -> Catalog {
        let partition = text
            .lines()
            .filter_map(classify)
            .fold(Partition::default(), |state, kind| self.step(state, kind));

        let catalog = partition.catalog;
        debug!(
            "Parsed {} products in {} sections ({} failed lines)",
            catalog.product_count(),
            catalog.sections.len(),
            catalog.failed.len()
        );
        catalog
    }

    fn step(&self, mut state: Partition, kind: LineKind) -> Partition {
        match kind {
            LineKind::Header(name) => {
                trace!("Section: {}", name);
                state.catalog.open_section(&name);
                state.current = name;
            }
            LineKind::Candidate(line) => match self.price_line(&line) {
                Ok(record) => {
                    trace!("Priced: {} -> {}", record.name, record.tiers.cost);
                    state.catalog.open_section(&state.current).products.push(record);
                }
                Err(reason) => {
                    debug!("Failed line in {:?} ({}): {}", state.current, reason, line);
                    state.catalog.failed.push(FailedLine {
                        name: line.to_uppercase(),
                        section: state.current.clone(),
                        reason,
                    });
                }
            },
        }
        state
    }

    /// Prices a single cleaned candidate line.
    pub fn price_line(&self, line: &str) -> Result<ProductRecord, FailureReason> {
        let price = extract(line)?;
        let tiers = PriceTiers::checked_from_base(price.base_value(self.rate))
            .ok_or(FailureReason::InvalidPriceValue)?;
        Ok(ProductRecord::new(&price.name, price.raw_price, price.currency, tiers))
    }
}

/// Parses `text` with the given guaraníes-per-dollar rate.
///
/// The rate is used unchecked; see [`Parser::with_raw_rate`].
pub fn process(text: &str, rate: f64) -> Catalog {
    Parser::with_raw_rate(rate).parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Currency;

    const RATE: f64 = 7500.0;

    #[test]
    fn test_basic_scenario() {
        let catalog = process("TVS\nSAMSUNG 55 2.500.000\nOTRA COSA\n", RATE);

        assert_eq!(catalog.sections.len(), 2);
        let tvs = catalog.section("TVS").unwrap();
        assert_eq!(tvs.products.len(), 1);

        let record = &tvs.products[0];
        assert_eq!(record.name, "SAMSUNG 55");
        assert_eq!(record.currency, Currency::Local);
        assert_eq!(record.raw_price, 2_500_000);
        assert_eq!(record.original_price_display, "Gs 2.500.000");
        assert_eq!(record.tiers.cost, 2_575_000);

        assert!(catalog.section("OTRA COSA").unwrap().is_empty());
        assert!(catalog.failed.is_empty());
    }

    #[test]
    fn test_dollar_conversion() {
        let catalog = process("Audio\nJBL Flip 6 150$\n", RATE);
        let record = &catalog.section("AUDIO").unwrap().products[0];
        assert_eq!(record.name, "JBL FLIP 6");
        assert_eq!(record.original_price_display, "$ 150");
        assert_eq!(record.tiers.cost, 1_158_750);
        assert_eq!(record.tiers.cash, 1_287_000);
    }

    #[test]
    fn test_failed_lines_keep_section() {
        let catalog = process("Celulares\nRaro 05\nSONY\n", RATE);
        assert!(catalog.section("CELULARES").unwrap().is_empty());
        assert_eq!(
            catalog.failed,
            vec![
                FailedLine {
                    name: "RARO 05".to_string(),
                    section: "CELULARES".to_string(),
                    reason: FailureReason::InvalidPriceValue,
                },
                FailedLine {
                    name: "SONY".to_string(),
                    section: "CELULARES".to_string(),
                    reason: FailureReason::UnparsablePriceLine,
                },
            ]
        );
    }

    #[test]
    fn test_products_before_any_header() {
        let catalog = process("Mouse 25.000\nX 1\nAB\n", RATE);
        assert_eq!(catalog.sections.len(), 1);
        assert_eq!(catalog.sections[0].name, "");
        assert_eq!(catalog.sections[0].products[0].name, "MOUSE");
        assert_eq!(catalog.failed.len(), 2);
        assert!(catalog.failed.iter().all(|f| f.section.is_empty()));
    }

    #[test]
    fn test_failure_before_header_opens_no_section() {
        let catalog = process("AB\nAudio\n", RATE);
        assert_eq!(catalog.sections.len(), 1);
        assert_eq!(catalog.sections[0].name, "AUDIO");
        assert_eq!(catalog.failed[0].name, "AB");
    }

    #[test]
    fn test_reopened_section_appends() {
        let text = "Audio\nParlante 150$\nTV 55\nSamsung 55 2.500.000\naudio\nAuricular 25.500 Gs\n";
        let catalog = process(text, RATE);

        let names: Vec<_> = catalog.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["AUDIO", "TV 55"]);

        let audio = catalog.section("AUDIO").unwrap();
        assert_eq!(audio.products.len(), 2);
        assert_eq!(audio.products[1].name, "AURICULAR");
    }

    #[test]
    fn test_bullets_and_blank_lines() {
        let text = "\n\n● Celulares\n\n- Xiaomi Redmi 13 1.450.000\n* iPhone 15 128GB 1.200$\n-\n";
        let catalog = process(text, RATE);

        let section = catalog.section("CELULARES").unwrap();
        assert_eq!(section.products.len(), 2);
        assert_eq!(section.products[0].name, "XIAOMI REDMI 13");
        assert_eq!(section.products[1].name, "IPHONE 15 128GB");
        assert_eq!(section.products[1].currency, Currency::Dollar);
    }

    #[test]
    fn test_crlf_input() {
        let catalog = process("Audio\r\nParlante 150$\r\n", RATE);
        assert_eq!(catalog.section("AUDIO").unwrap().products.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(process("", RATE).is_empty());
        assert!(process("\n \n\t\n", RATE).is_empty());
    }

    #[test]
    fn test_unicode_spaces() {
        let catalog = process("Audio\nParlante 150\u{A0}$\n-\u{A0}Sony\nTV\u{A0}55\n", RATE);

        let names: Vec<_> = catalog.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["AUDIO", "TV\u{A0}55"]);

        let record = &catalog.section("AUDIO").unwrap().products[0];
        assert_eq!(record.name, "PARLANTE");
        assert_eq!(record.currency, Currency::Dollar);
        assert_eq!(record.tiers.cost, 1_158_750);

        assert_eq!(catalog.failed.len(), 1);
        assert_eq!(catalog.failed[0].name, "SONY");
        assert_eq!(catalog.failed[0].reason, FailureReason::UnparsablePriceLine);
    }

    #[test]
    fn test_oversized_prices_fail() {
        let text = "Varios\nItem 9.999.999.999.999.999.999\nLote 9.007.199.254.740.991$\n";
        let catalog = process(text, RATE);

        assert!(catalog.section("VARIOS").unwrap().is_empty());
        assert_eq!(catalog.failed.len(), 2);
        assert!(catalog.failed.iter().all(|f| f.reason == FailureReason::InvalidPriceValue));
    }

    #[test]
    fn test_large_local_price() {
        let catalog = process("Varios\nItem 8.000.000.000.000.000\n", RATE);
        let record = &catalog.section("VARIOS").unwrap().products[0];
        assert_eq!(record.original_price_display, "Gs 8.000.000.000.000.000");
        assert_eq!(record.tiers.cost, 8_240_000_000_000_000);
        assert_eq!(record.tiers.cash % 1000, 0);
        assert_eq!(record.tiers.special_plan % 1000, 0);
    }

    #[test]
    fn test_nan_rate_fails_dollar_lines() {
        let catalog = process("Audio\nParlante 150$\nAuricular 25.500\n", f64::NAN);
        assert_eq!(catalog.section("AUDIO").unwrap().products.len(), 1);
        assert_eq!(catalog.failed[0].name, "PARLANTE 150$");
    }

    #[test]
    fn test_parser_is_stateless() {
        let parser = Parser::new(ExchangeRate::new(RATE).unwrap());
        let text = "Audio\nParlante 150$\nRaro 05\n";
        assert_eq!(parser.parse(text), parser.parse(text));
        assert_eq!(parser.rate(), RATE);
    }

    #[test]
    fn test_price_line() {
        let parser = Parser::with_raw_rate(RATE);
        assert_eq!(parser.price_line("Funda 20.000").unwrap().tiers.cost, 20_600);
        assert_eq!(parser.price_line("Funda"), Err(FailureReason::UnparsablePriceLine));
    }
}
