//! Process command: prices a whole pasted list.

use crate::catalog::{Catalog, Parser};
use crate::config::Config;
use crate::format::Formatter;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Prices a pasted product list.
pub struct ProcessCommand {
    config: Config,
}

impl ProcessCommand {
    /// Creates a new process command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Reads the list from `input` (stdin when `None` or `-`) and returns formatted output.
    pub fn execute(&self, input: Option<&Path>) -> Result<String> {
        let text = read_input(input)?;
        self.execute_text(&text)
    }

    /// Prices the list text and returns formatted output.
    pub fn execute_text(&self, text: &str) -> Result<String> {
        let catalog = self.run(text)?;

        let formatter = Formatter::new(self.config.format).show_failed(self.config.show_failed);
        Ok(formatter.format_catalog(&catalog))
    }

    /// Prices the list text.
    pub fn run(&self, text: &str) -> Result<Catalog> {
        let rate = self.config.rate()?;
        info!("Processing {} lines at {} Gs/USD", text.lines().count(), rate);

        let catalog = Parser::new(rate).parse(text);

        if !catalog.failed.is_empty() {
            warn!("{} lines could not be priced", catalog.failed.len());
        }
        info!(
            "Priced {} products in {} sections",
            catalog.product_count(),
            catalog.sections.len()
        );

        Ok(catalog)
    }
}

/// Reads the whole list from a file, or from stdin for `None` and `-`.
pub fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read price list: {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read price list from stdin")?;
            Ok(text)
        }
    }
}
