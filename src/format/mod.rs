//! Output formatting for priced catalogs (table, JSON, markdown, CSV).

use crate::catalog::models::group_thousands;
use crate::catalog::{Catalog, FailedLine, PriceTiers, ProductRecord, Section};
use crate::config::OutputFormat;

/// Column titles for the tier columns, in [`tier_values`] order.
const TIER_LABELS: [&str; 7] = ["C/F", "Cash", "Card", "6x", "12x", "18x", "Special"];

const CSV_HEADER: &str =
    "section,name,original,cost,cash,card,installments_6,installments_12,installments_18,special_plan";

fn tier_values(tiers: &PriceTiers) -> [i64; 7] {
    [
        tiers.cost,
        tiers.cash,
        tiers.card,
        tiers.installments_6,
        tiers.installments_12,
        tiers.installments_18,
        tiers.special_plan,
    ]
}

/// Label for a section name; products listed before any header have none.
fn section_label(name: &str) -> &str {
    if name.is_empty() {
        "(no section)"
    } else {
        name
    }
}

/// Formats catalogs for output.
pub struct Formatter {
    format: OutputFormat,
    show_failed: bool,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format, show_failed: true }
    }

    /// Sets whether failed lines are listed (table and markdown only).
    pub fn show_failed(mut self, show: bool) -> Self {
        self.show_failed = show;
        self
    }

    /// Formats a whole catalog.
    pub fn format_catalog(&self, catalog: &Catalog) -> String {
        if catalog.is_empty() {
            return match self.format {
                OutputFormat::Json => self.json_catalog(catalog),
                OutputFormat::Csv => CSV_HEADER.to_string(),
                _ => "No products found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_catalog(catalog),
            OutputFormat::Table => self.table_catalog(catalog),
            OutputFormat::Markdown => self.markdown_catalog(catalog),
            OutputFormat::Csv => self.csv_catalog(catalog),
        }
    }

    /// Formats a single priced record.
    pub fn format_record(&self, record: &ProductRecord) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Table => self.table_single(record),
            OutputFormat::Markdown => self.markdown_single(record),
            OutputFormat::Csv => {
                format!("{}\n{}", CSV_HEADER, Self::csv_row("", record))
            }
        }
    }

    // JSON formatting

    fn json_catalog(&self, catalog: &Catalog) -> String {
        serde_json::to_string_pretty(catalog).unwrap_or_else(|_| "{}".to_string())
    }

    // Table formatting

    fn table_single(&self, record: &ProductRecord) -> String {
        let mut lines = Vec::new();

        if !record.name.is_empty() {
            lines.push(format!("Product:  {}", record.name));
        }
        lines.push(format!("S/F:      {}", record.original_price_display));

        for (label, value) in TIER_LABELS.iter().zip(tier_values(&record.tiers)) {
            lines.push(format!("{:<9} {}", format!("{}:", label), group_thousands(value)));
        }

        lines.join("\n")
    }

    fn table_catalog(&self, catalog: &Catalog) -> String {
        let name_width = 32;
        let money_width = 13;

        let mut lines = Vec::new();

        for section in &catalog.sections {
            lines.push(section_label(&section.name).to_string());

            if section.is_empty() {
                lines.push("  (no products)".to_string());
                lines.push(String::new());
                continue;
            }

            let mut header = format!("{:<name_width$}  {:>money_width$}", "Product", "S/F");
            for label in TIER_LABELS {
                header.push_str(&format!("  {:>money_width$}", label));
            }
            lines.push(header);
            lines.push("-".repeat(name_width + (money_width + 2) * (TIER_LABELS.len() + 1)));

            for record in &section.products {
                let mut row = format!(
                    "{:<name_width$}  {:>money_width$}",
                    Self::truncate(&record.name, name_width),
                    record.original_price_display
                );
                for value in tier_values(&record.tiers) {
                    row.push_str(&format!("  {:>money_width$}", group_thousands(value)));
                }
                lines.push(row);
            }

            lines.push(String::new());
        }

        lines.push(format!(
            "Total: {} products in {} sections",
            catalog.product_count(),
            catalog.sections.len()
        ));

        if self.show_failed && !catalog.failed.is_empty() {
            lines.push(String::new());
            lines.push(format!("Failed lines ({}):", catalog.failed.len()));
            for failed in &catalog.failed {
                lines.push(format!("  {}  [{}]", failed.name, section_label(&failed.section)));
            }
        }

        lines.join("\n")
    }

    fn truncate(text: &str, width: usize) -> String {
        if text.chars().count() > width {
            let head: String = text.chars().take(width - 3).collect();
            format!("{}...", head)
        } else {
            text.to_string()
        }
    }

    // Markdown formatting

    fn markdown_single(&self, record: &ProductRecord) -> String {
        let mut lines = Vec::new();

        if !record.name.is_empty() {
            lines.push(format!("## {}", record.name));
            lines.push(String::new());
        }
        lines.push(format!("- **S/F:** {}", record.original_price_display));

        for (label, value) in TIER_LABELS.iter().zip(tier_values(&record.tiers)) {
            lines.push(format!("- **{}:** {}", label, group_thousands(value)));
        }

        lines.join("\n")
    }

    fn markdown_catalog(&self, catalog: &Catalog) -> String {
        let mut lines = Vec::new();

        for section in &catalog.sections {
            lines.push(format!("## {}", section_label(&section.name)));
            lines.push(String::new());
            lines.extend(Self::markdown_section(section));
            lines.push(String::new());
        }

        if self.show_failed && !catalog.failed.is_empty() {
            lines.push("### Failed lines".to_string());
            lines.push(String::new());
            lines.extend(catalog.failed.iter().map(Self::markdown_failed));
            lines.push(String::new());
        }

        lines.push(format!(
            "*{} products in {} sections*",
            catalog.product_count(),
            catalog.sections.len()
        ));

        lines.join("\n")
    }

    fn markdown_section(section: &Section) -> Vec<String> {
        if section.is_empty() {
            return vec!["*No products*".to_string()];
        }

        let mut lines = Vec::new();
        lines.push(format!("| Product | S/F | {} |", TIER_LABELS.join(" | ")));
        lines.push(format!("|---------|-----|{}", "---:|".repeat(TIER_LABELS.len())));

        for record in &section.products {
            let values: Vec<String> =
                tier_values(&record.tiers).into_iter().map(group_thousands).collect();
            lines.push(format!(
                "| {} | {} | {} |",
                record.name.replace('|', "\\|"),
                record.original_price_display,
                values.join(" | ")
            ));
        }

        lines
    }

    fn markdown_failed(failed: &FailedLine) -> String {
        format!("- {} ({})", failed.name, section_label(&failed.section))
    }

    // CSV formatting

    fn csv_catalog(&self, catalog: &Catalog) -> String {
        let mut lines = vec![CSV_HEADER.to_string()];
        lines.extend(catalog.records().map(|(section, record)| Self::csv_row(section, record)));
        lines.join("\n")
    }

    fn csv_row(section: &str, record: &ProductRecord) -> String {
        let values: Vec<String> =
            tier_values(&record.tiers).iter().map(|v| v.to_string()).collect();
        format!(
            "{},{},{},{}",
            Self::csv_escape(section),
            Self::csv_escape(&record.name),
            Self::csv_escape(&record.original_price_display),
            values.join(",")
        )
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}
