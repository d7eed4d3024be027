//! Console output and CSV export of search results.

pub mod export;

pub use export::CsvExporter;

use crate::config::OutputFormat;
use crate::sites::{ProductRecord, SearchTerm};
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;

pub const NO_PRODUCTS: &str = "No products found from any source.";

/// Formats records for the console.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats the whole result list.
    pub fn format_records(&self, records: &[ProductRecord]) -> String {
        if records.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Text => NO_PRODUCTS.to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_records(records),
            OutputFormat::Text => self.text_records(records),
        }
    }

    fn json_records(&self, records: &[ProductRecord]) -> String {
        serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
    }

    fn text_records(&self, records: &[ProductRecord]) -> String {
        let mut lines = Vec::with_capacity(records.len() + 1);
        lines.push(format!("Found {} products:", records.len()));

        for (idx, record) in records.iter().enumerate() {
            lines.push(format!(
                "{}. [{}] {} | {} | Rating: {}",
                idx + 1,
                record.source,
                record.name,
                record.price,
                record.rating
            ));
        }

        lines.join("\n")
    }
}

/// Prints the summary and writes the CSV export.
pub struct Reporter {
    formatter: Formatter,
    exporter: CsvExporter,
}

impl Reporter {
    pub fn new(format: OutputFormat, output_dir: impl Into<PathBuf>) -> Self {
        Self { formatter: Formatter::new(format), exporter: CsvExporter::new(output_dir) }
    }

    /// Reports `records` to `out`.
    ///
    /// An empty list prints [`NO_PRODUCTS`] and writes no file. Otherwise
    /// the summary is printed, the CSV file written, and its path returned.
    pub fn report(
        &self,
        out: &mut impl Write,
        term: &SearchTerm,
        records: &[ProductRecord],
    ) -> Result<Option<PathBuf>> {
        if records.is_empty() {
            writeln!(out, "{}", NO_PRODUCTS)?;
            return Ok(None);
        }

        writeln!(out)?;
        writeln!(out, "{}", self.formatter.format_records(records))?;

        let path = self.exporter.write(term, records)?;
        writeln!(out, "Data saved to {}", path.display())?;

        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::Site;

    fn sample() -> Vec<ProductRecord> {
        vec![
            ProductRecord::new("USB Cable", "$9.99", Some("4.5".to_string()), Site::Ebay),
            ProductRecord::new("Lightning Cable", "$7.88", None, Site::Walmart),
        ]
    }

    #[test]
    fn test_text_lines() {
        let output = Formatter::new(OutputFormat::Text).format_records(&sample());
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Found 2 products:",
                "1. [eBay] USB Cable | $9.99 | Rating: 4.5",
                "2. [Walmart] Lightning Cable | $7.88 | Rating: N/A",
            ]
        );
    }

    #[test]
    fn test_json_output() {
        let output = Formatter::new(OutputFormat::Json).format_records(&sample());
        let parsed: Vec<ProductRecord> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_empty_output() {
        assert_eq!(Formatter::new(OutputFormat::Text).format_records(&[]), NO_PRODUCTS);
        assert_eq!(Formatter::new(OutputFormat::Json).format_records(&[]), "[]");
    }

    #[test]
    fn test_report_empty_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Reporter::new(OutputFormat::Text, dir.path());
        let term = SearchTerm::parse("usb cable").unwrap();
        let mut out = Vec::new();

        let path = reporter.report(&mut out, &term, &[]).unwrap();
        assert!(path.is_none());
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", NO_PRODUCTS));
        assert!(!dir.path().join("usb_cable_products.csv").exists());
    }

    #[test]
    fn test_report_prints_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Reporter::new(OutputFormat::Text, dir.path());
        let term = SearchTerm::parse("usb cable").unwrap();
        let mut out = Vec::new();

        let path = reporter.report(&mut out, &term, &sample()).unwrap().unwrap();
        assert_eq!(path, dir.path().join("usb_cable_products.csv"));
        assert!(path.exists());

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Found 2 products:"));
        assert!(printed.contains("1. [eBay] USB Cable | $9.99 | Rating: 4.5"));
        assert!(printed.contains(&format!("Data saved to {}", path.display())));
    }
}
