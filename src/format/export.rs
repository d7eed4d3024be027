//! CSV export of aggregated records.

use crate::sites::{ProductRecord, SearchTerm};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes records to `<term>_products.csv` inside a directory.
pub struct CsvExporter {
    dir: PathBuf,
}

impl CsvExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the path the export for `term` is written to.
    pub fn path_for(&self, term: &SearchTerm) -> PathBuf {
        self.dir.join(term.csv_file_name())
    }

    /// Writes the header and one row per record, replacing any existing file.
    pub fn write(&self, term: &SearchTerm, records: &[ProductRecord]) -> Result<PathBuf> {
        let path = self.path_for(term);
        write_records(&path, records)?;
        debug!("Wrote {} rows to {}", records.len(), path.display());
        Ok(path)
    }
}

fn write_records(path: &Path, records: &[ProductRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    writer.flush().with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
