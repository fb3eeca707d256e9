// Append-only plain text record of extractions
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::CoordinateSink;
use crate::types::{Extraction, Result};

pub struct TextLog {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl TextLog {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The two-line block written for each extraction, blank line included.
pub fn format_entry(extraction: &Extraction) -> String {
    format!(
        "Original Coordinates: {}\nAdjusted Coordinates: {}\n\n",
        extraction.original, extraction.adjusted
    )
}

impl CoordinateSink for TextLog {
    fn record(&mut self, source: &str, extraction: &Extraction) -> Result<()> {
        self.writer.write_all(format_entry(extraction).as_bytes())?;
        self.writer.flush()?;
        tracing::debug!("Appended {} extraction to {}", source, self.path.display());
        Ok(())
    }
}
