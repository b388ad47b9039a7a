use std::fs::File;
use std::path::Path;

use thiserror::Error;

use super::row::{FrequencyRow, FrequencyTable};

pub const WORD_COLUMN: &str = "word";
pub const FREQUENCY_COLUMN: &str = "frequency";

#[derive(Debug, Error)]
pub enum TableReadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Malformed record: {0}")]
    Parse(#[from] csv::Error),
}

// Key point:
// header row is mandatory
// schema is validated before any row is parsed
// extra columns are ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReadConfig {
    pub delimiter: u8,
}

impl TableReadConfig {
    pub fn comma() -> Self {
        Self { delimiter: b',' }
    }

    pub fn tab() -> Self {
        Self { delimiter: b'\t' }
    }
}

impl Default for TableReadConfig {
    fn default() -> Self {
        Self::comma()
    }
}

pub struct TableReader {
    config: TableReadConfig,
}

impl TableReader {
    pub fn new(config: TableReadConfig) -> Self {
        Self { config }
    }

    /// Load a delimited (word, frequency) table from `path`.
    ///
    /// Fails without producing a partial table: a missing file surfaces as
    /// `Io`, a header lacking either required column as `MissingColumn`, and
    /// a non-numeric frequency as `Parse`.
    pub fn read(&self, path: &Path) -> Result<FrequencyTable, TableReadError> {
        let file = File::open(path)?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(true)
            .from_reader(file);

        // Validate the schema up front so a missing column is reported as
        // such, not as a per-record deserialization failure.
        let headers = reader.headers()?.clone();
        for required in [WORD_COLUMN, FREQUENCY_COLUMN] {
            if !headers.iter().any(|name| name == required) {
                return Err(TableReadError::MissingColumn(required.to_string()));
            }
        }

        let mut rows = Vec::new();
        for record in reader.deserialize() {
            let row: FrequencyRow = record?;
            rows.push(row);
        }

        Ok(FrequencyTable::new(rows))
    }
}

/// Read with the default comma-delimited configuration.
pub fn read_table(path: &Path) -> Result<FrequencyTable, TableReadError> {
    TableReader::new(TableReadConfig::default()).read(path)
}
