use serde::{Deserialize, Serialize};

/// One (word, count) record from the input table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyRow {
    pub word: String,
    pub frequency: u64,
}

impl FrequencyRow {
    pub fn new(word: impl Into<String>, frequency: u64) -> Self {
        FrequencyRow {
            word: word.into(),
            frequency,
        }
    }
}

/// An ordered sequence of rows, loaded once and never mutated afterwards.
///
/// Order is whatever the producer gave us: file order for the reader,
/// word-ascending for the corpus counter. Duplicate words are not merged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    rows: Vec<FrequencyRow>,
}

impl FrequencyTable {
    pub fn new(rows: Vec<FrequencyRow>) -> Self {
        FrequencyTable { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[FrequencyRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<FrequencyRow> {
        self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrequencyRow> {
        self.rows.iter()
    }
}
