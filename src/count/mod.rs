//! Build a frequency table by counting word occurrences in a raw corpus.
//!
//! Tokens are split on whitespace, lowercased, and stripped of surrounding
//! non-alphanumeric characters; empty tokens are dropped. The output table is
//! ordered word-ascending so identical corpora yield identical tables.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rayon::prelude::*;

use crate::table::{FrequencyRow, FrequencyTable};

fn normalize(token: &str) -> Option<String> {
    let lowered = token.to_lowercase();
    let word = lowered.trim_matches(|c: char| !c.is_alphanumeric());
    if word.is_empty() {
        None
    } else {
        Some(word.to_string())
    }
}

/// Count normalized words in `text`, single-threaded.
pub fn count_words(text: &str) -> FrequencyTable {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for token in text.split_whitespace() {
        if let Some(word) = normalize(token) {
            *counts.entry(word).or_insert(0) += 1;
        }
    }
    into_table(counts)
}

/// Count normalized words in `text` across worker threads.
///
/// Lines are the chunk boundary, so no token straddles two workers and the
/// result is exactly the table [`count_words`] produces.
pub fn count_words_parallel(text: &str) -> FrequencyTable {
    let counts = text
        .par_lines()
        .fold(HashMap::<String, u64>::new, |mut acc, line| {
            for token in line.split_whitespace() {
                if let Some(word) = normalize(token) {
                    *acc.entry(word).or_insert(0) += 1;
                }
            }
            acc
        })
        .reduce(HashMap::new, |mut merged, partial| {
            for (word, count) in partial {
                *merged.entry(word).or_insert(0) += count;
            }
            merged
        });
    into_table(counts)
}

/// Count normalized words in the file at `path`.
pub fn count_file(path: &Path) -> Result<FrequencyTable, std::io::Error> {
    let contents = fs::read_to_string(path)?;
    Ok(count_words_parallel(&contents))
}

fn into_table(counts: HashMap<String, u64>) -> FrequencyTable {
    let mut rows: Vec<FrequencyRow> = counts
        .into_iter()
        .map(|(word, frequency)| FrequencyRow { word, frequency })
        .collect();

    // HashMap iteration order is arbitrary; sort so the table is reproducible.
    rows.sort_by(|a, b| a.word.cmp(&b.word));

    FrequencyTable::new(rows)
}
