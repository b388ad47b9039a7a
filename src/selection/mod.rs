pub mod ranking;

use serde::{Deserialize, Serialize};

use crate::table::{FrequencyRow, FrequencyTable};
pub use ranking::rank_descending;

/// Number of ranked rows the word-frequency report keeps.
pub const TOP_WORDS: usize = 50;

/// The ranked, bounded prefix of a frequency table.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopSelection {
	pub rows: Vec<FrequencyRow>,
	pub summary: SelectionSummary,
}

/// Metadata describing the outcome of the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSummary {
	pub limit: usize,

	pub rows_considered: usize,
	pub rows_selected: usize,
	pub rows_excluded: usize,
}

/// Rank `table` descending by frequency and keep the first `limit` rows.
///
/// A table shorter than `limit` is returned whole; no error, no padding.
pub fn select_top(table: FrequencyTable, limit: usize) -> TopSelection {
	let rows_considered = table.len();
	let mut rows = table.into_rows();

	// 1. Ordering Phase
	rank_descending(&mut rows);

	// 2. Bounded Prefix
	rows.truncate(limit);
	let rows_selected = rows.len();

	TopSelection {
		rows,
		summary: SelectionSummary {
			limit,
			rows_considered,
			rows_selected,
			rows_excluded: rows_considered - rows_selected,
		},
	}
}
