//! Word-frequency reporting for text corpora.
//!
//! `freq-report` loads a delimited (word, frequency) table, ranks it by count,
//! keeps the top entries, and renders them as a horizontal bar chart. The
//! load-rank-select pipeline is deterministic — identical input files always
//! produce the identical ordered selection.

pub mod chart;
pub mod count;
pub mod pipeline;
pub mod selection;
pub mod table;
