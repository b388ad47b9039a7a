use std::cmp::Ordering;

use crate::table::FrequencyRow;

/// Sort rows by frequency descending, ties broken by word ascending.
///
/// The secondary key makes the rank a total order, so equal inputs always
/// yield the identical sequence regardless of load order.
pub fn rank_descending(rows: &mut [FrequencyRow]) {
    rows.sort_by(|a, b| {
        // Descending frequency
        let freq_cmp = b.frequency.cmp(&a.frequency);
        if freq_cmp != Ordering::Equal {
            freq_cmp
        } else {
            // Ascending word
            a.word.cmp(&b.word)
        }
    });

    debug_assert!(rows.windows(2).all(|w| {
        let a = &w[0];
        let b = &w[1];
        a.frequency > b.frequency || (a.frequency == b.frequency && a.word <= b.word)
    }));
}
