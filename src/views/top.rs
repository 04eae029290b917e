//! Deterministic top-N selection shared by every view.
//!
//! Candidates are ranked by slot 0, highest first. Equal slot-0 values are
//! ordered by location key ascending so reports are reproducible. Entries
//! with no values at all rank last.

use crate::aggregator::Aggregated;

/// One location and its accumulated values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub location: String,
    pub values: Vec<i64>,
}

/// Sort `items` by rank and keep at most `n` of them
///
/// `key` exposes the location key and value vector of an item.
pub fn select_top<T, F>(mut items: Vec<T>, n: usize, key: F) -> Vec<T>
where
    F: Fn(&T) -> (&str, &[i64]),
{
    items.sort_by(|a, b| {
        let (a_location, a_values) = key(a);
        let (b_location, b_values) = key(b);
        b_values
            .first()
            .cmp(&a_values.first())
            .then_with(|| a_location.cmp(b_location))
    });
    items.truncate(n);
    items
}

/// Top `n` entries of an aggregation
pub fn top_entries(aggregated: Aggregated, n: usize) -> Vec<ReportEntry> {
    let entries = aggregated
        .into_iter()
        .map(|(location, values)| ReportEntry { location, values })
        .collect();
    select_top(entries, n, |e: &ReportEntry| (e.location.as_str(), e.values.as_slice()))
}
