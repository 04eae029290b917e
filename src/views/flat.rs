//! Flat, cumulative and inclusive location reports.
//!
//! The cumulative view keys each sample by its innermost frame, exactly
//! like the flat view, so both reports carry the same numbers under
//! different titles. Existing consumers rely on that output. The inclusive
//! view is the one that credits every frame on the stack.

use super::top::top_entries;
use crate::aggregator::{aggregate, aggregate_inclusive, Aggregated};
use crate::format::format_values;
use crate::profile::{innermost_location, Profile, ProfileKind};

pub const FLAT_TITLE: &str = "Flat view (direct values)";
pub const CUMULATIVE_TITLE: &str = "Cumulative view (including children)";
pub const INCLUSIVE_TITLE: &str = "Inclusive view (including children)";

/// Top `n` locations by their own (innermost-frame) values
pub fn flat_view(profile: &Profile, n: usize, kind: ProfileKind) -> String {
    let aggregated = aggregate(&profile.samples, innermost_location);
    format_results(FLAT_TITLE, aggregated, n, kind)
}

/// Same aggregation as [`flat_view`], reported under the cumulative title
pub fn cumulative_view(profile: &Profile, n: usize, kind: ProfileKind) -> String {
    let aggregated = aggregate(&profile.samples, innermost_location);
    format_results(CUMULATIVE_TITLE, aggregated, n, kind)
}

/// Top `n` locations by values of every sample they appear in
pub fn inclusive_view(profile: &Profile, n: usize, kind: ProfileKind) -> String {
    let aggregated = aggregate_inclusive(&profile.samples);
    format_results(INCLUSIVE_TITLE, aggregated, n, kind)
}

/// Render the header and one `location: values` line per top entry
pub fn format_results(title: &str, aggregated: Aggregated, n: usize, kind: ProfileKind) -> String {
    let mut result = String::new();
    result.push_str(&format!("{} (showing top {} locations)\n\n", title, n));

    for entry in top_entries(aggregated, n) {
        result.push_str(&format!(
            "{}: {}\n",
            entry.location,
            format_values(&entry.values, kind)
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Frame, Sample};
    use pretty_assertions::assert_eq;

    fn profile() -> Profile {
        Profile::new(
            ProfileKind::Heap,
            vec![
                Sample::new(vec![Frame::new("alloc", 10), Frame::new("main", 1)], vec![2048, 4096]),
                Sample::new(vec![Frame::new("grow", 20), Frame::new("main", 1)], vec![100, 200]),
                Sample::new(vec![Frame::new("alloc", 10), Frame::new("init", 5)], vec![1, 1]),
            ],
        )
    }

    #[test]
    fn test_flat_view_text() {
        let text = flat_view(&profile(), 100, ProfileKind::Heap);
        assert_eq!(
            text,
            "Flat view (direct values) (showing top 100 locations)\n\n\
             alloc:10: 2.00KB in use, 4.00KB total alloc\n\
             grow:20: 100B in use, 200B total alloc\n"
        );
    }

    #[test]
    fn test_cumulative_matches_flat_body() {
        let flat = flat_view(&profile(), 100, ProfileKind::Heap);
        let cum = cumulative_view(&profile(), 100, ProfileKind::Heap);
        assert!(cum.starts_with(CUMULATIVE_TITLE));
        assert_eq!(flat.split_once("\n\n").unwrap().1, cum.split_once("\n\n").unwrap().1);
    }

    #[test]
    fn test_inclusive_credits_callers() {
        let text = inclusive_view(&profile(), 1, ProfileKind::Goroutine);
        assert_eq!(
            text,
            "Inclusive view (including children) (showing top 1 locations)\n\n\
             main:1: 2.10KB, 4.20KB\n"
        );
    }

    #[test]
    fn test_header_only_when_nothing_resolves() {
        let empty = Profile::new(ProfileKind::Cpu, vec![Sample::new(vec![Frame::unresolved()], vec![1])]);
        assert_eq!(
            flat_view(&empty, 5, ProfileKind::Cpu),
            "Flat view (direct values) (showing top 5 locations)\n\n"
        );
    }
}
