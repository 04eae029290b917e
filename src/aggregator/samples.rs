//! Fold samples into per-location value totals.
//!
//! Aggregation is element-wise addition keyed by location, so the result
//! does not depend on the order samples arrive in. The returned map has no
//! meaningful iteration order; sort before displaying (see `views::select_top`).

use crate::profile::{innermost_location, location_key, Sample};
use log::debug;
use std::collections::{HashMap, HashSet};

/// Location key → accumulated value vector
pub type Aggregated = HashMap<String, Vec<i64>>;

/// Add `incoming` into `total` slot by slot
///
/// Only the slots both vectors have are touched. Sums wrap on overflow,
/// which keeps the total independent of sample order.
pub fn accumulate(total: &mut [i64], incoming: &[i64]) {
    for (slot, value) in total.iter_mut().zip(incoming) {
        *slot = slot.wrapping_add(*value);
    }
}

/// Aggregate samples under the key chosen by `key_of`
///
/// Samples for which `key_of` returns `None` are skipped entirely.
/// The first sample seen for a key fixes that key's vector length.
pub fn aggregate<F>(samples: &[Sample], key_of: F) -> Aggregated
where
    F: Fn(&Sample) -> Option<String>,
{
    let mut aggregated: Aggregated = HashMap::new();
    let mut skipped = 0usize;

    for sample in samples {
        let Some(key) = key_of(sample) else {
            skipped += 1;
            continue;
        };

        match aggregated.get_mut(&key) {
            Some(total) => accumulate(total, &sample.values),
            None => {
                aggregated.insert(key, sample.values.clone());
            }
        }
    }

    debug!(
        "Aggregated {} samples into {} locations ({} unresolved)",
        samples.len(),
        aggregated.len(),
        skipped
    );

    aggregated
}

/// Aggregate each sample into every distinct location on its stack
///
/// A location that appears more than once in one stack (recursion) is
/// credited only once for that sample, so the total is "time spent with
/// this location anywhere on the stack". Samples with an unresolved
/// innermost frame are skipped, as in [`aggregate`] keyed by that frame.
pub fn aggregate_inclusive(samples: &[Sample]) -> Aggregated {
    let mut aggregated: Aggregated = HashMap::new();

    for sample in samples {
        if innermost_location(sample).is_none() {
            continue;
        }
        let mut seen = HashSet::new();
        for key in sample.frames.iter().filter_map(location_key) {
            if !seen.insert(key.clone()) {
                continue;
            }
            match aggregated.get_mut(&key) {
                Some(total) => accumulate(total, &sample.values),
                None => {
                    aggregated.insert(key, sample.values.clone());
                }
            }
        }
    }

    debug!(
        "Inclusive aggregation of {} samples covers {} locations",
        samples.len(),
        aggregated.len()
    );

    aggregated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Frame;

    fn sample(frames: &[(&str, i64)], values: Vec<i64>) -> Sample {
        Sample::new(
            frames.iter().map(|(f, l)| Frame::new(*f, *l)).collect(),
            values,
        )
    }

    #[test]
    fn test_accumulate_uses_shared_prefix() {
        let mut total = vec![1, 2];
        accumulate(&mut total, &[10, 20, 30]);
        assert_eq!(total, vec![11, 22]);

        let mut total = vec![1, 2, 3];
        accumulate(&mut total, &[10]);
        assert_eq!(total, vec![11, 2, 3]);
    }

    #[test]
    fn test_overflowing_totals_do_not_depend_on_order() {
        let forward = vec![
            sample(&[("hot", 1)], vec![i64::MAX]),
            sample(&[("hot", 1)], vec![1]),
            sample(&[("hot", 1)], vec![-1]),
        ];
        let mut reordered = forward.clone();
        reordered.swap(1, 2);

        let forward = aggregate(&forward, innermost_location);
        let reordered = aggregate(&reordered, innermost_location);
        assert_eq!(forward, reordered);
        assert_eq!(forward["hot:1"], vec![i64::MAX]);
    }

    #[test]
    fn test_aggregate_sums_same_location() {
        let samples = vec![
            sample(&[("a", 1)], vec![1, 10]),
            sample(&[("b", 2)], vec![2, 20]),
            sample(&[("a", 1)], vec![3, 30]),
        ];
        let totals = aggregate(&samples, innermost_location);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["a:1"], vec![4, 40]);
        assert_eq!(totals["b:2"], vec![2, 20]);
    }

    #[test]
    fn test_aggregate_skips_unresolved() {
        let samples = vec![
            Sample::new(vec![Frame::unresolved(), Frame::new("a", 1)], vec![9]),
            Sample::new(vec![], vec![9]),
            sample(&[("a", 1)], vec![1]),
        ];
        let totals = aggregate(&samples, innermost_location);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals["a:1"], vec![1]);
    }

    #[test]
    fn test_aggregate_is_order_independent() {
        let mut samples = vec![
            sample(&[("a", 1)], vec![1, 2]),
            sample(&[("b", 1)], vec![3, 4]),
            sample(&[("a", 1)], vec![5, 6]),
            sample(&[("c", 7)], vec![7, 8]),
        ];
        let forward = aggregate(&samples, innermost_location);
        samples.reverse();
        let backward = aggregate(&samples, innermost_location);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_aggregate_inclusive_credits_each_location_once() {
        let samples = vec![
            sample(&[("leaf", 3), ("mid", 2), ("leaf", 3), ("root", 1)], vec![5]),
            sample(&[("mid", 2), ("root", 1)], vec![2]),
        ];
        let totals = aggregate_inclusive(&samples);
        assert_eq!(totals["leaf:3"], vec![5]);
        assert_eq!(totals["mid:2"], vec![7]);
        assert_eq!(totals["root:1"], vec![7]);
    }

    #[test]
    fn test_aggregate_inclusive_skips_unresolved_innermost() {
        let samples = vec![Sample::new(
            vec![Frame::unresolved(), Frame::new("main", 1)],
            vec![4],
        )];
        assert!(aggregate_inclusive(&samples).is_empty());
    }
}
