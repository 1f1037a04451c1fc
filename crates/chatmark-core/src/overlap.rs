//! Greedy first-wins overlap resolution.
//!
//! Both the inline span resolver and the code highlighter collect candidate
//! matches from several independent regex scans and then need a single,
//! non-overlapping selection. The rule is the same for both: order the
//! candidates by start offset (keeping scan order for equal starts) and keep
//! each one only if it does not intersect anything already kept.

use std::ops::Range;

/// Anything that covers a byte range of some input.
pub trait Ranged {
    /// The half-open byte range covered.
    fn range(&self) -> Range<usize>;
}

impl Ranged for Range<usize> {
    fn range(&self) -> Range<usize> {
        self.clone()
    }
}

/// Select a non-overlapping subset of `candidates`, earliest start first.
///
/// The sort is stable, so when two candidates start at the same offset the
/// one pushed first (the higher-priority scan) wins. Empty ranges never match
/// anything and are dropped.
///
/// # Example
///
/// ```
/// use chatmark_core::select_first_wins;
///
/// let kept = select_first_wins(vec![0..4, 2..6, 4..8, 0..2]);
/// assert_eq!(kept, vec![0..4, 4..8]);
/// ```
pub fn select_first_wins<T: Ranged>(mut candidates: Vec<T>) -> Vec<T> {
    candidates.sort_by_key(|c| c.range().start);

    let mut kept: Vec<T> = Vec::with_capacity(candidates.len());
    let mut frontier = 0;

    for candidate in candidates {
        let range = candidate.range();
        if range.is_empty() {
            continue;
        }
        // kept ranges are sorted and disjoint, so the last end is the furthest
        if kept.is_empty() || range.start >= frontier {
            frontier = range.end;
            kept.push(candidate);
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Tagged {
        span: Range<usize>,
        tag: &'static str,
    }

    impl Ranged for Tagged {
        fn range(&self) -> Range<usize> {
            self.span.clone()
        }
    }

    #[test]
    fn test_disjoint_kept_in_order() {
        let kept = select_first_wins(vec![6..8, 0..2, 3..5]);
        assert_eq!(kept, vec![0..2, 3..5, 6..8]);
    }

    #[test]
    fn test_later_overlap_discarded() {
        let kept = select_first_wins(vec![0..5, 3..9]);
        assert_eq!(kept, vec![0..5]);
    }

    #[test]
    fn test_touching_ranges_both_kept() {
        let kept = select_first_wins(vec![0..3, 3..6]);
        assert_eq!(kept, vec![0..3, 3..6]);
    }

    #[test]
    fn test_equal_start_keeps_insertion_order() {
        let kept = select_first_wins(vec![
            Tagged { span: 0..7, tag: "first" },
            Tagged { span: 0..5, tag: "second" },
        ]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].tag, "first");
    }

    #[test]
    fn test_nested_range_discarded() {
        let kept = select_first_wins(vec![0..10, 2..4]);
        assert_eq!(kept, vec![0..10]);
    }

    #[test]
    fn test_empty_ranges_dropped() {
        let kept = select_first_wins(vec![2..2, 0..1]);
        assert_eq!(kept, vec![0..1]);
    }

    #[test]
    fn test_empty_input() {
        let kept: Vec<Range<usize>> = select_first_wins(Vec::new());
        assert!(kept.is_empty());
    }
}
