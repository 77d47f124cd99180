//! Axis classification: split kind plus the admissible offset interval.
//!
//! Two entry points: [`classify`] for plain size limits and
//! [`classify_with_aspect`] when the partner axis imposes a secondary
//! minimum (partner length divided by the aspect limit). The aspect variant
//! narrows the interval through a fixed fallback ladder; the ladder's order
//! decides which rectangles stay splittable under tight constraints, so the
//! steps must not be rearranged.

use super::types::{SplitKind, SplitRange};

/// Classify an axis of length `n` against a hard minimum `lo` and a
/// mandatory-split maximum `hi`.
///
/// Every kind except `None` carries the raw interval `[lo, n - lo]`. For
/// `Degenerate` axes shorter than `2 * lo` the interval is inverted and only
/// becomes usable after the caller's feasibility checks.
///
/// `lo > hi` is tolerated (legal when one axis's minimum exceeds the shared
/// maximum); the `Must` check simply wins in the overlap.
pub fn classify(n: i32, lo: i32, hi: i32) -> SplitRange {
    if n < lo {
        return SplitRange::new(SplitKind::None, 0, 0);
    }
    let kind = if n > hi {
        SplitKind::Must
    } else if n <= 2 * lo {
        // At exactly 2*lo the admissible offset set is the single point
        // `lo`, which is still degenerate, not a free choice.
        SplitKind::Degenerate
    } else {
        SplitKind::Can
    };
    SplitRange::new(kind, lo, n - lo)
}

/// Classify with a secondary minimum `aspect_min`, the partner axis's length
/// divided by the aspect limit. The aspect bound can be tighter than the
/// size bound, both for the kind and for the interval.
pub fn classify_with_aspect(n: i32, lo: i32, hi: i32, aspect_min: f64) -> SplitRange {
    debug_assert!(aspect_min >= 0.0, "aspect minimum may not be negative");
    if n < lo {
        return SplitRange::new(SplitKind::None, 0, 0);
    }
    let kind = if n > hi {
        SplitKind::Must
    } else if n <= 2 * lo || (n as f64) < 2.0 * aspect_min {
        SplitKind::Degenerate
    } else {
        SplitKind::Can
    };
    let (range_lo, range_hi) = constrained_range(n, lo, hi, aspect_min);
    SplitRange::new(kind, range_lo, range_hi)
}

/// Fallback ladder for the aspect-constrained offset interval.
///
/// Tried in strict order; the first applicable step wins:
/// 1. the ideal interval keeping both children at or above the aspect
///    minimum,
/// 2. `[hi, n - hi]`, cutting at the mandatory maximum from both ends,
/// 3. the single point at the aspect minimum, provided the off-cut child
///    still meets the hard minimum,
/// 4. the single point at the hard minimum,
/// 5. the empty interval `[0, 0]`.
fn constrained_range(n: i32, lo: i32, hi: i32, aspect_min: f64) -> (i32, i32) {
    let a_lo = lo.max(aspect_min.ceil() as i32);
    let a_hi = n - lo.max(aspect_min.floor() as i32);
    if a_lo <= a_hi {
        return (a_lo, a_hi);
    }
    if hi <= n - hi {
        return (hi, n - hi);
    }
    if a_lo <= n - lo {
        return (a_lo, a_lo);
    }
    if lo <= n {
        return (lo, lo);
    }
    (0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: f64 = 16.0 / 9.0;

    #[test]
    fn plain_ranges_leave_room_for_both_children() {
        let v = classify(10, 1, 25);
        assert_eq!(v.kind, SplitKind::Can);
        assert_eq!((v.lo, v.hi), (1, 9));
        let h = classify(12, 2, 25);
        assert_eq!(h.kind, SplitKind::Can);
        assert_eq!((h.lo, h.hi), (2, 10));
    }

    #[test]
    fn twice_the_minimum_is_still_degenerate() {
        let r = classify(10, 5, 25);
        assert_eq!(r.kind, SplitKind::Degenerate);
        assert_eq!((r.lo, r.hi), (5, 5));
    }

    #[test]
    fn oversized_axis_is_must() {
        let r = classify(30, 5, 25);
        assert_eq!(r.kind, SplitKind::Must);
        assert_eq!((r.lo, r.hi), (5, 25));
    }

    #[test]
    fn undersized_axis_is_none() {
        let r = classify(4, 5, 25);
        assert_eq!(r.kind, SplitKind::None);
        assert_eq!((r.lo, r.hi), (0, 0));
    }

    #[test]
    fn aspect_ideal_interval_when_it_fits() {
        // 24x27, height axis: both halves can stay at or above 27's partner
        // minimum of 24 / (16/9) = 13.5.
        let h = classify_with_aspect(27, 5, 1000, 24.0 / WIDE);
        assert_eq!(h.kind, SplitKind::Can);
        assert_eq!((h.lo, h.hi), (14, 14));
    }

    #[test]
    fn aspect_point_when_the_ideal_interval_is_empty() {
        // 24x27, width axis: the ideal interval inverts, but cutting at the
        // aspect minimum of ceil(27 / (16/9)) = 16 still leaves the off-cut
        // child its hard minimum.
        let v = classify_with_aspect(24, 5, 1000, 27.0 / WIDE);
        assert_eq!(v.kind, SplitKind::Degenerate);
        assert_eq!((v.lo, v.hi), (16, 16));
    }

    #[test]
    fn minimum_point_when_even_the_aspect_point_is_too_greedy() {
        let v = classify_with_aspect(4, 5, 1000, 6.0 / WIDE);
        assert_eq!(v.kind, SplitKind::None);
        assert_eq!((v.lo, v.hi), (0, 0));
        let h = classify_with_aspect(6, 5, 1000, 4.0 / WIDE);
        assert_eq!(h.kind, SplitKind::Degenerate);
        assert_eq!((h.lo, h.hi), (5, 5));
    }

    #[test]
    fn huge_partner_cannot_force_a_sliver() {
        // The aspect point of ceil(80 / (16/9)) = 45 would leave a width-1
        // child; the ladder must land on the hard-minimum point instead.
        let v = classify_with_aspect(46, 5, 25, 80.0 / WIDE);
        assert_eq!(v.kind, SplitKind::Must);
        assert_eq!((v.lo, v.hi), (5, 5));
    }

    #[test]
    fn both_axes_oversized_cut_at_the_maximum() {
        let v = classify_with_aspect(50, 5, 25, 50.0 / WIDE);
        assert_eq!(v.kind, SplitKind::Must);
        assert_eq!((v.lo, v.hi), (25, 25));
    }

    #[test]
    fn exact_double_aspect_is_not_degenerate() {
        // n equal to twice the aspect minimum sits on the Can side of the
        // boundary; only strictly smaller lengths degenerate.
        let h = classify_with_aspect(27, 5, 1000, 13.5);
        assert_eq!(h.kind, SplitKind::Can);
    }
}
