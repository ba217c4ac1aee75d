//! Argument normalization and the stepping iterator shared by every
//! generator variant.
//!
//! A [`FillRequest`] carries raw, possibly fractional, possibly absent
//! arguments. [`RangePlan`] is its normalized form: defaulted bounds,
//! floor-truncated values, and a validated step. The plan owns the one
//! iteration policy of the crate:
//!
//! - The plan is **half-open toward the direction of travel**: the stop
//!   value itself is never emitted. An ascending plan emits values in
//!   `start..stop`; a descending plan emits values down to, but not below,
//!   `stop + 1`.
//! - When the sign of the step disagrees with the relationship between the
//!   bounds, the plan is empty — a mismatch is not an error.
//! - The element count for a matching direction is
//!   `ceil(|stop - start| / |step|)`.
//! - A plan never describes more values than one allocation can hold
//!   ([`RangePlan::MAX_LEN`]); longer requests fail during normalization.
//!
//! The alphabetic generator reuses the same machinery by planning over
//! alphabet positions.

use ranger_common::{Result, error::Error};

use crate::request::FillRequest;

/// The effective bounds of one range computation: start, stop and step
/// after defaulting and floor-truncation.
///
/// # Examples
///
/// ```
/// use ranger::{FillRequest, plan::RangePlan};
///
/// let plan = RangePlan::from_request("fill", &FillRequest::to(4.0))?;
/// assert_eq!(plan.len(), 4);
/// assert_eq!(plan.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
///
/// let plan = RangePlan::from_request("fill", &FillRequest::between(0.0, 4.0).step(-1.0))?;
/// assert!(plan.is_empty());
/// # Ok::<(), ranger::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangePlan {
    /// First value emitted when the plan is non-empty.
    start: i64,
    /// The bound iteration runs toward; never emitted.
    stop: i64,
    /// The amount added each round; never zero.
    step: i64,
}

impl RangePlan {
    /// The longest span a plan may describe: the most `i64` values a single
    /// allocation can hold. [`from_request`](Self::from_request) rejects
    /// longer spans as `SpanTooLong`.
    pub const MAX_LEN: u64 = isize::MAX as u64 / size_of::<i64>() as u64;

    /// Normalizes a request into a plan.
    ///
    /// Bound resolution: with both bounds absent the request fails as
    /// `MissingArgument` (a lone step supplies no bound); with exactly one
    /// bound present — either field — that bound becomes the stop and the
    /// effective start is 0; with both present each is used as given. All
    /// values are floor-truncated, so a fractional step in `(0, 1)` floors
    /// to zero and fails as `ZeroStep`. A plan describing more than
    /// [`MAX_LEN`](Self::MAX_LEN) values fails as `SpanTooLong` before
    /// anything is materialized.
    ///
    /// `op` names the operation in failure messages.
    pub fn from_request(op: &str, request: &FillRequest) -> Result<RangePlan> {
        let (start, stop) = match (request.start, request.stop) {
            (None, None) => return Err(Error::missing_argument(op)),
            (Some(sole), None) | (None, Some(sole)) => (0, floor(sole)),
            (Some(start), Some(stop)) => (floor(start), floor(stop)),
        };
        let step = floor(request.step.unwrap_or(1.0));
        if step == 0 {
            return Err(Error::zero_step(op));
        }
        let plan = RangePlan { start, stop, step };
        if plan.len() > Self::MAX_LEN {
            return Err(Error::span_too_long(op, plan.len()));
        }
        Ok(plan)
    }

    /// An ascending unit-step plan over `start..stop`.
    pub(crate) fn ascending(start: i64, stop: i64) -> RangePlan {
        RangePlan {
            start,
            stop,
            step: 1,
        }
    }

    /// The effective start.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// The effective stop.
    pub fn stop(&self) -> i64 {
        self.stop
    }

    /// The effective step.
    pub fn step(&self) -> i64 {
        self.step
    }

    /// The number of values the plan emits.
    ///
    /// Zero when the step direction disagrees with the bounds; otherwise
    /// `ceil(span / |step|)`, computed without intermediate overflow for the
    /// full `i64` domain.
    pub fn len(&self) -> u64 {
        let (span, magnitude) = if self.step > 0 && self.start < self.stop {
            // wrapping_sub yields the exact unsigned distance between the bounds
            (self.stop.wrapping_sub(self.start) as u64, self.step as u64)
        } else if self.step < 0 && self.start > self.stop {
            (
                self.start.wrapping_sub(self.stop) as u64,
                self.step.unsigned_abs(),
            )
        } else {
            return 0;
        };
        (span - 1) / magnitude + 1
    }

    /// Checks whether the plan emits nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the planned values in travel order.
    pub fn iter(&self) -> RangePlanIter {
        RangePlanIter {
            next: self.start,
            step: self.step,
            remaining: self.len(),
        }
    }
}

/// Floor-truncation used for every raw argument. Non-finite values saturate
/// through the cast.
fn floor(value: f64) -> i64 {
    value.floor() as i64
}

/// Iterator over a plan's values: `start`, `start + step`,
/// `start + 2 * step`, ... for exactly [`RangePlan::len`] items.
#[derive(Debug, Clone)]
pub struct RangePlanIter {
    next: i64,
    step: i64,
    remaining: u64,
}

impl Iterator for RangePlanIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.next;
        self.remaining -= 1;
        // The advance past the final value may leave i64; every yielded
        // value is in range, so the wrap is never observed.
        self.next = self.next.wrapping_add(self.step);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (len, usize::try_from(self.remaining).ok())
    }
}

impl ExactSizeIterator for RangePlanIter {}

impl std::iter::FusedIterator for RangePlanIter {}

#[cfg(test)]
mod tests {
    use ranger_common::error::ErrorKind;

    use crate::request::FillRequest;

    use super::RangePlan;

    #[test]
    fn test_missing_argument() {
        let err = RangePlan::from_request("fill", &FillRequest::default()).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::MissingArgument { op } if op == "fill"));

        // A lone step supplies no bound.
        let req = FillRequest::default().step(2.0);
        let err = RangePlan::from_request("fill", &req).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::MissingArgument { .. }));
    }

    #[test]
    fn test_sole_bound_starts_at_zero() {
        let plan = RangePlan::from_request("fill", &FillRequest::to(4.0)).unwrap();
        assert_eq!((plan.start(), plan.stop(), plan.step()), (0, 4, 1));

        // Supplying only a start means the same thing.
        let req = FillRequest {
            start: Some(4.0),
            ..Default::default()
        };
        let plan = RangePlan::from_request("fill", &req).unwrap();
        assert_eq!((plan.start(), plan.stop(), plan.step()), (0, 4, 1));
    }

    #[test]
    fn test_floor_truncation() {
        let plan = RangePlan::from_request("fill", &FillRequest::between(0.2, 4.9)).unwrap();
        assert_eq!((plan.start(), plan.stop()), (0, 4));

        // Floor goes toward negative infinity, not toward zero.
        let plan = RangePlan::from_request("fill", &FillRequest::between(-0.5, 4.0)).unwrap();
        assert_eq!(plan.start(), -1);

        let req = FillRequest::between(0.0, 10.0).step(2.9);
        let plan = RangePlan::from_request("fill", &req).unwrap();
        assert_eq!(plan.step(), 2);

        let req = FillRequest::between(0.0, 10.0).step(-1.5);
        let plan = RangePlan::from_request("fill", &req).unwrap();
        assert_eq!(plan.step(), -2);
    }

    #[test]
    fn test_zero_step() {
        for step in [0.0, 0.5, f64::NAN] {
            let err = RangePlan::from_request("fill", &FillRequest::between(0.0, 1.0).step(step))
                .unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::ZeroStep { op } if op == "fill"));
        }
    }

    #[test]
    fn test_ascending_iteration() {
        let plan = RangePlan::from_request("fill", &FillRequest::between(0.0, 4.0)).unwrap();
        assert_eq!(plan.len(), 4);
        assert_eq!(plan.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);

        let plan =
            RangePlan::from_request("fill", &FillRequest::between(2.0, 40.0).step(9.0)).unwrap();
        assert_eq!(plan.iter().collect::<Vec<_>>(), vec![2, 11, 20, 29, 38]);
    }

    #[test]
    fn test_descending_iteration() {
        let plan =
            RangePlan::from_request("fill", &FillRequest::between(4.0, 0.0).step(-1.0)).unwrap();
        assert_eq!(plan.iter().collect::<Vec<_>>(), vec![4, 3, 2, 1]);

        let plan =
            RangePlan::from_request("fill", &FillRequest::between(10.0, 1.0).step(-2.0)).unwrap();
        assert_eq!(plan.iter().collect::<Vec<_>>(), vec![10, 8, 6, 4, 2]);
    }

    #[test]
    fn test_direction_mismatch_is_empty() {
        let plan =
            RangePlan::from_request("fill", &FillRequest::between(0.0, 4.0).step(-1.0)).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.iter().next(), None);

        let plan =
            RangePlan::from_request("fill", &FillRequest::between(4.0, 1.0).step(2.0)).unwrap();
        assert!(plan.is_empty());

        let plan = RangePlan::from_request("fill", &FillRequest::between(3.0, 3.0)).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_length_matches_stepped_count() {
        fastrand::seed(8413724601);
        for _ in 0..200 {
            let start = fastrand::i64(-1000..1000);
            let stop = start + fastrand::i64(0..2000);
            let step = fastrand::i64(1..50);
            let req = FillRequest::between(start as f64, stop as f64).step(step as f64);
            let plan = RangePlan::from_request("fill", &req).unwrap();

            let mut count = 0u64;
            let mut value = start;
            while value < stop {
                count += 1;
                value += step;
            }
            assert_eq!(plan.len(), count, "start={start} stop={stop} step={step}");

            let values: Vec<i64> = plan.iter().collect();
            assert_eq!(values.len() as u64, count);
            if count > 0 {
                assert_eq!(values[0], start);
                assert!(values.iter().all(|&v| v < stop));
            }

            // Mirrored bounds and step describe the same walk downwards.
            let req = FillRequest::between(stop as f64, start as f64).step(-step as f64);
            let mirrored = RangePlan::from_request("fill", &req).unwrap();
            let expected: u64 = if start == stop {
                0
            } else {
                (stop - start - 1) as u64 / step as u64 + 1
            };
            assert_eq!(mirrored.len(), expected);
        }
    }

    #[test]
    fn test_iteration_near_the_i64_edge() {
        // The advance past the last value must not overflow.
        let plan = RangePlan::ascending(i64::MAX - 2, i64::MAX);
        assert_eq!(
            plan.iter().collect::<Vec<_>>(),
            vec![i64::MAX - 2, i64::MAX - 1]
        );

        let plan = RangePlan {
            start: i64::MIN + 1,
            stop: i64::MIN,
            step: -1,
        };
        assert_eq!(plan.iter().collect::<Vec<_>>(), vec![i64::MIN + 1]);
    }

    #[test]
    fn test_iterator_is_exact_and_fused() {
        let plan = RangePlan::from_request("fill", &FillRequest::to(5.0)).unwrap();
        let mut iter = plan.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.size_hint(), (5, Some(5)));
        iter.next();
        assert_eq!(iter.len(), 4);
        let mut iter = iter.skip(4);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_non_finite_bounds_saturate() {
        let plan =
            RangePlan::from_request("fill", &FillRequest::between(f64::NEG_INFINITY, -9.0e18))
                .unwrap();
        assert_eq!(plan.start(), i64::MIN);

        let plan =
            RangePlan::from_request("fill", &FillRequest::between(9.2e18, f64::INFINITY)).unwrap();
        assert_eq!(plan.stop(), i64::MAX);

        // NaN casts to 0: as the sole bound it is a zero stop.
        let plan = RangePlan::from_request("fill", &FillRequest::to(f64::NAN)).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_oversized_span_is_rejected() {
        // The stop saturates to the i64 ceiling, spanning nearly 2^63 values.
        let req = FillRequest::between(0.0, 9.3e18);
        let err = RangePlan::from_request("fill", &req).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::SpanTooLong { op, len } if op == "fill" && *len == i64::MAX as u64
        ));

        // A span nearly as wide passes when the step keeps the count small.
        let req = FillRequest::between(0.0, 9.0e18).step(1.0e12);
        let plan = RangePlan::from_request("fill", &req).unwrap();
        assert_eq!(plan.len(), 9_000_000);
    }
}
