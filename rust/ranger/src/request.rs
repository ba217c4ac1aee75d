//! Request types for the range generators.
//!
//! Every argument of a generator call lives in one of these structs, with
//! optionality spelled out as `Option` fields instead of positional
//! overloading. An all-absent request is expressible on purpose: it is the
//! "no arguments at all" failure case.

/// Arguments for the numeric generators, [`fill`](crate::fill) and
/// [`fill_map`](crate::fill_map).
///
/// Bounds and step are floating-point and floor-truncated during
/// normalization, so `0.2` behaves as `0` and `-0.5` as `-1`. When only one
/// bound is supplied (either field), it becomes the stop and the effective
/// start is fixed at 0. An absent step defaults to 1.
///
/// # Examples
///
/// ```
/// use ranger::FillRequest;
///
/// let first_four = FillRequest::to(4.0);
/// let descending = FillRequest::between(10.0, 1.0).step(-2.0);
/// let start_only = FillRequest {
///     start: Some(4.0),
///     ..Default::default()
/// };
/// # let _ = (first_four, descending, start_only);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FillRequest {
    /// The value iteration starts from.
    pub start: Option<f64>,
    /// The bound iteration runs toward; never emitted itself.
    pub stop: Option<f64>,
    /// The amount added each round. Defaults to 1; must not floor to zero.
    pub step: Option<f64>,
}

impl FillRequest {
    /// A request running from 0 toward `stop`.
    pub fn to(stop: f64) -> FillRequest {
        FillRequest {
            stop: Some(stop),
            ..Default::default()
        }
    }

    /// A request running from `start` toward `stop`.
    pub fn between(start: f64, stop: f64) -> FillRequest {
        FillRequest {
            start: Some(start),
            stop: Some(stop),
            ..Default::default()
        }
    }

    /// Sets the step.
    pub fn step(mut self, step: f64) -> FillRequest {
        self.step = Some(step);
        self
    }
}

/// Arguments for the alphabetic generator, [`runes`](crate::runes).
///
/// The case of `start` selects the alphabet; `stop` is coerced to that case
/// and defaults to the alphabet's last letter (`'z'` or `'Z'`). The span is
/// inclusive of both letters, ascending by position; `reverse` flips the
/// output order.
///
/// # Examples
///
/// ```
/// use ranger::RuneRequest;
///
/// let whole_alphabet = RuneRequest::new('a');
/// let backwards = RuneRequest::new('m').stop('r').reverse(true);
/// # let _ = (whole_alphabet, backwards);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RuneRequest {
    /// The letter the span starts from. Required; selects the case.
    pub start: Option<char>,
    /// The letter the span runs to, inclusive. Defaults to `'z'`/`'Z'`.
    pub stop: Option<char>,
    /// Emit the span in descending order.
    pub reverse: bool,
}

impl RuneRequest {
    /// A request spanning from `start` to the end of its alphabet.
    pub fn new(start: char) -> RuneRequest {
        RuneRequest {
            start: Some(start),
            ..Default::default()
        }
    }

    /// Sets the inclusive stop letter.
    pub fn stop(mut self, stop: char) -> RuneRequest {
        self.stop = Some(stop);
        self
    }

    /// Sets the output order: `true` for descending.
    pub fn reverse(mut self, reverse: bool) -> RuneRequest {
        self.reverse = reverse;
        self
    }
}
