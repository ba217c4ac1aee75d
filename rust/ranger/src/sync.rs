//! Synchronous forms of the generators.
//!
//! Every generator computes its whole result on the calling thread; the
//! functions here return that outcome directly as a [`Result`], with no
//! deferred handle around it. The crate-root forms wrap these functions and
//! deliver the same outcomes through settled
//! [`Deferred`](ranger_deferred::Deferred) handles.
//!
//! The failure modes are shared with the deferred forms: an empty request
//! is a `MissingArgument` failure rather than a sentinel value, and a step
//! that floors to zero is rejected before iteration. A span describing more
//! than [`RangePlan::MAX_LEN`] values is likewise rejected up front, before
//! any allocation.

use std::collections::BTreeMap;

use ranger_common::Result;

use crate::{
    alphabet::RuneSpan,
    plan::RangePlan,
    request::{FillRequest, RuneRequest},
};

/// Generates the ordered integer sequence described by `request`.
///
/// # Examples
///
/// ```
/// use ranger::FillRequest;
///
/// let values = ranger::sync::fill(FillRequest::between(2.0, 40.0).step(9.0))?;
/// assert_eq!(values, vec![2, 11, 20, 29, 38]);
/// # Ok::<(), ranger::Error>(())
/// ```
pub fn fill(request: FillRequest) -> Result<Vec<i64>> {
    let plan = RangePlan::from_request("fill", &request)?;
    Ok(plan.iter().collect())
}

/// Generates the mapping from sequential 0-based keys to the values of the
/// sequence described by `request`.
///
/// # Examples
///
/// ```
/// use ranger::FillRequest;
///
/// let map = ranger::sync::fill_map(FillRequest::between(1.0, 5.0))?;
/// assert_eq!(map, [(0, 1), (1, 2), (2, 3), (3, 4)].into());
/// # Ok::<(), ranger::Error>(())
/// ```
pub fn fill_map(request: FillRequest) -> Result<BTreeMap<u64, i64>> {
    let plan = RangePlan::from_request("fill_map", &request)?;
    Ok(plan
        .iter()
        .enumerate()
        .map(|(key, value)| (key as u64, value))
        .collect())
}

/// Generates the inclusive alphabetic span described by `request`, in the
/// requested order.
///
/// # Examples
///
/// ```
/// use ranger::RuneRequest;
///
/// let letters = ranger::sync::runes(RuneRequest::new('m').stop('r').reverse(true))?;
/// assert_eq!(letters, vec!['r', 'q', 'p', 'o', 'n', 'm']);
/// # Ok::<(), ranger::Error>(())
/// ```
pub fn runes(request: RuneRequest) -> Result<Vec<char>> {
    let span = RuneSpan::from_request("runes", &request)?;
    let mut letters: Vec<char> = span.letters().collect();
    if request.reverse {
        letters.reverse();
    }
    Ok(letters)
}
