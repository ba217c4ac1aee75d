//! # Ranger: range generation with deferred delivery
//!
//! Ranger generates ranges. Given a start, a stop and an optional step it
//! produces the integers between them, either as an ordered sequence or as
//! a mapping from sequential 0-based keys; a third generator spans the
//! letters of one alphabet case. Every generator comes in two forms:
//!
//! * The crate-root functions ([`fill`], [`fill_map`], [`runes`]) compute
//!   the result on the calling thread and return it through an
//!   already-settled [`Deferred`] handle, which can be waited on, polled,
//!   observed through completion callbacks, or awaited.
//! * The [`sync`] module exposes the same computations returning a plain
//!   [`Result`].
//!
//! Arguments travel in explicit request structs ([`FillRequest`],
//! [`RuneRequest`]) whose absent fields are defaulted during
//! normalization.
//!
//! ## Bound convention
//!
//! The numeric generators are half-open toward the direction of travel:
//! the effective stop is never emitted, and a step whose sign disagrees
//! with the bounds yields an empty result rather than a failure. The
//! alphabetic generator spans both of its endpoints inclusively.
//!
//! ## Module organization
//!
//! * [`request`] - the argument structs
//! * [`plan`] - argument normalization and the shared stepping iterator
//! * [`alphabet`] - case resolution and inclusive letter spans
//! * [`sync`] - the synchronous generator forms
//!
//! The workspace companions are re-exported: [`common`] carries the error
//! and result definitions, [`deferred`] the settlement primitive.
//!
//! ## Examples
//!
//! ```
//! use ranger::FillRequest;
//!
//! let handle = ranger::fill(FillRequest::between(2.0, 40.0).step(9.0));
//! assert_eq!(handle.wait()?, vec![2, 11, 20, 29, 38]);
//! # Ok::<(), ranger::Error>(())
//! ```

use std::collections::BTreeMap;

pub use ranger_common as common;
pub use ranger_deferred as deferred;

pub mod alphabet;
pub mod plan;
pub mod request;
pub mod sync;

pub use ranger_common::{
    Result,
    error::{Error, ErrorKind},
};
pub use ranger_deferred::Deferred;
pub use request::{FillRequest, RuneRequest};

/// Generates an ordered integer sequence.
///
/// Bounds and step are floor-truncated; a request with a single bound
/// counts from 0 toward it. A span describing more than
/// [`plan::RangePlan::MAX_LEN`] values settles with the `SpanTooLong`
/// failure. The returned handle is already settled when it is handed back,
/// so every observation mechanism sees the outcome immediately.
///
/// # Examples
///
/// ```
/// use ranger::FillRequest;
///
/// let handle = ranger::fill(FillRequest::to(4.0));
/// assert_eq!(handle.wait()?, vec![0, 1, 2, 3]);
///
/// // Completion callbacks observe the outcome without consuming it.
/// let handle = ranger::fill(FillRequest::between(4.0, 0.0).step(-1.0));
/// handle.observe(|outcome| {
///     assert_eq!(outcome.unwrap(), &vec![4, 3, 2, 1]);
/// });
/// # Ok::<(), ranger::Error>(())
/// ```
pub fn fill(request: FillRequest) -> Deferred<Vec<i64>> {
    ranger_deferred::settled(sync::fill(request))
}

/// Generates a mapping from sequential keys to the values of the sequence.
///
/// Keys start at 0 and values are `start + key * step`; the entry count and
/// the failure modes are exactly those of [`fill`] for the same request.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// use ranger::FillRequest;
///
/// let handle = ranger::fill_map(FillRequest::between(2.0, 40.0).step(9.0));
/// let map = handle.wait()?;
/// assert_eq!(
///     map,
///     BTreeMap::from([(0, 2), (1, 11), (2, 20), (3, 29), (4, 38)])
/// );
/// # Ok::<(), ranger::Error>(())
/// ```
pub fn fill_map(request: FillRequest) -> Deferred<BTreeMap<u64, i64>> {
    ranger_deferred::settled(sync::fill_map(request))
}

/// Generates the letters between two endpoints of one alphabet case.
///
/// The case of `start` selects the alphabet; `stop` is coerced to match
/// and defaults to `'z'`/`'Z'`. Both endpoints are part of the span. An
/// endpoint that is not an ASCII letter settles the handle with the
/// `NotAlphabetic` failure.
///
/// # Examples
///
/// ```
/// use ranger::RuneRequest;
///
/// let handle = ranger::runes(RuneRequest::new('m').stop('r').reverse(true));
/// assert_eq!(handle.wait()?, vec!['r', 'q', 'p', 'o', 'n', 'm']);
/// # Ok::<(), ranger::Error>(())
/// ```
pub fn runes(request: RuneRequest) -> Deferred<Vec<char>> {
    ranger_deferred::settled(sync::runes(request))
}
