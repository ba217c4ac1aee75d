//! Alphabet policy for the rune generator.
//!
//! A rune request names its span by letters; this module resolves which
//! 26-letter ASCII alphabet those letters live in and turns the request into
//! an inclusive span of alphabet positions:
//!
//! - The case of `start` selects the alphabet: an uppercase start yields an
//!   uppercase span, a lowercase start a lowercase one.
//! - `stop` is coerced to the resolved case before validation, and defaults
//!   to the alphabet's last letter.
//! - The span covers both endpoints and ascends by position regardless of
//!   the order the endpoints were given in; the requested output order is
//!   applied by the caller.
//!
//! Positions are planned and stepped through [`RangePlan`], the same
//! machinery the numeric generators iterate with.

use ranger_common::{Result, error::Error};

use crate::{plan::RangePlan, request::RuneRequest};

/// One case of the 26-letter ASCII alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// `'a'..='z'`.
    Lower,
    /// `'A'..='Z'`.
    Upper,
}

impl Alphabet {
    /// Resolves the alphabet a letter belongs to, or `None` when the
    /// character is not an ASCII letter.
    pub fn of(letter: char) -> Option<Alphabet> {
        if letter.is_ascii_lowercase() {
            Some(Alphabet::Lower)
        } else if letter.is_ascii_uppercase() {
            Some(Alphabet::Upper)
        } else {
            None
        }
    }

    /// The first letter of the alphabet.
    pub fn first(&self) -> char {
        match self {
            Alphabet::Lower => 'a',
            Alphabet::Upper => 'A',
        }
    }

    /// The last letter of the alphabet.
    pub fn last(&self) -> char {
        match self {
            Alphabet::Lower => 'z',
            Alphabet::Upper => 'Z',
        }
    }

    /// Brings a letter of either case into this alphabet. Characters
    /// without an ASCII case mapping are returned unchanged.
    pub fn coerce(&self, letter: char) -> char {
        match self {
            Alphabet::Lower => letter.to_ascii_lowercase(),
            Alphabet::Upper => letter.to_ascii_uppercase(),
        }
    }

    /// The zero-based position of a letter of this alphabet.
    fn position(&self, letter: char) -> i64 {
        letter as i64 - self.first() as i64
    }

    /// The letter at a zero-based position of this alphabet.
    fn letter(&self, position: i64) -> char {
        debug_assert!((0..26).contains(&position));
        (self.first() as u8 + position as u8) as char
    }
}

/// The inclusive span of alphabet positions described by a rune request.
///
/// # Examples
///
/// ```
/// use ranger::{RuneRequest, alphabet::RuneSpan};
///
/// let span = RuneSpan::from_request("runes", &RuneRequest::new('m').stop('r'))?;
/// assert_eq!(span.letters().collect::<String>(), "mnopqr");
/// # Ok::<(), ranger::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RuneSpan {
    alphabet: Alphabet,
    plan: RangePlan,
}

impl RuneSpan {
    /// Resolves a request into a span.
    ///
    /// The case of `start` selects the alphabet and `stop` is coerced into
    /// it, so `'m'..'R'` spans `'m'..'r'`. A missing `start` fails as
    /// `MissingArgument`; an endpoint that is not an ASCII letter fails as
    /// `NotAlphabetic`, naming the offending argument. `op` names the
    /// operation in failure messages.
    pub fn from_request(op: &str, request: &RuneRequest) -> Result<RuneSpan> {
        let Some(start) = request.start else {
            return Err(Error::missing_argument(op));
        };
        let alphabet =
            Alphabet::of(start).ok_or_else(|| Error::not_alphabetic(op, "start", start))?;
        let stop = match request.stop {
            None => alphabet.last(),
            Some(raw) => {
                let stop = alphabet.coerce(raw);
                if !stop.is_ascii_alphabetic() {
                    return Err(Error::not_alphabetic(op, "stop", raw));
                }
                stop
            }
        };
        let (start, stop) = (alphabet.position(start), alphabet.position(stop));
        let (lo, hi) = (start.min(stop), start.max(stop));
        Ok(RuneSpan {
            alphabet,
            // An inclusive span of positions, as a half-open plan.
            plan: RangePlan::ascending(lo, hi + 1),
        })
    }

    /// The alphabet the span lives in.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Iterates the letters of the span in ascending position order.
    pub fn letters(&self) -> impl Iterator<Item = char> {
        let alphabet = self.alphabet;
        self.plan
            .iter()
            .map(move |position| alphabet.letter(position))
    }
}
