//! Ordered-case dispatch.
//!
//! A matcher is a table of `(case, handler)` entries over one input type.
//! Entries are tried in registration order; the first case that matches
//! structurally has its capture handed to the paired handler and the result
//! is returned immediately. Later entries are never consulted, so this is
//! committed-choice disjunction, not longest-match.

use std::fmt;

use super::capture::Capture;
use super::case::Case;

/// Raised when a matcher is applied and no registered case matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    NoApplicableCase,
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::NoApplicableCase => write!(f, "no applicable case for the matched value"),
        }
    }
}

impl std::error::Error for MatchError {}

type Entry<I, R> = Box<dyn Fn(&I) -> Option<R> + Send + Sync>;

/// An ordered table of cases paired with handlers over their bound captures.
///
/// Immutable once built; matching never mutates, so a matcher can be shared
/// between threads. Recursive matching is expressed by wrapping the matcher
/// in a named function that handlers call.
pub struct Matcher<I: ?Sized, R> {
    entries: Vec<Entry<I, R>>,
}

impl<I: ?Sized, R> Matcher<I, R> {
    pub fn new() -> Self {
        Matcher {
            entries: Vec::new(),
        }
    }

    /// Register a case and its handler. The handler receives the case's bound
    /// capture: `()` for a shape-only case, the extracted value otherwise,
    /// with multiple bindings arriving as right-nested pairs in declaration
    /// order.
    pub fn case<C, F>(&mut self, case: C, handler: F) -> &mut Self
    where
        C: Case<I> + Send + Sync + 'static,
        C::Capture: Capture,
        F: Fn(<C::Capture as Capture>::Bound) -> R + Send + Sync + 'static,
    {
        self.entries.push(Box::new(move |value| {
            case.attempt(value).map(|capture| handler(capture.bound()))
        }));
        self
    }

    /// Try the entries in registration order; first structural match wins.
    pub fn apply(&self, value: &I) -> Result<R, MatchError> {
        for entry in &self.entries {
            if let Some(result) = entry(value) {
                return Ok(result);
            }
        }
        Err(MatchError::NoApplicableCase)
    }
}

impl<I: ?Sized, R> Default for Matcher<I, R> {
    fn default() -> Self {
        Self::new()
    }
}
