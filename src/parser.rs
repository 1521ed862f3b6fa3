//! Grammar combinators over token streams.
//!
//! Rules are cases over cursor positions; a [`Grammar`](engine::Grammar)
//! built from them is a recursive-descent parser whose handlers assemble the
//! result type. Alternatives are explored from a shared immutable cursor
//! ([`alt`](combinators::alt)), while production dispatch is committed
//! choice, the same split the matching kernel makes.

pub mod combinators;
pub mod engine;

pub use combinators::{alt, call, float, ident, int, kwd, opt, seq, string, text, Rule};
pub use engine::{Grammar, ParseError};
