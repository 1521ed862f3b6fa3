//! The matching kernel: cases, captures, and the matcher dispatch table.
//!
//! A [`Case`](case::Case) tests one value against one shape and extracts a
//! capture on success; a [`Matcher`](matcher::Matcher) tries an ordered list
//! of cases and feeds the first successful capture into the paired handler.
//! Structural combinators describe composite shapes over sequences, pairs,
//! maps and recursively-defined numbers.

pub mod capture;
pub mod case;
pub mod list;
pub mod map;
pub mod matcher;
pub mod pair;
pub mod peano;

pub use capture::{Bind, Capture, Combine, CombineAll, NoBind};
pub use case::{any, eq, nil, of_type, some, var, var_of, Case};
pub use list::{cons, empty};
pub use map::{all_of, entry};
pub use matcher::{MatchError, Matcher};
pub use pair::pair;
pub use peano::{succ, zero};
