//! The production table: committed-choice dispatch over grammar rules.

use std::fmt;

use crate::genlex::{LexicalError, TokenStream};
use crate::matching::Capture;

use super::combinators::Rule;

/// A parse failure reported outward. Structural non-match is not an error;
/// it is the `Ok(None)` leg of [`Rule::parse`] and stays internal to the
/// dispatch loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Every production failed structurally at this byte offset.
    NoApplicableCase { at: usize },
    /// A handler rejected structurally-matched input (e.g. mismatched
    /// open/close tag names).
    Semantic(String),
    /// Eager tokenization failed.
    Lexical(LexicalError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NoApplicableCase { at } => {
                write!(f, "no applicable production at byte offset {}", at)
            }
            ParseError::Semantic(message) => write!(f, "semantic mismatch: {}", message),
            ParseError::Lexical(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<LexicalError> for ParseError {
    fn from(error: LexicalError) -> Self {
        ParseError::Lexical(error)
    }
}

type Production<'t, R> =
    Box<dyn Fn(TokenStream<'t>) -> Result<Option<(R, TokenStream<'t>)>, ParseError> + 't>;

/// An ordered table of grammar rules paired with handlers. The first rule
/// that matches structurally commits: its handler runs and the result is
/// returned with the advanced cursor; a handler failure aborts the parse
/// rather than falling through to later productions.
pub struct Grammar<'t, R> {
    productions: Vec<Production<'t, R>>,
}

impl<'t, R> Grammar<'t, R> {
    pub fn new() -> Self {
        Grammar {
            productions: Vec::new(),
        }
    }

    /// Register a production. The handler receives the rule's bound capture
    /// (right-nested pairs in declaration order) and may reject the match
    /// with [`ParseError::Semantic`].
    pub fn production<P, F>(&mut self, rule: P, handler: F) -> &mut Self
    where
        P: Rule<'t> + 't,
        P::Capture: Capture,
        F: Fn(<P::Capture as Capture>::Bound) -> Result<R, ParseError> + 't,
    {
        self.productions.push(Box::new(move |at| {
            match rule.parse(at)? {
                Some((capture, rest)) => handler(capture.bound()).map(|result| Some((result, rest))),
                None => Ok(None),
            }
        }));
        self
    }

    /// Try the productions in registration order from the given cursor.
    pub fn parse(&self, at: TokenStream<'t>) -> Result<(R, TokenStream<'t>), ParseError> {
        for production in &self.productions {
            if let Some(found) = production(at)? {
                return Ok(found);
            }
        }
        Err(ParseError::NoApplicableCase { at: at.offset() })
    }
}

impl<'t, R> Default for Grammar<'t, R> {
    fn default() -> Self {
        Self::new()
    }
}
