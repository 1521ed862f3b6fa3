//! The generic lexer: a skip pattern plus an ordered list of recognizers.
//!
//! Tokenization repeatedly consumes the skip pattern (which may match
//! nothing) and then tries the recognizers in declared order, taking the
//! first that matches a non-empty prefix. Keywords registered together are
//! tried longest-literal-first so that `</` is never shadowed by `<`.

use std::fmt;

use regex::Regex;

use super::recognizer::{anchored, keyword, ConstructionError, TokenRecognizer};
use super::stream::TokenStream;
use super::token::Token;

/// Raised when no recognizer applies at a non-empty remaining position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalError {
    /// Byte offset of the first unrecognized input.
    pub at: usize,
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no token recognized at byte offset {}", self.at)
    }
}

impl std::error::Error for LexicalError {}

/// A token with the byte offset it was recognized at.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub offset: usize,
}

/// Stateless tokenizer. Immutable once configured, so it can be held in a
/// static and shared between threads.
pub struct Lexer {
    skip: Option<Regex>,
    recognizers: Vec<Box<dyn TokenRecognizer>>,
}

impl Lexer {
    pub fn new() -> Self {
        Lexer {
            skip: None,
            recognizers: Vec::new(),
        }
    }

    /// Configure the skip pattern (whitespace, comments). May match nothing
    /// at a given position but must not be able to match only the empty
    /// string.
    pub fn skip(&mut self, pattern: &str) -> Result<&mut Self, ConstructionError> {
        self.skip = Some(anchored(pattern)?);
        Ok(self)
    }

    /// Register keyword recognizers. Literals are ordered longest-first so a
    /// keyword is never shadowed by one of its own prefixes, regardless of
    /// declaration order.
    pub fn keywords(&mut self, literals: &[&str]) -> Result<&mut Self, ConstructionError> {
        let mut ordered = literals.to_vec();
        ordered.sort_by(|a, b| b.len().cmp(&a.len()));
        for literal in ordered {
            self.recognizers.push(Box::new(keyword(literal)?));
        }
        Ok(self)
    }

    /// Register a recognizer; recognizers are tried in registration order.
    pub fn recognizer(&mut self, recognizer: impl TokenRecognizer + 'static) -> &mut Self {
        self.recognizers.push(Box::new(recognizer));
        self
    }

    pub(crate) fn skip_len(&self, remaining: &str) -> usize {
        self.skip
            .as_ref()
            .and_then(|skip| skip.find(remaining))
            .map(|matched| matched.end())
            .unwrap_or(0)
    }

    pub(crate) fn next_token(&self, remaining: &str) -> Option<Token> {
        self.recognizers
            .iter()
            .find_map(|recognizer| recognizer.recognize(remaining))
    }

    /// Eagerly tokenize the whole input, failing on the first position where
    /// nothing can be skipped or recognized.
    pub fn tokenize(&self, text: &str) -> Result<Vec<Spanned>, LexicalError> {
        let mut tokens = Vec::new();
        let mut offset = 0;
        loop {
            offset += self.skip_len(&text[offset..]);
            if offset == text.len() {
                return Ok(tokens);
            }
            match self.next_token(&text[offset..]) {
                Some(token) => {
                    let len = token.consumed_len();
                    tokens.push(Spanned { token, offset });
                    offset += len;
                }
                None => return Err(LexicalError { at: offset }),
            }
        }
    }

    /// A lazy cursor over the input, lexing on demand; this is what the
    /// grammar layer parses from.
    pub fn stream<'t>(&'t self, source: &'t str) -> TokenStream<'t> {
        TokenStream::new(source, self)
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}
