//! The token cursor.
//!
//! A `TokenStream` is a value-like view of the input at some position,
//! lexing on demand through its lexer. Advancing returns a new cursor and
//! leaves the original valid, so several grammar alternatives can be tried
//! from the same point with no save/restore bookkeeping. The cursor carries
//! its lexer so a grammar can re-lex a region (text inside markup) with a
//! different token set and switch back afterwards.

use std::fmt;

use super::lexer::Lexer;
use super::token::Token;

#[derive(Clone, Copy)]
pub struct TokenStream<'t> {
    source: &'t str,
    offset: usize,
    lexer: &'t Lexer,
}

impl fmt::Debug for TokenStream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStream")
            .field("offset", &self.offset)
            .field("remaining", &&self.source[self.offset..])
            .finish()
    }
}

impl<'t> TokenStream<'t> {
    pub(crate) fn new(source: &'t str, lexer: &'t Lexer) -> Self {
        TokenStream {
            source,
            offset: 0,
            lexer,
        }
    }

    fn skipped(&self) -> usize {
        self.lexer.skip_len(&self.source[self.offset..])
    }

    /// Byte offset of the cursor in the source.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn lexer(&self) -> &'t Lexer {
        self.lexer
    }

    /// True when only skippable input remains.
    pub fn at_end(&self) -> bool {
        self.offset + self.skipped() == self.source.len()
    }

    /// The next token without consuming it, or `None` at end of input or
    /// where nothing can be recognized.
    pub fn peek(&self) -> Option<Token> {
        self.next().map(|(token, _)| token)
    }

    /// The next token and the cursor past it; the current cursor stays
    /// valid.
    pub fn next(&self) -> Option<(Token, TokenStream<'t>)> {
        let start = self.offset + self.skipped();
        if start == self.source.len() {
            return None;
        }
        let token = self.lexer.next_token(&self.source[start..])?;
        let rest = TokenStream {
            source: self.source,
            offset: start + token.consumed_len(),
            lexer: self.lexer,
        };
        Some((token, rest))
    }

    /// The cursor past the next token.
    pub fn advance(&self) -> Option<TokenStream<'t>> {
        self.next().map(|(_, rest)| rest)
    }

    /// The same position viewed through another lexer.
    pub fn with_lexer(&self, lexer: &'t Lexer) -> TokenStream<'t> {
        TokenStream {
            source: self.source,
            offset: self.offset,
            lexer,
        }
    }
}
