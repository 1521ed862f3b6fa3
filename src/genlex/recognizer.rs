//! Token recognizers.
//!
//! A recognizer turns a prefix of the remaining input into one token, or
//! nothing. Recognizers are anchored to the start of the remaining text and
//! never produce a zero-length token; pattern-based recognizers that could
//! match an empty prefix are rejected when built, which is the guard against
//! a lexer that stops advancing.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::token::Token;

/// Raised while building a recognizer or a lexer, before any input is
/// processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// The pattern or literal can match an empty prefix.
    EmptyMatch(String),
    /// The pattern is not a valid regular expression.
    InvalidPattern(String),
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionError::EmptyMatch(pattern) => {
                write!(f, "pattern {:?} can match an empty prefix", pattern)
            }
            ConstructionError::InvalidPattern(message) => {
                write!(f, "invalid pattern: {}", message)
            }
        }
    }
}

impl std::error::Error for ConstructionError {}

/// Turns a prefix of `remaining` into one token.
pub trait TokenRecognizer: Send + Sync {
    fn recognize(&self, remaining: &str) -> Option<Token>;
}

/// Compile a pattern anchored to the start of the input, rejecting patterns
/// that can match the empty string.
pub(crate) fn anchored(pattern: &str) -> Result<Regex, ConstructionError> {
    let regex = Regex::new(&format!("^(?:{})", pattern))
        .map_err(|error| ConstructionError::InvalidPattern(error.to_string()))?;
    if regex.is_match("") {
        return Err(ConstructionError::EmptyMatch(pattern.to_string()));
    }
    Ok(regex)
}

/// Recognizes an exact literal prefix as a keyword token.
pub struct KeywordRecognizer {
    literal: String,
}

impl TokenRecognizer for KeywordRecognizer {
    fn recognize(&self, remaining: &str) -> Option<Token> {
        if remaining.starts_with(&self.literal) {
            Some(Token::Keyword(self.literal.clone()))
        } else {
            None
        }
    }
}

pub fn keyword(literal: impl Into<String>) -> Result<KeywordRecognizer, ConstructionError> {
    let literal = literal.into();
    if literal.is_empty() {
        return Err(ConstructionError::EmptyMatch(literal));
    }
    Ok(KeywordRecognizer { literal })
}

/// Recognizes an identifier matching a caller-supplied pattern.
pub struct IdentRecognizer {
    regex: Regex,
}

impl TokenRecognizer for IdentRecognizer {
    fn recognize(&self, remaining: &str) -> Option<Token> {
        let matched = self.regex.find(remaining)?;
        Some(Token::Ident(matched.as_str().to_string()))
    }
}

pub fn ident(pattern: &str) -> Result<IdentRecognizer, ConstructionError> {
    Ok(IdentRecognizer {
        regex: anchored(pattern)?,
    })
}

static DOUBLE_QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^"[^"]*""#).unwrap());
static SINGLE_QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^'[^']*'").unwrap());
static INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+").unwrap());
static HEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0[xX][0-9a-fA-F]+").unwrap());
static FLOAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+\.\d+(?:[eE][+-]?\d+)?").unwrap());

/// Recognizes a double-quoted string; the payload drops the quotes.
pub struct StringRecognizer;

impl TokenRecognizer for StringRecognizer {
    fn recognize(&self, remaining: &str) -> Option<Token> {
        let matched = DOUBLE_QUOTED.find(remaining)?;
        let raw = matched.as_str();
        Some(Token::Str {
            raw_len: raw.len(),
            value: raw[1..raw.len() - 1].to_string(),
        })
    }
}

pub fn string() -> StringRecognizer {
    StringRecognizer
}

/// Recognizes a single-quoted string; the payload drops the quotes.
pub struct QuotedStringRecognizer;

impl TokenRecognizer for QuotedStringRecognizer {
    fn recognize(&self, remaining: &str) -> Option<Token> {
        let matched = SINGLE_QUOTED.find(remaining)?;
        let raw = matched.as_str();
        Some(Token::Str {
            raw_len: raw.len(),
            value: raw[1..raw.len() - 1].to_string(),
        })
    }
}

pub fn quoted_string() -> QuotedStringRecognizer {
    QuotedStringRecognizer
}

/// Recognizes a decimal integer, with optional sign.
pub struct IntRecognizer;

impl TokenRecognizer for IntRecognizer {
    fn recognize(&self, remaining: &str) -> Option<Token> {
        let matched = INT.find(remaining)?;
        let raw = matched.as_str();
        let value = raw.parse::<i64>().ok()?;
        Some(Token::Int {
            raw_len: raw.len(),
            value,
        })
    }
}

pub fn int() -> IntRecognizer {
    IntRecognizer
}

/// Recognizes a hexadecimal integer (`0x..`).
pub struct HexRecognizer;

impl TokenRecognizer for HexRecognizer {
    fn recognize(&self, remaining: &str) -> Option<Token> {
        let matched = HEX.find(remaining)?;
        let raw = matched.as_str();
        let value = i64::from_str_radix(&raw[2..], 16).ok()?;
        Some(Token::Int {
            raw_len: raw.len(),
            value,
        })
    }
}

pub fn hex() -> HexRecognizer {
    HexRecognizer
}

/// Recognizes a decimal floating-point number (a dot is required).
pub struct FloatRecognizer;

impl TokenRecognizer for FloatRecognizer {
    fn recognize(&self, remaining: &str) -> Option<Token> {
        let matched = FLOAT.find(remaining)?;
        let raw = matched.as_str();
        let value = raw.parse::<f64>().ok()?;
        Some(Token::Float {
            raw_len: raw.len(),
            value,
        })
    }
}

pub fn float() -> FloatRecognizer {
    FloatRecognizer
}

/// Recognizes free text matching a caller-supplied pattern.
pub struct TextRecognizer {
    regex: Regex,
}

impl TokenRecognizer for TextRecognizer {
    fn recognize(&self, remaining: &str) -> Option<Token> {
        let matched = self.regex.find(remaining)?;
        Some(Token::Text(matched.as_str().to_string()))
    }
}

pub fn text(pattern: &str) -> Result<TextRecognizer, ConstructionError> {
    Ok(TextRecognizer {
        regex: anchored(pattern)?,
    })
}

/// Recognizes free text up to (not including) a stop sequence.
///
/// A stop sequence right at the cursor is a non-match, so tokens never have
/// zero length; input without the stop sequence does not match at all.
pub struct TextUntilRecognizer {
    stop: String,
}

impl TokenRecognizer for TextUntilRecognizer {
    fn recognize(&self, remaining: &str) -> Option<Token> {
        let end = remaining.find(&self.stop)?;
        if end == 0 {
            return None;
        }
        Some(Token::Text(remaining[..end].to_string()))
    }
}

pub fn text_until(stop: impl Into<String>) -> Result<TextUntilRecognizer, ConstructionError> {
    let stop = stop.into();
    if stop.is_empty() {
        return Err(ConstructionError::EmptyMatch(stop));
    }
    Ok(TextUntilRecognizer { stop })
}
