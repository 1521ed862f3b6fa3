//! XML demonstration layer: client code over the grammar combinators.
//!
//! The grammar is written once against [`XmlHandler`](handler::XmlHandler);
//! validation and tree building are two handler implementations. Mismatched
//! open/close tag names surface as [`ParseError::Semantic`], not as a
//! structural non-match.

pub mod builder;
pub mod grammar;
pub mod handler;
pub mod validator;

pub use builder::{Node, TreeBuilder};
pub use grammar::parse;
pub use handler::XmlHandler;
pub use validator::XmlValidator;

use crate::parser::ParseError;

/// True when the source is a single well-formed element.
pub fn validate(source: &str) -> bool {
    parse(&XmlValidator, source).unwrap_or(false)
}

/// Build the element tree for the source.
pub fn to_tree(source: &str) -> Result<Node, ParseError> {
    parse(&TreeBuilder, source)
}
