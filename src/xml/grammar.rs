//! The XML lexers and grammar.
//!
//! Markup and content want different token sets, so four lexers share one
//! cursor: the element lexer drives the structure, and the text, comment and
//! CDATA regions re-lex from the same position with their own lexer before
//! handing the cursor back. Open/close tag agreement is a semantic check in
//! the element handler, distinct from structural non-match.

use once_cell::sync::Lazy;

use crate::genlex::{recognizer, Lexer, TokenStream};
use crate::matching::var;
use crate::parser::{alt, call, ident, kwd, opt, seq, string, text, Grammar, ParseError};

use super::handler::XmlHandler;

static ELEMENT_LEXER: Lazy<Lexer> = Lazy::new(|| {
    let mut lexer = Lexer::new();
    lexer.skip(r"\s+").unwrap();
    lexer.keywords(&["<?", "<", ">", "</", "/>", "="]).unwrap();
    lexer.recognizer(recognizer::string());
    lexer.recognizer(recognizer::quoted_string());
    lexer.recognizer(recognizer::ident(r"[A-Za-z_][A-Za-z0-9_.\-]*").unwrap());
    lexer
});

static TEXT_LEXER: Lazy<Lexer> = Lazy::new(|| {
    let mut lexer = Lexer::new();
    lexer.recognizer(recognizer::text(r"[^<]+").unwrap());
    lexer
});

static COMMENT_LEXER: Lazy<Lexer> = Lazy::new(|| {
    let mut lexer = Lexer::new();
    lexer.keywords(&["<!--", "-->"]).unwrap();
    lexer.recognizer(recognizer::text_until("--").unwrap());
    lexer
});

static CDATA_LEXER: Lazy<Lexer> = Lazy::new(|| {
    let mut lexer = Lexer::new();
    lexer.keywords(&["<![CDATA[", "]]>"]).unwrap();
    lexer.recognizer(recognizer::text_until("]]>").unwrap());
    lexer
});

type Parsed<'t, T> = Result<(T, TokenStream<'t>), ParseError>;

/// Parse a complete XML element, requiring the whole input to be consumed.
pub fn parse<H: XmlHandler>(handler: &H, source: &str) -> Result<H::Element, ParseError> {
    let stream = ELEMENT_LEXER.stream(source);
    let (result, rest) = element(handler, stream)?;
    if rest.at_end() {
        Ok(result)
    } else {
        Err(ParseError::NoApplicableCase { at: rest.offset() })
    }
}

fn element<'t, H: XmlHandler>(handler: &'t H, at: TokenStream<'t>) -> Parsed<'t, H::Element> {
    let mut grammar = Grammar::new();
    grammar.production(
        seq((
            kwd("<"),
            ident(var()),
            opt(call(|s| attributes(handler, s))),
            kwd("/>"),
        )),
        |(name, attributes)| Ok(handler.element(name, attributes, None)),
    );
    grammar.production(
        seq((
            kwd("<"),
            ident(var()),
            opt(call(|s| attributes(handler, s))),
            kwd(">"),
            opt(call(|s| contents(handler, s))),
            kwd("</"),
            ident(var()),
            kwd(">"),
        )),
        |(open, (attributes, (children, close)))| {
            if open == close {
                Ok(handler.element(open, attributes, children))
            } else {
                Err(ParseError::Semantic(format!(
                    "mismatched tags <{}> and </{}>",
                    open, close
                )))
            }
        },
    );
    grammar.parse(at)
}

fn contents<'t, H: XmlHandler>(handler: &'t H, at: TokenStream<'t>) -> Parsed<'t, H::Elements> {
    let mut grammar = Grammar::new();
    grammar.production(
        seq((
            alt((
                call(|s| comment(handler, s)),
                call(|s| cdata(handler, s)),
                call(|s| text_node(handler, s)),
                call(|s| element(handler, s)),
            )),
            opt(call(|s| contents(handler, s))),
        )),
        |(head, tail)| Ok(handler.some_elements(head, tail)),
    );
    grammar.parse(at)
}

fn attributes<'t, H: XmlHandler>(handler: &'t H, at: TokenStream<'t>) -> Parsed<'t, H::Attributes> {
    let mut grammar = Grammar::new();
    grammar.production(
        seq((
            ident(var()),
            kwd("="),
            string(var()),
            opt(call(|s| attributes(handler, s))),
        )),
        |(name, (value, tail))| Ok(handler.some_attributes(handler.attribute(name, value), tail)),
    );
    grammar.parse(at)
}

fn text_node<'t, H: XmlHandler>(handler: &'t H, at: TokenStream<'t>) -> Parsed<'t, H::Element> {
    let mut grammar = Grammar::new();
    grammar.production(text(var()), |content| Ok(handler.text(content)));
    let (result, rest) = grammar.parse(at.with_lexer(&TEXT_LEXER))?;
    Ok((result, rest.with_lexer(at.lexer())))
}

fn comment<'t, H: XmlHandler>(handler: &'t H, at: TokenStream<'t>) -> Parsed<'t, H::Element> {
    let mut grammar = Grammar::new();
    grammar.production(
        seq((kwd("<!--"), text(var()), kwd("-->"))),
        |content| Ok(handler.comment(content)),
    );
    let (result, rest) = grammar.parse(at.with_lexer(&COMMENT_LEXER))?;
    Ok((result, rest.with_lexer(at.lexer())))
}

fn cdata<'t, H: XmlHandler>(handler: &'t H, at: TokenStream<'t>) -> Parsed<'t, H::Element> {
    let mut grammar = Grammar::new();
    grammar.production(
        seq((kwd("<![CDATA["), text(var()), kwd("]]>"))),
        |content| Ok(handler.text(content)),
    );
    let (result, rest) = grammar.parse(at.with_lexer(&CDATA_LEXER))?;
    Ok((result, rest.with_lexer(at.lexer())))
}
