//! The JSON lexer and grammar.
//!
//! One function per nonterminal; each builds a committed-choice production
//! table and recursion happens through `call`. The handler assembles the
//! result bottom-up, so the same grammar serves any `JsonHandler`.

use once_cell::sync::Lazy;

use crate::genlex::{recognizer, Lexer, TokenStream};
use crate::matching::var;
use crate::parser::{call, float, int, kwd, opt, seq, string, Grammar, ParseError};

use super::handler::JsonHandler;

static JSON_LEXER: Lazy<Lexer> = Lazy::new(|| {
    let mut lexer = Lexer::new();
    lexer.skip(r"\s+").unwrap();
    lexer
        .keywords(&["{", "}", "[", "]", ":", ",", "true", "false", "null"])
        .unwrap();
    lexer.recognizer(recognizer::string());
    lexer.recognizer(recognizer::hex());
    lexer.recognizer(recognizer::float());
    lexer.recognizer(recognizer::int());
    lexer
});

type Parsed<'t, T> = Result<(T, TokenStream<'t>), ParseError>;

/// Parse a complete JSON document, requiring the whole input to be consumed.
pub fn parse<H: JsonHandler>(handler: &H, text: &str) -> Result<H::Value, ParseError> {
    let stream = JSON_LEXER.stream(text);
    let (result, rest) = value(handler, stream)?;
    if rest.at_end() {
        Ok(result)
    } else {
        Err(ParseError::NoApplicableCase { at: rest.offset() })
    }
}

fn value<'t, H: JsonHandler>(handler: &'t H, at: TokenStream<'t>) -> Parsed<'t, H::Value> {
    let mut grammar = Grammar::new();
    grammar.production(call(|s| object(handler, s)), |v| Ok(v));
    grammar.production(call(|s| array(handler, s)), |v| Ok(v));
    grammar.production(string(var()), |s| Ok(handler.string(s)));
    grammar.production(float(var()), |f| Ok(handler.float(f)));
    grammar.production(int(var()), |i| Ok(handler.int(i)));
    grammar.production(kwd("true"), |()| Ok(handler.boolean(true)));
    grammar.production(kwd("false"), |()| Ok(handler.boolean(false)));
    grammar.production(kwd("null"), |()| Ok(handler.null()));
    grammar.parse(at)
}

fn object<'t, H: JsonHandler>(handler: &'t H, at: TokenStream<'t>) -> Parsed<'t, H::Value> {
    let mut grammar = Grammar::new();
    grammar.production(
        seq((kwd("{"), opt(call(|s| members(handler, s))), kwd("}"))),
        |members| Ok(handler.object(members)),
    );
    grammar.parse(at)
}

fn array<'t, H: JsonHandler>(handler: &'t H, at: TokenStream<'t>) -> Parsed<'t, H::Value> {
    let mut grammar = Grammar::new();
    grammar.production(
        seq((kwd("["), opt(call(|s| values(handler, s))), kwd("]"))),
        |values| Ok(handler.array(values)),
    );
    grammar.parse(at)
}

fn members<'t, H: JsonHandler>(handler: &'t H, at: TokenStream<'t>) -> Parsed<'t, H::Members> {
    let mut grammar = Grammar::new();
    grammar.production(
        seq((
            call(|s| member(handler, s)),
            opt(seq((kwd(","), call(|s| members(handler, s))))),
        )),
        |(head, tail)| Ok(handler.some_members(head, tail)),
    );
    grammar.parse(at)
}

fn member<'t, H: JsonHandler>(handler: &'t H, at: TokenStream<'t>) -> Parsed<'t, H::Member> {
    let mut grammar = Grammar::new();
    grammar.production(
        seq((string(var()), kwd(":"), call(|s| value(handler, s)))),
        |(key, value)| Ok(handler.member(key, value)),
    );
    grammar.parse(at)
}

fn values<'t, H: JsonHandler>(handler: &'t H, at: TokenStream<'t>) -> Parsed<'t, H::Values> {
    let mut grammar = Grammar::new();
    grammar.production(
        seq((
            call(|s| value(handler, s)),
            opt(seq((kwd(","), call(|s| values(handler, s))))),
        )),
        |(head, tail)| Ok(handler.some_values(head, tail)),
    );
    grammar.parse(at)
}
