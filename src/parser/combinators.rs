//! Grammar combinators: cases over token-stream positions.
//!
//! A [`Rule`] is the grammar-layer counterpart of a matching
//! [`Case`](crate::matching::Case): it either fails structurally
//! (`Ok(None)`), succeeds with a capture and the advanced cursor, or aborts
//! with a hard error. The token matchers apply ordinary kernel cases to the
//! token payload, so binding an identifier is `ident(var())` and requiring a
//! specific one is `ident(eq("name"))`: the same machinery at both layers.
//! Captures compose across `seq` with the kernel's combination rule.

use crate::genlex::{Token, TokenStream};
use crate::matching::capture::CombineAll;
use crate::matching::{Bind, Capture, Case, NoBind};

use super::engine::ParseError;

/// A grammar element over a token cursor.
///
/// `Ok(None)` is a structural non-match and makes the caller try its next
/// alternative; `Err` aborts the whole parse. Alternatives explore while
/// semantic failures commit; the two disjunction semantics are distinct on
/// purpose.
pub trait Rule<'t> {
    type Capture;

    fn parse(
        &self,
        at: TokenStream<'t>,
    ) -> Result<Option<(Self::Capture, TokenStream<'t>)>, ParseError>;
}

/// Matches one keyword token, capturing nothing.
pub struct Kwd {
    literal: String,
}

impl<'t> Rule<'t> for Kwd {
    type Capture = NoBind;

    fn parse(
        &self,
        at: TokenStream<'t>,
    ) -> Result<Option<(NoBind, TokenStream<'t>)>, ParseError> {
        match at.next() {
            Some((Token::Keyword(keyword), rest)) if keyword == self.literal => {
                Ok(Some((NoBind, rest)))
            }
            _ => Ok(None),
        }
    }
}

pub fn kwd(literal: impl Into<String>) -> Kwd {
    Kwd {
        literal: literal.into(),
    }
}

macro_rules! token_matcher {
    ($(#[$doc:meta])* $name:ident, $rule:ident, $payload:ty, $token:pat => $value:expr) => {
        $(#[$doc])*
        pub struct $rule<C> {
            sub: C,
        }

        impl<'t, C: Case<$payload>> Rule<'t> for $rule<C> {
            type Capture = C::Capture;

            fn parse(
                &self,
                at: TokenStream<'t>,
            ) -> Result<Option<(Self::Capture, TokenStream<'t>)>, ParseError> {
                match at.next() {
                    Some(($token, rest)) => {
                        Ok(self.sub.attempt(&$value).map(|capture| (capture, rest)))
                    }
                    _ => Ok(None),
                }
            }
        }

        pub fn $name<C: Case<$payload>>(sub: C) -> $rule<C> {
            $rule { sub }
        }
    };
}

token_matcher!(
    /// Matches an identifier token; the kernel case applies to its text.
    ident, Ident, String, Token::Ident(value) => value
);
token_matcher!(
    /// Matches a string token; the kernel case applies to its unquoted
    /// payload.
    string, Str, String, Token::Str { value, .. } => value
);
token_matcher!(
    /// Matches an integer token; the kernel case applies to its value.
    int, Int, i64, Token::Int { value, .. } => value
);
token_matcher!(
    /// Matches a float token; the kernel case applies to its value.
    float, Float, f64, Token::Float { value, .. } => value
);
token_matcher!(
    /// Matches a free-text token; the kernel case applies to its text.
    text, Text, String, Token::Text(value) => value
);

/// A sequence of rules, each consuming from where the previous one stopped.
/// Captures are right-folded in declaration order.
pub struct Seq<T> {
    rules: T,
}

pub fn seq<T>(rules: T) -> Seq<T> {
    Seq { rules }
}

macro_rules! seq_rule {
    ($($R:ident $r:ident),+) => {
        impl<'t, $($R),+> Rule<'t> for Seq<($($R,)+)>
        where
            $($R: Rule<'t>,)+
            ($($R::Capture,)+): CombineAll,
        {
            type Capture = <($($R::Capture,)+) as CombineAll>::Output;

            fn parse(
                &self,
                at: TokenStream<'t>,
            ) -> Result<Option<(Self::Capture, TokenStream<'t>)>, ParseError> {
                let ($($r,)+) = &self.rules;
                let rest = at;
                $(
                    let ($r, rest) = match $r.parse(rest)? {
                        Some(found) => found,
                        None => return Ok(None),
                    };
                )+
                Ok(Some((($($r,)+).combine_all(), rest)))
            }
        }
    };
}

seq_rule!(R1 r1, R2 r2);
seq_rule!(R1 r1, R2 r2, R3 r3);
seq_rule!(R1 r1, R2 r2, R3 r3, R4 r4);
seq_rule!(R1 r1, R2 r2, R3 r3, R4 r4, R5 r5);
seq_rule!(R1 r1, R2 r2, R3 r3, R4 r4, R5 r5, R6 r6);
seq_rule!(R1 r1, R2 r2, R3 r3, R4 r4, R5 r5, R6 r6, R7 r7);
seq_rule!(R1 r1, R2 r2, R3 r3, R4 r4, R5 r5, R6 r6, R7 r7, R8 r8);

/// Ordered alternatives, every one tried from the same cursor; the first
/// success wins. All alternatives must produce the same capture type.
pub struct Alt<T> {
    rules: T,
}

pub fn alt<T>(rules: T) -> Alt<T> {
    Alt { rules }
}

macro_rules! alt_rule {
    ($($R:ident $r:ident),+) => {
        impl<'t, Cap, $($R),+> Rule<'t> for Alt<($($R,)+)>
        where
            $($R: Rule<'t, Capture = Cap>,)+
        {
            type Capture = Cap;

            fn parse(
                &self,
                at: TokenStream<'t>,
            ) -> Result<Option<(Cap, TokenStream<'t>)>, ParseError> {
                let ($($r,)+) = &self.rules;
                $(
                    if let Some(found) = $r.parse(at)? {
                        return Ok(Some(found));
                    }
                )+
                Ok(None)
            }
        }
    };
}

alt_rule!(R1 r1, R2 r2);
alt_rule!(R1 r1, R2 r2, R3 r3);
alt_rule!(R1 r1, R2 r2, R3 r3, R4 r4);
alt_rule!(R1 r1, R2 r2, R3 r3, R4 r4, R5 r5);
alt_rule!(R1 r1, R2 r2, R3 r3, R4 r4, R5 r5, R6 r6);

/// An optional rule. Always succeeds; the capture is always a binding (the
/// inner capture's bound value wrapped in `Option`) and the cursor only
/// advances when the inner rule matched.
pub struct Opt<P> {
    rule: P,
}

impl<'t, P> Rule<'t> for Opt<P>
where
    P: Rule<'t>,
    P::Capture: Capture,
{
    type Capture = Bind<Option<<P::Capture as Capture>::Bound>>;

    fn parse(
        &self,
        at: TokenStream<'t>,
    ) -> Result<Option<(Self::Capture, TokenStream<'t>)>, ParseError> {
        match self.rule.parse(at)? {
            Some((capture, rest)) => Ok(Some((Bind(Some(capture.bound())), rest))),
            None => Ok(Some((Bind(None), at))),
        }
    }
}

pub fn opt<P>(rule: P) -> Opt<P> {
    Opt { rule }
}

/// A nonterminal reference: wraps a parse function and binds its result.
///
/// A sub-parse that ends with no applicable production is a structural
/// non-match at the call site (the caller's alternatives are still open);
/// a semantic failure always propagates.
pub struct Call<F> {
    nonterminal: F,
}

impl<'t, R, F> Rule<'t> for Call<F>
where
    F: Fn(TokenStream<'t>) -> Result<(R, TokenStream<'t>), ParseError>,
{
    type Capture = Bind<R>;

    fn parse(
        &self,
        at: TokenStream<'t>,
    ) -> Result<Option<(Bind<R>, TokenStream<'t>)>, ParseError> {
        match (self.nonterminal)(at) {
            Ok((result, rest)) => Ok(Some((Bind(result), rest))),
            Err(ParseError::NoApplicableCase { .. }) => Ok(None),
            Err(error) => Err(error),
        }
    }
}

pub fn call<'t, R, F>(nonterminal: F) -> Call<F>
where
    F: Fn(TokenStream<'t>) -> Result<(R, TokenStream<'t>), ParseError>,
{
    Call { nonterminal }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genlex::recognizer;
    use crate::genlex::Lexer;
    use crate::matching::{eq, var};

    fn lexer() -> Lexer {
        let mut lexer = Lexer::new();
        lexer.skip(r"\s+").unwrap();
        lexer.keywords(&["let", "=", ";"]).unwrap();
        lexer.recognizer(recognizer::ident(r"[a-z][a-z0-9]*").unwrap());
        lexer.recognizer(recognizer::int());
        lexer
    }

    #[test]
    fn test_kwd_matches_the_exact_keyword() {
        let lexer = lexer();
        let stream = lexer.stream("let x");
        assert!(kwd("let").parse(stream).unwrap().is_some());
        assert!(kwd("=").parse(stream).unwrap().is_none());
    }

    #[test]
    fn test_token_matchers_apply_the_kernel_case() {
        let lexer = lexer();
        let stream = lexer.stream("x 42");

        let (capture, rest) = ident(var()).parse(stream).unwrap().unwrap();
        assert_eq!(capture, Bind("x".to_string()));
        assert!(ident(eq("x")).parse(stream).unwrap().is_some());
        assert!(ident(eq("y")).parse(stream).unwrap().is_none());
        assert_eq!(int(var()).parse(rest).unwrap().unwrap().0, Bind(42));
    }

    #[test]
    fn test_seq_threads_the_cursor_and_folds_captures() {
        let lexer = lexer();
        let stream = lexer.stream("let x = 42 ;");

        let binding = seq((kwd("let"), ident(var()), kwd("="), int(var()), kwd(";")));
        let (capture, rest) = binding.parse(stream).unwrap().unwrap();
        assert_eq!(capture, Bind(("x".to_string(), 42)));
        assert!(rest.at_end());
    }

    #[test]
    fn test_alt_explores_from_the_same_cursor() {
        let lexer = lexer();
        let stream = lexer.stream("42");

        let bare_or_bound = alt((seq((kwd("let"), int(var()))), int(var())));
        // The first alternative fails after trying `let`; the second starts
        // from the same cursor, untouched by the failed attempt.
        let (capture, rest) = bare_or_bound.parse(stream).unwrap().unwrap();
        assert_eq!(capture, Bind(42));
        assert!(rest.at_end());
    }

    #[test]
    fn test_opt_always_binds_an_option() {
        let lexer = lexer();
        let stream = lexer.stream("42");

        let (capture, rest) = opt(int(var())).parse(stream).unwrap().unwrap();
        assert_eq!(capture, Bind(Some(42)));

        let (capture, after) = opt(kwd(";")).parse(rest).unwrap().unwrap();
        assert_eq!(capture, Bind(None));
        assert_eq!(after.offset(), rest.offset());
    }

    #[test]
    fn test_call_treats_failed_subparse_as_non_match() {
        fn never(s: TokenStream) -> Result<(i64, TokenStream), ParseError> {
            Err(ParseError::NoApplicableCase { at: s.offset() })
        }
        fn broken(_: TokenStream) -> Result<(i64, TokenStream), ParseError> {
            Err(ParseError::Semantic("boom".into()))
        }

        let lexer = lexer();
        let stream = lexer.stream("x");

        assert!(call(never).parse(stream).unwrap().is_none());
        assert_eq!(
            call(broken).parse(stream).map(|found| found.map(|(capture, _)| capture)),
            Err(ParseError::Semantic("boom".into()))
        );
    }
}
