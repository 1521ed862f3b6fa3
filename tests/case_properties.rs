//! Property-based tests: matching and tokenization are pure functions of
//! their input, so repeating them can never change the outcome.

use proptest::prelude::*;

use valise::genlex::{recognizer, Lexer};
use valise::matching::{any, cons, eq, nil, some, var, Bind, Case, NoBind};

proptest! {
    #[test]
    fn prop_any_always_matches(value: i64) {
        prop_assert_eq!(any().attempt(&value), Some(NoBind));
    }

    #[test]
    fn prop_nil_matches_exactly_the_sentinel(value: Option<i32>) {
        let matched = nil().attempt(&value).is_some();
        prop_assert_eq!(matched, value.is_none());
    }

    #[test]
    fn prop_constant_agrees_with_equality(expected: i64, value: i64) {
        let matched = eq(expected).attempt(&value).is_some();
        prop_assert_eq!(matched, expected == value);
    }

    #[test]
    fn prop_attempt_is_idempotent(value: Option<i32>) {
        let case = some(eq(7));
        prop_assert_eq!(case.attempt(&value), case.attempt(&value));
    }

    #[test]
    fn prop_cons_binding_recovers_head_and_tail(list: Vec<i32>) {
        let outcome = cons(var(), var()).attempt(&list[..]);
        match outcome {
            Some(Bind((head, tail))) => {
                prop_assert_eq!(head, list[0]);
                prop_assert_eq!(tail, list[1..].to_vec());
            }
            None => prop_assert!(list.is_empty()),
        }
    }

    #[test]
    fn prop_tokenize_is_deterministic(input in "[a-z0-9 .+()]{0,40}") {
        let mut lexer = Lexer::new();
        lexer.skip(r"\s+").unwrap();
        lexer.keywords(&["(", ")", "+"]).unwrap();
        lexer.recognizer(recognizer::float());
        lexer.recognizer(recognizer::int());
        lexer.recognizer(recognizer::ident(r"[a-z][a-z0-9]*").unwrap());

        prop_assert_eq!(lexer.tokenize(&input), lexer.tokenize(&input));
    }
}
