//! The XML layer end to end: validation tables, the element tree builder,
//! and the semantic tag-agreement check.

use rstest::rstest;

use valise::parser::ParseError;
use valise::xml::{parse, to_tree, validate, Node, XmlValidator};

#[rstest]
#[case::self_closing("<a/>")]
#[case::empty_element("<a></a>")]
#[case::one_attribute("<a x=\"1\"/>")]
#[case::single_quoted_attribute("<a x='1'/>")]
#[case::several_attributes("<a x=\"1\" y=\"2\" z=\"3\"/>")]
#[case::nested_elements("<a><b><c/></b></a>")]
#[case::text_content("<a>hello world</a>")]
#[case::comment_content("<a><!-- note --></a>")]
#[case::cdata_content("<a><![CDATA[5 < 6]]></a>")]
#[case::mixed_content("<a x=\"1\"><b/>text<!-- c --></a>")]
fn test_validate_accepts(#[case] source: &str) {
    assert!(validate(source));
}

#[rstest]
#[case::unclosed("<a>")]
#[case::missing_attribute_value("<a x=/>")]
#[case::bare_text("plain text")]
#[case::stray_close("</a>")]
#[case::unfinished_open("<")]
#[case::empty_input("")]
#[case::trailing_garbage("<a/><b/>")]
fn test_validate_rejects(#[case] source: &str) {
    assert!(!validate(source));
}

#[test]
fn test_mismatched_tags_are_semantic_not_structural() {
    let outcome = parse(&XmlValidator, "<a></b>");
    assert!(matches!(outcome, Err(ParseError::Semantic(_))));
    assert_eq!(
        outcome.unwrap_err().to_string(),
        "semantic mismatch: mismatched tags <a> and </b>"
    );
}

#[test]
fn test_nested_mismatch_propagates() {
    assert!(matches!(
        parse(&XmlValidator, "<a><b></c></a>"),
        Err(ParseError::Semantic(_))
    ));
}

#[test]
fn test_tree_for_a_self_closing_element() {
    assert_eq!(
        to_tree("<a x=\"1\"/>").unwrap(),
        Node::Element {
            name: "a".into(),
            attributes: vec![("x".into(), "1".into())],
            children: vec![],
        }
    );
}

#[test]
fn test_tree_keeps_attribute_order() {
    let tree = to_tree("<a x=\"1\" y=\"2\" z=\"3\"/>").unwrap();
    assert_eq!(
        tree,
        Node::Element {
            name: "a".into(),
            attributes: vec![
                ("x".into(), "1".into()),
                ("y".into(), "2".into()),
                ("z".into(), "3".into()),
            ],
            children: vec![],
        }
    );
}

#[test]
fn test_tree_for_mixed_content() {
    let tree = to_tree("<a x=\"1\"><b/>hello<!-- note --><![CDATA[5 < 6]]></a>").unwrap();
    assert_eq!(
        tree,
        Node::Element {
            name: "a".into(),
            attributes: vec![("x".into(), "1".into())],
            children: vec![
                Node::Element {
                    name: "b".into(),
                    attributes: vec![],
                    children: vec![],
                },
                Node::Text("hello".into()),
                Node::Comment(" note ".into()),
                Node::Text("5 < 6".into()),
            ],
        }
    );
}

#[test]
fn test_whitespace_between_children_is_text() {
    let tree = to_tree("<a> <b/> </a>").unwrap();
    assert_eq!(
        tree,
        Node::Element {
            name: "a".into(),
            attributes: vec![],
            children: vec![
                Node::Text(" ".into()),
                Node::Element {
                    name: "b".into(),
                    attributes: vec![],
                    children: vec![],
                },
                Node::Text(" ".into()),
            ],
        }
    );
}

#[test]
fn test_text_only_content() {
    let tree = to_tree("<greeting>hello, world</greeting>").unwrap();
    assert_eq!(
        tree,
        Node::Element {
            name: "greeting".into(),
            attributes: vec![],
            children: vec![Node::Text("hello, world".into())],
        }
    );
}
