//! XML tree building: a handler assembling a small element tree.

use serde::{Deserialize, Serialize};

use super::handler::XmlHandler;

/// A parsed XML node. CDATA content becomes a `Text` node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    Element {
        name: String,
        attributes: Vec<(String, String)>,
        children: Vec<Node>,
    },
    Text(String),
    Comment(String),
}

pub struct TreeBuilder;

impl XmlHandler for TreeBuilder {
    type Element = Node;
    type Elements = Vec<Node>;
    type Attribute = (String, String);
    type Attributes = Vec<(String, String)>;

    fn element(
        &self,
        name: String,
        attributes: Option<Vec<(String, String)>>,
        children: Option<Vec<Node>>,
    ) -> Node {
        Node::Element {
            name,
            attributes: attributes.unwrap_or_default(),
            children: children.unwrap_or_default(),
        }
    }

    fn some_elements(&self, head: Node, tail: Option<Vec<Node>>) -> Vec<Node> {
        let mut children = tail.unwrap_or_default();
        children.insert(0, head);
        children
    }

    fn text(&self, content: String) -> Node {
        Node::Text(content)
    }

    fn comment(&self, content: String) -> Node {
        Node::Comment(content)
    }

    fn attribute(&self, name: String, value: String) -> (String, String) {
        (name, value)
    }

    fn some_attributes(
        &self,
        head: (String, String),
        tail: Option<Vec<(String, String)>>,
    ) -> Vec<(String, String)> {
        let mut attributes = tail.unwrap_or_default();
        attributes.insert(0, head);
        attributes
    }
}
