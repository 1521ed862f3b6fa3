//! XML validation: a handler whose every output is a boolean.

use super::handler::XmlHandler;

pub struct XmlValidator;

impl XmlHandler for XmlValidator {
    type Element = bool;
    type Elements = bool;
    type Attribute = bool;
    type Attributes = bool;

    fn element(&self, _name: String, attributes: Option<bool>, children: Option<bool>) -> bool {
        attributes.unwrap_or(true) && children.unwrap_or(true)
    }

    fn some_elements(&self, head: bool, tail: Option<bool>) -> bool {
        head && tail.unwrap_or(true)
    }

    fn text(&self, _: String) -> bool {
        true
    }

    fn comment(&self, _: String) -> bool {
        true
    }

    fn attribute(&self, _name: String, _value: String) -> bool {
        true
    }

    fn some_attributes(&self, head: bool, tail: Option<bool>) -> bool {
        head && tail.unwrap_or(true)
    }
}
