//! JSON validation: a handler whose every output is a boolean.

use super::handler::JsonHandler;

pub struct JsonValidator;

impl JsonHandler for JsonValidator {
    type Value = bool;
    type Members = bool;
    type Member = bool;
    type Values = bool;

    fn object(&self, members: Option<bool>) -> bool {
        members.unwrap_or(true)
    }

    fn array(&self, values: Option<bool>) -> bool {
        values.unwrap_or(true)
    }

    fn some_members(&self, head: bool, tail: Option<bool>) -> bool {
        head && tail.unwrap_or(true)
    }

    fn member(&self, _key: String, value: bool) -> bool {
        value
    }

    fn some_values(&self, head: bool, tail: Option<bool>) -> bool {
        head && tail.unwrap_or(true)
    }

    fn int(&self, _: i64) -> bool {
        true
    }

    fn float(&self, _: f64) -> bool {
        true
    }

    fn string(&self, _: String) -> bool {
        true
    }

    fn boolean(&self, _: bool) -> bool {
        true
    }

    fn null(&self) -> bool {
        true
    }
}
