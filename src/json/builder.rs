//! JSON tree building: a handler assembling `serde_json::Value`.
//!
//! Member and value lists are matched head-first but built tail-first, so
//! the head is pushed onto the front of whatever the tail produced.

use serde_json::{Map, Number, Value};

use super::handler::JsonHandler;

pub struct ValueBuilder;

impl JsonHandler for ValueBuilder {
    type Value = Value;
    type Members = Map<String, Value>;
    type Member = (String, Value);
    type Values = Vec<Value>;

    fn object(&self, members: Option<Map<String, Value>>) -> Value {
        Value::Object(members.unwrap_or_default())
    }

    fn array(&self, values: Option<Vec<Value>>) -> Value {
        Value::Array(values.unwrap_or_default())
    }

    fn some_members(&self, head: (String, Value), tail: Option<Map<String, Value>>) -> Map<String, Value> {
        let mut members = tail.unwrap_or_default();
        members.insert(head.0, head.1);
        members
    }

    fn member(&self, key: String, value: Value) -> (String, Value) {
        (key, value)
    }

    fn some_values(&self, head: Value, tail: Option<Vec<Value>>) -> Vec<Value> {
        let mut values = tail.unwrap_or_default();
        values.insert(0, head);
        values
    }

    fn int(&self, value: i64) -> Value {
        Value::Number(value.into())
    }

    fn float(&self, value: f64) -> Value {
        // The lexer only produces finite floats, but Number is total anyway.
        Number::from_f64(value).map(Value::Number).unwrap_or(Value::Null)
    }

    fn string(&self, value: String) -> Value {
        Value::String(value)
    }

    fn boolean(&self, value: bool) -> Value {
        Value::Bool(value)
    }

    fn null(&self) -> Value {
        Value::Null
    }
}
