//! The JSON handler contract: one method per grammar production.
//!
//! Implementors choose the output types, so the same grammar can validate,
//! build trees, or count nodes. Methods are pure functions from
//! already-matched sub-results to a new result value.

pub trait JsonHandler {
    type Value;
    type Members;
    type Member;
    type Values;

    fn object(&self, members: Option<Self::Members>) -> Self::Value;
    fn array(&self, values: Option<Self::Values>) -> Self::Value;
    fn some_members(&self, head: Self::Member, tail: Option<Self::Members>) -> Self::Members;
    fn member(&self, key: String, value: Self::Value) -> Self::Member;
    fn some_values(&self, head: Self::Value, tail: Option<Self::Values>) -> Self::Values;
    fn int(&self, value: i64) -> Self::Value;
    fn float(&self, value: f64) -> Self::Value;
    fn string(&self, value: String) -> Self::Value;
    fn boolean(&self, value: bool) -> Self::Value;
    fn null(&self) -> Self::Value;
}
