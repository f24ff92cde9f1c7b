//! Nil and emptiness predicates.
//!
//! "Nil" is null-or-undefined. "Empty" is type-dependent: a value is empty
//! when it is its own type's empty representation: the empty string
//! (primitive or wrapped), the empty array, the object with no own entries.
//! Types without an empty representation (numbers, booleans, functions,
//! dates) are never empty, and neither are the nil values themselves; the
//! combined question is what [`is_nil_or_empty`] answers.

use super::complement;
use crate::value::{PrimitiveWrapper, Value};

/// Checks whether the value is nil: null or undefined.
///
/// # Examples
///
/// ```rust
/// use adjunct::predicate::is_nil;
/// use adjunct::value::Value;
///
/// assert!(is_nil(&Value::Null));
/// assert!(is_nil(&Value::Undefined));
/// assert!(!is_nil(&Value::Bool(false)));
/// ```
#[inline]
#[must_use]
pub fn is_nil(value: &Value) -> bool {
    matches!(value, Value::Null | Value::Undefined)
}

/// Checks whether the value is its type's empty representation.
///
/// Nil values are not empty representations of anything, so both return
/// `false` here; use [`is_nil_or_empty`] for the combined check.
///
/// # Examples
///
/// ```rust
/// use adjunct::object;
/// use adjunct::predicate::is_empty;
/// use adjunct::value::Value;
///
/// assert!(is_empty(&Value::from("")));
/// assert!(is_empty(&Value::Array(vec![])));
/// assert!(is_empty(&Value::from(object! {})));
/// assert!(!is_empty(&Value::Null));
/// assert!(!is_empty(&Value::Number(0.0)));
/// ```
#[inline]
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::String(text) | Value::Wrapper(PrimitiveWrapper::String(text)) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(object) => object.entries().is_empty(),
        _ => false,
    }
}

/// Checks whether the value is nil or its type's empty representation.
///
/// # Examples
///
/// ```rust
/// use adjunct::object;
/// use adjunct::predicate::is_nil_or_empty;
/// use adjunct::value::Value;
///
/// assert!(is_nil_or_empty(&Value::Null));
/// assert!(is_nil_or_empty(&Value::Undefined));
/// assert!(is_nil_or_empty(&Value::from("")));
/// assert!(is_nil_or_empty(&Value::Array(vec![])));
/// assert!(is_nil_or_empty(&Value::from(object! {})));
/// assert!(!is_nil_or_empty(&Value::Array(vec![Value::Number(1.0)])));
/// ```
#[inline]
#[must_use]
pub fn is_nil_or_empty(value: &Value) -> bool {
    is_nil(value) || is_empty(value)
}

complement!(nil, empty, nil_or_empty);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FunctionValue;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Null)]
    #[case(Value::Undefined)]
    #[case(Value::from(""))]
    #[case(Value::Array(vec![]))]
    #[case(Value::from(crate::object! {}))]
    fn the_nil_or_empty_matrix(#[case] value: Value) {
        assert!(is_nil_or_empty(&value));
    }

    #[rstest]
    #[case(Value::Array(vec![Value::Number(1.0)]))]
    #[case(Value::from("x"))]
    #[case(Value::from(crate::object! { "a" => 1 }))]
    #[case(Value::Number(0.0))]
    #[case(Value::Bool(false))]
    fn populated_and_unrepresented_values_are_not_nil_or_empty(#[case] value: Value) {
        assert!(!is_nil_or_empty(&value));
    }

    #[rstest]
    fn wrapped_empty_strings_are_empty() {
        assert!(is_empty(&Value::Wrapper(PrimitiveWrapper::String(String::new()))));
        assert!(is_not_empty(&Value::Wrapper(PrimitiveWrapper::String(String::from("x")))));
    }

    /// Nil values have no empty representation, so they are "not empty".
    #[rstest]
    fn nil_values_are_not_empty() {
        assert!(is_not_empty(&Value::Null));
        assert!(is_not_empty(&Value::Undefined));
    }

    #[rstest]
    fn values_without_an_empty_representation_are_never_empty() {
        assert!(is_not_empty(&Value::Number(0.0)));
        assert!(is_not_empty(&Value::Bool(false)));
        assert!(is_not_empty(&Value::Function(FunctionValue::plain("run"))));
    }

    #[rstest]
    fn nil_detection_is_exactly_null_or_undefined() {
        assert!(is_nil(&Value::Null));
        assert!(is_nil(&Value::Undefined));
        assert!(is_not_nil(&Value::from("")));
        assert!(is_not_nil(&Value::Number(0.0)));
    }
}
