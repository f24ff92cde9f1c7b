//! Predicates for the primitive and built-in type families.
//!
//! All of these dispatch on the value's intrinsic tag, so the wrapper-object
//! form of a primitive satisfies the same predicate as the primitive itself,
//! and values from foreign realms classify like local ones.

use super::complement;
use crate::value::{TypeTag, Value};

/// Checks whether the value is an array.
///
/// # Examples
///
/// ```rust
/// use adjunct::predicate::is_array;
/// use adjunct::value::Value;
///
/// assert!(is_array(&Value::Array(vec![])));
/// assert!(!is_array(&Value::from("not an array")));
/// ```
#[inline]
#[must_use]
pub fn is_array(value: &Value) -> bool {
    value.type_tag() == TypeTag::Array
}

/// Checks whether the value is a boolean, primitive or wrapped.
///
/// # Examples
///
/// ```rust
/// use adjunct::predicate::is_boolean;
/// use adjunct::value::{PrimitiveWrapper, Value};
///
/// assert!(is_boolean(&Value::Bool(true)));
/// assert!(is_boolean(&Value::Wrapper(PrimitiveWrapper::Bool(false))));
/// assert!(!is_boolean(&Value::Number(0.0)));
/// ```
#[inline]
#[must_use]
pub fn is_boolean(value: &Value) -> bool {
    value.type_tag() == TypeTag::Boolean
}

/// Checks whether the value is a string, primitive or wrapped.
///
/// # Examples
///
/// ```rust
/// use adjunct::predicate::is_string;
/// use adjunct::value::{PrimitiveWrapper, Value};
///
/// assert!(is_string(&Value::from("hi")));
/// assert!(is_string(&Value::Wrapper(PrimitiveWrapper::String(String::from("hi")))));
/// ```
#[inline]
#[must_use]
pub fn is_string(value: &Value) -> bool {
    value.type_tag() == TypeTag::String
}

/// Checks whether the value is a number, primitive or wrapped.
///
/// `NaN` and the infinities are numbers; finiteness is a separate check
/// ([`is_finite`](super::is_finite)).
#[inline]
#[must_use]
pub fn is_number(value: &Value) -> bool {
    value.type_tag() == TypeTag::Number
}

/// Checks whether the value is null.
#[inline]
#[must_use]
pub fn is_null(value: &Value) -> bool {
    value.type_tag() == TypeTag::Null
}

/// Checks whether the value is undefined.
#[inline]
#[must_use]
pub fn is_undefined(value: &Value) -> bool {
    value.type_tag() == TypeTag::Undefined
}

/// Checks whether the value is a function of any subtype.
///
/// Plain, generator, and async functions all satisfy this; use
/// [`is_generator_function`](super::is_generator_function) or
/// [`is_async_function`](super::is_async_function) to narrow.
#[inline]
#[must_use]
pub fn is_function(value: &Value) -> bool {
    matches!(
        value.type_tag(),
        TypeTag::Function | TypeTag::GeneratorFunction | TypeTag::AsyncFunction
    )
}

/// Checks whether the value is a date.
#[inline]
#[must_use]
pub fn is_date(value: &Value) -> bool {
    value.type_tag() == TypeTag::Date
}

complement!(array, boolean, string, number, null, undefined, function, date);
