//! Predicates on the object category and the plain-object shape.
//!
//! Three widening levels:
//!
//! - [`is_object`]: the whole object category: objects, arrays, dates,
//!   functions, wrapper objects.
//! - [`is_object_like`]: the object category minus functions (non-null
//!   values whose basic runtime category is "object").
//! - [`is_plain_object`]: only objects created as a literal, via the bare
//!   object constructor, or with no prototype; class instances and built-in
//!   subtypes are excluded.

use super::complement;
use crate::value::{Prototype, Value};

/// Checks whether the value belongs to the object category.
///
/// Arrays, dates, functions, and wrapper objects all count; primitives,
/// null, and undefined do not.
///
/// # Examples
///
/// ```rust
/// use adjunct::predicate::is_object;
/// use adjunct::value::{FunctionValue, Value};
///
/// assert!(is_object(&Value::Array(vec![])));
/// assert!(is_object(&Value::Function(FunctionValue::plain("run"))));
/// assert!(!is_object(&Value::from("text")));
/// assert!(!is_object(&Value::Null));
/// ```
#[inline]
#[must_use]
pub fn is_object(value: &Value) -> bool {
    value.is_object_category()
}

/// Checks whether the value is object-like: in the object category and not
/// a function.
///
/// # Examples
///
/// ```rust
/// use adjunct::predicate::is_object_like;
/// use adjunct::value::{FunctionValue, Value};
///
/// assert!(is_object_like(&Value::Array(vec![])));
/// assert!(!is_object_like(&Value::Function(FunctionValue::plain("run"))));
/// assert!(!is_object_like(&Value::Null));
/// ```
#[inline]
#[must_use]
pub fn is_object_like(value: &Value) -> bool {
    value.is_object_category() && !matches!(value, Value::Function(_))
}

/// Checks whether the value is a plain object.
///
/// Plain means created as an object literal, via the bare object
/// constructor, or with no prototype at all. Class instances, arrays,
/// dates, and wrapper objects are not plain.
///
/// # Examples
///
/// ```rust
/// use adjunct::object;
/// use adjunct::predicate::is_plain_object;
/// use adjunct::value::{ObjectValue, Value};
///
/// assert!(is_plain_object(&Value::from(object! {})));
/// assert!(is_plain_object(&Value::Object(ObjectValue::with_null_prototype(object! {}))));
/// assert!(!is_plain_object(&Value::Object(ObjectValue::class_instance("Widget", object! {}))));
/// assert!(!is_plain_object(&Value::Array(vec![])));
/// ```
#[inline]
#[must_use]
pub fn is_plain_object(value: &Value) -> bool {
    matches!(
        value,
        Value::Object(object) if matches!(object.prototype(), Prototype::Base | Prototype::Null)
    )
}

complement!(object, object_like, plain_object);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{FunctionValue, ObjectValue, PrimitiveWrapper};
    use chrono::DateTime;
    use rstest::rstest;

    fn sample_date() -> Value {
        Value::Date(DateTime::from_timestamp_millis(0).expect("epoch is in range"))
    }

    #[rstest]
    fn the_object_category_includes_every_object_form() {
        assert!(is_object(&Value::from(crate::object! {})));
        assert!(is_object(&Value::Array(vec![])));
        assert!(is_object(&sample_date()));
        assert!(is_object(&Value::Wrapper(PrimitiveWrapper::Number(1.0))));
        assert!(is_object(&Value::Function(FunctionValue::plain("run"))));
    }

    #[rstest]
    #[case(Value::Undefined)]
    #[case(Value::Null)]
    #[case(Value::Bool(true))]
    #[case(Value::Number(1.0))]
    #[case(Value::from("text"))]
    fn primitives_are_not_objects(#[case] value: Value) {
        assert!(is_not_object(&value));
        assert!(is_not_object_like(&value));
        assert!(is_not_plain_object(&value));
    }

    #[rstest]
    fn object_like_excludes_functions_only() {
        assert!(is_object_like(&Value::Array(vec![])));
        assert!(is_object_like(&sample_date()));
        assert!(is_object_like(&Value::Wrapper(PrimitiveWrapper::Bool(true))));
        assert!(is_not_object_like(&Value::Function(FunctionValue::generator("walk"))));
    }

    #[rstest]
    fn plain_objects_are_literal_constructor_or_null_prototype() {
        assert!(is_plain_object(&Value::from(crate::object! { "a" => 1 })));
        assert!(is_plain_object(&Value::Object(ObjectValue::with_null_prototype(
            crate::object! {}
        ))));

        assert!(is_not_plain_object(&Value::Object(ObjectValue::class_instance(
            "Widget",
            crate::object! {},
        ))));
        assert!(is_not_plain_object(&Value::Array(vec![])));
        assert!(is_not_plain_object(&sample_date()));
        assert!(is_not_plain_object(&Value::Wrapper(PrimitiveWrapper::String(String::new()))));
    }
}
